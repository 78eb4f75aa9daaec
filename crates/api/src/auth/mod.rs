//! Credential primitives.
//!
//! - [`password`] -- Argon2id hashing, verification and the registration password policy.
//! - [`jwt`] -- bearer token issuing and validation.

pub mod jwt;
pub mod password;
