//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a bearer token.

pub mod auth;
