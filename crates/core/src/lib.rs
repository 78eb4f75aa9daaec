//! Domain core for the GardenSpace backend.
//!
//! Holds the shared id/timestamp types, the [`error::CoreError`] taxonomy and
//! the pure rules (input shape, brigade membership, enum vocabularies) that
//! handlers apply before touching the database.

pub mod brigade;
pub mod collector;
pub mod error;
pub mod harvest;
pub mod person;
pub mod types;
pub mod validation;
