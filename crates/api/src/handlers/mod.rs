//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate the request shape, run repository calls (inside one
//! transaction when more than one statement is involved) and map failures
//! through [`AppError`](crate::error::AppError).

pub mod auth;
pub mod brigade;
pub mod collector;
pub mod harvest;
pub mod product;
