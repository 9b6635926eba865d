//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (caller identity, auth errors)
//! - `matrix` - Matrix validation, normalization and statistics

pub mod foundation;
pub mod matrix;
