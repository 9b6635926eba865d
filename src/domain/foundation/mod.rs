//! Foundation module - Shared domain primitives.
//!
//! Contains the caller identity and authentication error types shared by
//! the ports and the HTTP adapter.

mod auth;

pub use auth::{AuthError, AuthenticatedUser};
