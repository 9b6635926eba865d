//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token verification (shared-secret JWT, mock)
//! - `factorization` - QR factorization service client (HTTP, mock)
//! - `http` - axum REST API

pub mod auth;
pub mod factorization;
pub mod http;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use factorization::{HttpFactorizationClient, MockFactorizer};
pub use http::{app_router, AppServices};
