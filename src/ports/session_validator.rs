//! Port for verifying bearer tokens.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a raw bearer token into the caller's identity.
///
/// Implementations reject tokens with a bad signature or an unexpected
/// algorithm as `AuthError::InvalidToken`, and tokens past their expiry as
/// `AuthError::TokenExpired`.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the header value with the "Bearer " prefix removed.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
