//! Authentication types for the domain layer.
//!
//! These types represent the caller identified by a verified bearer token.
//! They have no dependency on the token format; any `SessionValidator`
//! implementation can populate them.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token verification:
//! let user = AuthenticatedUser::new("user-123", Some("alice".to_string()));
//! request.extensions_mut().insert(user);
//! ```

use thiserror::Error;

/// Caller extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable identifier of the caller (`sub`, `userId` or `username` claim).
    pub id: String,

    /// Human-readable name if the token carried one.
    pub username: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>, username: Option<String>) -> Self {
        Self {
            id: id.into(),
            username,
        }
    }

    /// Returns the username, or the id as fallback.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.id)
    }
}

/// Errors that can occur during token verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is malformed, signed with the wrong key or algorithm, or
    /// lacks an identity claim.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The signature is valid but the token has expired.
    #[error("Token expired")]
    TokenExpired,
}
