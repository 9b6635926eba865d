//! Shared-secret JWT session validator.
//!
//! Verifies HS256 bearer tokens signed with the secret the issuing service
//! shares with this one. Issuance happens elsewhere; this adapter only
//! checks signatures and expiry and maps claims to an `AuthenticatedUser`.
//!
//! # Claims
//!
//! The caller's identity is taken from the first present claim of `sub`,
//! `userId` and `username`. A token carrying none of them is rejected.
//! `exp` is checked when present.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Claims accepted in a bearer token.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,

    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl TokenClaims {
    fn into_user(self) -> Option<AuthenticatedUser> {
        let id = self
            .sub
            .or(self.user_id)
            .or_else(|| self.username.clone())
            .filter(|id| !id.is_empty())?;
        Some(AuthenticatedUser::new(id, self.username))
    }
}

/// Session validator backed by an HS256 shared secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        // Tokens without exp are accepted; exp is still enforced when present.
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAlgorithm => {
                    tracing::warn!("Token signed with unexpected algorithm");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?;

        token_data.claims.into_user().ok_or_else(|| {
            tracing::warn!("Token carries no identity claim");
            AuthError::InvalidToken
        })
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
