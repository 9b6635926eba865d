//! HTTP client for the external QR factorization service.
//!
//! Sends `POST {base_url}/api/v1/matrix/qr` with `{ "matrix": [[...]] }` and
//! reads `{ original, Q, R, statistics? }` back. Only Q and R are kept; any
//! statistics the service computed are ignored and recomputed locally after
//! the factors pass validation.
//!
//! Retryable failures (5xx, refused connections, timeouts) are retried with
//! exponential backoff starting at `retry_backoff` and doubling per attempt.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::config::FactorizationConfig;
use crate::domain::matrix::Matrix;
use crate::ports::{Factorization, FactorizationError, Factorizer};

const QR_PATH: &str = "/api/v1/matrix/qr";

#[derive(Debug, Serialize)]
struct FactorizeRequest<'a> {
    matrix: &'a Matrix,
}

#[derive(Debug, Deserialize)]
struct FactorizeResponse {
    #[serde(rename = "Q")]
    q: Vec<Vec<f64>>,
    #[serde(rename = "R")]
    r: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// Factorizer backed by the remote service.
#[derive(Debug, Clone)]
pub struct HttpFactorizationClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl HttpFactorizationClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &FactorizationConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), QR_PATH),
            timeout: config.timeout(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff(),
        })
    }

    /// The full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_request(
        &self,
        matrix: &Matrix,
        access_token: Option<&str>,
    ) -> Result<Response, FactorizationError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&FactorizeRequest { matrix });

        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                FactorizationError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else if e.is_connect() {
                FactorizationError::unavailable(format!("Connection failed: {}", e))
            } else {
                FactorizationError::network(e.to_string())
            }
        })
    }

    /// Maps a non-success status to an error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, FactorizationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::BAD_REQUEST => Err(FactorizationError::InvalidInput(
                Self::error_message(&error_body),
            )),
            StatusCode::UNAUTHORIZED => Err(FactorizationError::Unauthorized),
            s if s.is_server_error() => Err(FactorizationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(FactorizationError::protocol(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Extracts `error` from a JSON error body, falling back to the raw text.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ServiceErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string())
    }

    async fn parse_response(&self, response: Response) -> Result<Factorization, FactorizationError> {
        let response = self.handle_response_status(response).await?;

        let body: FactorizeResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FactorizationError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else if e.is_decode() {
                FactorizationError::protocol(format!("Failed to parse response: {}", e))
            } else {
                FactorizationError::network(e.to_string())
            }
        })?;

        Ok(Factorization {
            q: body.q,
            r: body.r,
        })
    }

    async fn attempt(
        &self,
        matrix: &Matrix,
        access_token: Option<&str>,
    ) -> Result<Factorization, FactorizationError> {
        let response = self.send_request(matrix, access_token).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl Factorizer for HttpFactorizationClient {
    async fn factorize(
        &self,
        matrix: &Matrix,
        access_token: Option<&str>,
    ) -> Result<Factorization, FactorizationError> {
        let mut retry_count = 0;

        loop {
            match self.attempt(matrix, access_token).await {
                Ok(factorization) => return Ok(factorization),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.max_retries {
                        return Err(err);
                    }

                    // Exponential backoff: base, 2x base, 4x base, ...
                    let delay = self.retry_backoff.saturating_mul(1 << retry_count);
                    tracing::warn!(
                        attempt = retry_count + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Factorization request failed, retrying: {}",
                        err
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
            }
        }
    }
}
