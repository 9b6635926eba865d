//! Factorization adapters.
//!
//! Implementations of the `Factorizer` port:
//!
//! - `http_client` - reqwest client for the remote QR service
//! - `mock` - Canned responses with call recording for tests

mod http_client;
mod mock;

pub use http_client::HttpFactorizationClient;
pub use mock::MockFactorizer;
