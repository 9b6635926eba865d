//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - Bearer token verification
//! - `Factorizer` - QR decomposition by the external factorization service

mod factorizer;
mod session_validator;

pub use factorizer::{Factorization, FactorizationError, Factorizer};
pub use session_validator::SessionValidator;
