//! Matrix HTTP adapter - submits user matrices for QR factorization.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{SubmitMatrixRequest, SubmitMatrixResponse};
pub use handlers::MatrixAppState;
pub use routes::matrix_router;
