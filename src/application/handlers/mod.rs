//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod matrix;
pub mod statistics;

pub use matrix::{SubmitMatrixCommand, SubmitMatrixError, SubmitMatrixHandler, SubmitMatrixResult};
pub use statistics::{ComputeStatisticsCommand, ComputeStatisticsHandler};
