//! Matrix module - Validation and statistics over numeric grids.
//!
//! This is the only part of the crate with real domain logic. Everything
//! here is pure and synchronous: no ports, no I/O, no shared state.
//!
//! # Components
//!
//! - `Matrix` / `Dimensions` - Rectangular grid of finite reals
//! - `normalize` / `ensure_submittable` - Zero-padding and the rows >= cols rule
//! - `is_diagonal` - Off-diagonal magnitude check
//! - `StatisticsAggregator` - max/min/sum/average plus diagonality of Q and R
//! - `ValidationGate` - Boundary checks before aggregation

mod diagonality;
mod errors;
#[allow(clippy::module_inception)]
mod matrix;
mod normalizer;
mod statistics;
mod validation_gate;

pub use diagonality::{is_diagonal, DEFAULT_TOLERANCE};
pub use errors::{MatrixError, MatrixErrorKind};
pub use matrix::{Dimensions, Matrix};
pub use normalizer::{ensure_submittable, normalize};
pub use statistics::{DiagonalFlags, StatisticsAggregator, StatisticsResult};
pub use validation_gate::{parse_grid, ValidationGate};
