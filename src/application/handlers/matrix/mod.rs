//! Matrix submission handlers.

mod submit_matrix;

pub use submit_matrix::{
    SubmitMatrixCommand, SubmitMatrixError, SubmitMatrixHandler, SubmitMatrixResult,
};
