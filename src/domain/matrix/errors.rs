//! Error types for matrix validation.

use std::fmt;
use thiserror::Error;

/// Broad category of a matrix rejection.
///
/// Both kinds are user-correctable and terminal for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixErrorKind {
    /// The grid has the wrong structure (ragged, empty, too wide, not a grid).
    Shape,
    /// A cell holds something other than a finite number.
    Value,
}

impl fmt::Display for MatrixErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatrixErrorKind::Shape => "SHAPE_ERROR",
            MatrixErrorKind::Value => "VALUE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Reasons a grid cannot become a [`Matrix`](super::Matrix).
///
/// `field` names the input the grid came from (`"Q"`, `"R"`, `"matrix"`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("{field} must be an array of rows")]
    NotAGrid { field: &'static str },

    #[error("{field} row {row} must be an array of numbers")]
    RowNotArray { field: &'static str, row: usize },

    #[error("{field}[{row}][{col}] is not a number")]
    NotANumber {
        field: &'static str,
        row: usize,
        col: usize,
    },

    #[error("{field}[{row}][{col}] must be finite, got {value}")]
    NonFinite {
        field: &'static str,
        row: usize,
        col: usize,
        value: f64,
    },

    #[error("{field} row {row} has {actual} columns, expected {expected}")]
    Ragged {
        field: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must have at least as many rows as columns (got {rows}x{cols})")]
    TooWide {
        field: &'static str,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> MatrixErrorKind {
        match self {
            MatrixError::NotANumber { .. } | MatrixError::NonFinite { .. } => {
                MatrixErrorKind::Value
            }
            MatrixError::NotAGrid { .. }
            | MatrixError::RowNotArray { .. }
            | MatrixError::Ragged { .. }
            | MatrixError::Empty { .. }
            | MatrixError::TooWide { .. } => MatrixErrorKind::Shape,
        }
    }

    /// Returns the name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            MatrixError::NotAGrid { field }
            | MatrixError::RowNotArray { field, .. }
            | MatrixError::NotANumber { field, .. }
            | MatrixError::NonFinite { field, .. }
            | MatrixError::Ragged { field, .. }
            | MatrixError::Empty { field }
            | MatrixError::TooWide { field, .. } => field,
        }
    }

    /// Returns a stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::NotAGrid { .. } => "NOT_A_GRID",
            MatrixError::RowNotArray { .. } => "ROW_NOT_ARRAY",
            MatrixError::NotANumber { .. } => "NOT_A_NUMBER",
            MatrixError::NonFinite { .. } => "NON_FINITE",
            MatrixError::Ragged { .. } => "RAGGED",
            MatrixError::Empty { .. } => "EMPTY",
            MatrixError::TooWide { .. } => "TOO_WIDE",
        }
    }
}
