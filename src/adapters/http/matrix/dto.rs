//! Request/response DTOs for matrix submission.

use serde::{Deserialize, Serialize};

use crate::application::SubmitMatrixResult;
use crate::domain::matrix::{Matrix, StatisticsResult};

/// Body of `POST /api/v1/matrix/qr`.
///
/// Rows may be ragged; they are zero-padded before submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMatrixRequest {
    pub matrix: serde_json::Value,
}

/// Successful submission response.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitMatrixResponse {
    pub original: Matrix,
    #[serde(rename = "Q")]
    pub q: Matrix,
    #[serde(rename = "R")]
    pub r: Matrix,
    pub statistics: StatisticsResult,
}

impl From<SubmitMatrixResult> for SubmitMatrixResponse {
    fn from(result: SubmitMatrixResult) -> Self {
        Self {
            original: result.original,
            q: result.q,
            r: result.r,
            statistics: result.statistics,
        }
    }
}
