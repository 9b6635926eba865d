//! Request/response DTOs for the statistics endpoint.
//!
//! `Q` and `R` are kept as raw JSON so that shape problems (a string where
//! a grid belongs, a ragged row) surface as matrix errors naming the
//! offending factor, not as generic body rejections.

use serde::Deserialize;

/// Body of `POST /api/v1/statistics`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsRequest {
    #[serde(rename = "Q")]
    pub q: serde_json::Value,
    #[serde(rename = "R")]
    pub r: serde_json::Value,
}
