//! Statistics handlers.

mod compute_statistics;

pub use compute_statistics::{ComputeStatisticsCommand, ComputeStatisticsHandler};
