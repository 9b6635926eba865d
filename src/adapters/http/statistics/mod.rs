//! Statistics HTTP adapter - the inbound boundary of the statistics engine.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::StatisticsRequest;
pub use handlers::StatisticsAppState;
pub use routes::statistics_router;
