//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with DTOs, handlers and routes.
//! `app_router` composes them with the authentication layer and the shared
//! tower stack (request ids, tracing, a request deadline answered as JSON).

pub mod error;
pub mod health;
pub mod matrix;
pub mod middleware;
pub mod statistics;

use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, Router};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::application::{ComputeStatisticsHandler, SubmitMatrixHandler};
use crate::domain::matrix::StatisticsAggregator;
use crate::ports::{Factorizer, SessionValidator};

pub use error::{handle_middleware_error, ApiError, ErrorResponse};
pub use health::health_router;
pub use matrix::{matrix_router, MatrixAppState};
pub use statistics::{statistics_router, StatisticsAppState};

/// Everything the router needs, injected by the caller.
#[derive(Clone)]
pub struct AppServices {
    pub session_validator: Arc<dyn SessionValidator>,
    pub factorizer: Arc<dyn Factorizer>,
    pub aggregator: StatisticsAggregator,
    pub request_timeout: Duration,
}

/// Build the complete application router.
///
/// # Routes
///
/// - `GET /health` - Liveness check, no authentication
/// - `POST /api/v1/statistics` - Statistics over a Q/R pair (bearer)
/// - `POST /api/v1/matrix/qr` - Submit a matrix for factorization (bearer)
pub fn app_router(services: AppServices) -> Router {
    let statistics_state = StatisticsAppState {
        handler: ComputeStatisticsHandler::new(services.aggregator),
    };
    let matrix_state = MatrixAppState {
        handler: Arc::new(SubmitMatrixHandler::new(
            services.factorizer,
            services.aggregator,
        )),
    };

    let api = Router::new()
        .merge(statistics_router().with_state(statistics_state))
        .merge(matrix_router().with_state(matrix_state))
        .layer(axum::middleware::from_fn_with_state(
            services.session_validator,
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(health_router())
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(services.request_timeout)),
        )
}
