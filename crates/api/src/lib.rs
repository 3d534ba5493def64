//! HTTP API for the products service.
//!
//! Serves the greeting endpoint at the root path, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use error::ApiError;

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::greeting::get))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .fallback(unknown_path)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Unmatched paths get the same JSON error envelope as every other response.
async fn unknown_path(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
