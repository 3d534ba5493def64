//! Greeting endpoint.

use axum::Json;

/// Payload served from the root path, JSON-encoded as `"Hello World"`.
pub const GREETING: &str = "Hello World";

/// GET / — returns the greeting as a JSON string.
#[tracing::instrument]
pub async fn get() -> Json<&'static str> {
    metrics::counter!("greeting_requests_total").increment(1);
    Json(GREETING)
}
