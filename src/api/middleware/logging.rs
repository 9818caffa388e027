//! Logging middleware for request/response tracing.
//!
//! Logs one line when a request arrives and one when its response goes
//! out, correlated through the request ID and wrapped in a tracing span.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, span, Instrument, Level};

use super::RequestId;

/// Logs method, path and request ID on the way in; status and duration
/// on the way out.
///
/// The span wraps the inner future with `Instrument` rather than an
/// entered guard; the guard is not Send and cannot be held across await.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = span!(
        Level::INFO,
        "http_request",
        method = %method,
        uri = %uri,
        request_id = %request_id
    );

    async move {
        info!(
            method = %method,
            path = %uri.path(),
            request_id = %request_id,
            "Request received"
        );

        let start = Instant::now();
        let response = next.run(request).await;
        let duration = start.elapsed();

        info!(
            status = %response.status().as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id,
            "Response sent"
        );

        response
    }
    .instrument(span)
    .await
}
