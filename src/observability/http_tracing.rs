//! # HTTP Request Tracing Middleware
//!
//! Axum middleware that wraps each request in an `http_request` span and logs
//! the outcome. Query strings are never recorded: they carry credentials.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;

use crate::request_span;

/// Runs the request inside a span carrying method, path and a request id,
/// then logs status and latency. 5xx logs at error, 4xx at warn.
pub async fn trace_http_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let span = request_span!(method, path);
    let start = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if status >= 500 {
            tracing::error!(status, elapsed_ms, "request failed");
        } else if status >= 400 {
            tracing::warn!(status, elapsed_ms, "request rejected");
        } else {
            tracing::info!(status, elapsed_ms, "request completed");
        }
    });

    response
}
