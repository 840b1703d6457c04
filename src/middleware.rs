//! Per-request span carrying a generated request id.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Outermost layer, so the span also covers the `TraceLayer` events.
pub async fn request_id(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        Span::current().record("duration_ms", duration_ms);
        info!(status = response.status().as_u16(), duration_ms, "Request completed");

        // Hyphenated uuids are always valid header values.
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        response
    }
    .instrument(span)
    .await
}
