//! Request ID middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request, wraps the whole request
//! lifecycle in a tracing span carrying that id, and echoes the id back to
//! the client in an `x-request-id` response header. All logs emitted while
//! a request is in flight include the request_id field.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the generated request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns a request ID and traces the request lifecycle.
///
/// Installed as the outermost layer so the span wraps all other middleware
/// and the handler itself.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let start = Instant::now();
        let mut response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
