use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-level errors surfaced to API clients.
///
/// The diagnosis logic itself is total: every schema-valid request produces
/// a response. The only failure mode left is the request boundary, a body
/// that does not deserialize into the expected schema.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Structured body returned for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // JsonRejection picks the status itself: 422 for a body that is
            // valid JSON but fails the schema, 400 for malformed JSON, 415
            // for a missing JSON content type.
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "invalid_request", rejection.body_text())
            }
        };

        tracing::debug!(status = status.as_u16(), code, %message, "Request rejected");

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "invalid_request",
                message: "missing field `logs`".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            serde_json::json!({
                "error": {
                    "code": "invalid_request",
                    "message": "missing field `logs`",
                }
            })
        );
    }
}
