//! Root status endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::ROOT_STATUS_MESSAGE;

/// Fixed status payload for the service root.
#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub message: &'static str,
}

/// Root handler confirming the backend is up and reachable.
pub async fn status() -> Json<RootStatus> {
    Json(RootStatus {
        message: ROOT_STATUS_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_payload() {
        let Json(payload) = status().await;

        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            serde_json::json!({"message": "AutoKube AI Backend is running"})
        );
    }
}
