//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_VERSION;

/// Fixed health payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check handler.
///
/// Always reports healthy with the pinned API version. This is a liveness
/// probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: SERVICE_VERSION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(payload) = health().await;

        assert_eq!(payload.status, "healthy");
        assert_eq!(payload.version, "1.0.0");
        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            serde_json::json!({"status": "healthy", "version": "1.0.0"})
        );
    }
}
