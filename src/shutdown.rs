//! Graceful shutdown signal handling.
//!
//! The returned future resolves when the process receives Ctrl+C or, on
//! Unix, SIGTERM. Handed to axum's `with_graceful_shutdown` so in-flight
//! requests (including diagnoses mid-delay) drain before the listener
//! closes.

/// Completes on the first shutdown signal.
pub async fn signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
