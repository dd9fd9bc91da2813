//! HTTP route handlers for the diagnosis API.
//!
//! Routes are organized by purpose: fixed-payload probe endpoints at the
//! root, and the diagnosis API under `/api`. Every handler speaks JSON.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod diagnose;
pub mod health;
pub mod issues;
pub mod root;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Permissive development-mode CORS.
///
/// Any origin is allowed together with credentials. A literal `*` cannot be
/// combined with `allow_credentials(true)`, so the request's own origin,
/// method, and headers are mirrored back instead, which amounts to the same
/// thing. Do not expose this configuration to the open internet.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Creates the Axum router with all routes, CORS, and request tracing.
pub fn create_router(state: AppState) -> Router {
    // Probe endpoints - fixed payloads for liveness checks
    let probe_routes = Router::new()
        .route("/", get(root::status))
        .route("/health", get(health::health));

    // Diagnosis API
    let api_routes = Router::new()
        .route("/api/diagnose", post(diagnose::diagnose))
        .route("/api/issues", get(issues::list));

    Router::new()
        .merge(probe_routes)
        .merge(api_routes)
        .with_state(state)
        .layer(cors_layer())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
