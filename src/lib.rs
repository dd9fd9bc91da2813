//! AutoKube AI Backend
//!
//! A mock diagnosis API for Kubernetes-style cluster issues: it accepts log
//! text and returns a canned diagnosis selected by keyword matching, or at
//! random when nothing matches. Built with Axum; all served data is fixed
//! demo content, no cluster is ever contacted.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
