//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::diagnosis::DiagnosisService;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the diagnosis service with its
/// built-in issue catalog. Nothing here changes after startup, so clones are
/// cheap and no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub diagnostics: DiagnosisService,
}

impl AppState {
    /// Creates application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            diagnostics: DiagnosisService::new(),
        }
    }
}
