//! Issue history endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::diagnosis::HistoricalIssueEntry;
use crate::state::AppState;

/// Wrapper payload for the issue history listing.
#[derive(Debug, Serialize)]
pub struct IssueList {
    pub issues: Vec<HistoricalIssueEntry>,
}

/// History handler returning the fixed list of recently detected issues.
pub async fn list(State(state): State<AppState>) -> Json<IssueList> {
    Json(IssueList {
        issues: state.diagnostics.recent_issues().to_vec(),
    })
}
