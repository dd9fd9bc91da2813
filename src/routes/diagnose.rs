//! Log diagnosis endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::diagnosis::{DiagnoseRequest, IssueRecord};
use crate::error::AppError;
use crate::state::AppState;

/// Diagnose handler.
///
/// Accepts a batch of log lines and returns the catalog record selected by
/// keyword matching, or a random one when nothing matches. The extractor
/// result is taken as a value so schema failures surface as structured
/// validation errors instead of axum's plain-text default.
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> Result<Json<IssueRecord>, AppError> {
    let Json(request) = payload?;

    let record = state.diagnostics.diagnose(&request).await;
    Ok(Json(record))
}
