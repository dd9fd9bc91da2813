//! Diagnosis domain module.
//!
//! This module contains the wire data model for diagnosis requests, issue
//! records, and the issue history, as well as the keyword-matching logic
//! that selects a canned record for a batch of log lines. There is no real
//! diagnostic engine behind it: the catalog is fixed demo data.
//!
//! Key re-exports:
//! - [`DiagnosisService`] - stateless diagnosis engine over the built-in catalog

mod analyzer;
mod catalog;
mod service;

pub use service::DiagnosisService;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a diagnosed issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Static descriptor of one simulated cluster fault and its suggested
/// remediation. Serialized as-is, this is also the diagnose response body.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord {
    pub issue: String,
    /// Mock detection confidence in [0, 1].
    pub confidence: f64,
    pub suggestion: String,
    pub details: IssueDetails,
}

/// Supporting detail attached to an issue record.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDetails {
    pub affected_pods: Vec<String>,
    pub root_cause: String,
    pub severity: Severity,
}

/// Diagnose request body.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnoseRequest {
    /// Raw log lines to scan. May be empty.
    pub logs: Vec<String>,
    /// Namespace the logs were collected from. Only logged.
    #[serde(default = "DiagnoseRequest::default_namespace")]
    pub namespace: String,
    /// Open-ended caller context. Accepted but never read.
    #[serde(default)]
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl DiagnoseRequest {
    fn default_namespace() -> String {
        "default".to_string()
    }
}

/// Remediation status of a historical issue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Pending,
    Remediated,
}

/// A previously "detected" issue, served by the history listing.
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalIssueEntry {
    pub id: String,
    pub namespace: String,
    pub resource: String,
    pub issue: String,
    pub detected: DateTime<Utc>,
    pub status: IssueStatus,
    pub confidence: f64,
}
