//! Diagnosis service: simulated analysis over the built-in catalog.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::config::ANALYSIS_DELAY_MS;

use super::analyzer;
use super::catalog::{self, SAMPLE_ISSUE_COUNT};
use super::{DiagnoseRequest, HistoricalIssueEntry, IssueRecord};

/// Stateless diagnosis engine holding the built-in issue catalog.
///
/// The catalog is built once at startup and shared read-only across all
/// requests; cloning the service clones two `Arc`s, not the data.
#[derive(Clone)]
pub struct DiagnosisService {
    issues: Arc<[IssueRecord; SAMPLE_ISSUE_COUNT]>,
    history: Arc<[HistoricalIssueEntry; 3]>,
}

impl DiagnosisService {
    pub fn new() -> Self {
        Self {
            issues: Arc::new(catalog::sample_issues()),
            history: Arc::new(catalog::recent_issues()),
        }
    }

    /// Diagnoses the submitted logs.
    ///
    /// Waits the fixed simulated analysis latency (suspending only this
    /// request, the worker threads stay free), then returns the record
    /// selected by the keyword scan, or a uniformly random record when
    /// nothing matches.
    pub async fn diagnose(&self, request: &DiagnoseRequest) -> IssueRecord {
        tokio::time::sleep(Duration::from_millis(ANALYSIS_DELAY_MS)).await;

        tracing::info!(
            namespace = %request.namespace,
            log_count = request.logs.len(),
            "Received logs for diagnosis"
        );

        match analyzer::match_issue(&self.issues, &request.logs) {
            Some(record) => record.clone(),
            None => self.random_issue(),
        }
    }

    /// The fixed list of previously detected issues, newest first.
    pub fn recent_issues(&self) -> &[HistoricalIssueEntry] {
        self.history.as_ref()
    }

    /// Uniform pick across the catalog, used when no keyword matches.
    fn random_issue(&self) -> IssueRecord {
        let index = rand::thread_rng().gen_range(0..SAMPLE_ISSUE_COUNT);
        self.issues[index].clone()
    }
}

impl Default for DiagnosisService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn request(logs: &[&str]) -> DiagnoseRequest {
        DiagnoseRequest {
            logs: logs.iter().map(|line| line.to_string()).collect(),
            namespace: "default".to_string(),
            context: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnose_returns_matched_record() {
        let service = DiagnosisService::new();

        let record = service
            .diagnose(&request(&["container was OOMKilled by the kernel"]))
            .await;

        assert_eq!(record.issue, "OOMKilled");
        assert_eq!(record.confidence, 0.95);
        assert_eq!(record.details.severity, crate::diagnosis::Severity::Critical);
        assert_eq!(record.details.affected_pods, vec!["database-0".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnose_without_match_returns_catalog_record() {
        let service = DiagnosisService::new();
        let known: Vec<String> = catalog::sample_issues()
            .iter()
            .map(|record| record.issue.clone())
            .collect();

        let record = service.diagnose(&request(&["all systems nominal"])).await;
        assert!(known.contains(&record.issue), "unknown issue {}", record.issue);

        let record = service.diagnose(&request(&[])).await;
        assert!(known.contains(&record.issue));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_pick_covers_the_whole_catalog() {
        let service = DiagnosisService::new();
        let empty = request(&[]);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..500 {
            let record = service.diagnose(&empty).await;
            *counts.entry(record.issue).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), SAMPLE_ISSUE_COUNT, "not all records were picked");
        for (issue, count) in counts {
            // Expected share is 100 per record; far enough from zero that a
            // biased pick would show up.
            assert!(count >= 50, "{issue} picked only {count} times out of 500");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_is_fixed_across_calls() {
        let service = DiagnosisService::new();

        let first: Vec<String> = service
            .recent_issues()
            .iter()
            .map(|entry| entry.id.clone())
            .collect();
        let second: Vec<String> = service
            .recent_issues()
            .iter()
            .map(|entry| entry.id.clone())
            .collect();

        assert_eq!(first, vec!["issue-001", "issue-002", "issue-003"]);
        assert_eq!(first, second);
    }
}
