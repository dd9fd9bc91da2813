//! Built-in issue catalog and history data.
//!
//! All payloads served by the API come from here. The trigger keywords and
//! the sample records are position-paired: a log line containing keyword i
//! resolves to record i.

use chrono::{DateTime, TimeZone, Utc};

use super::{HistoricalIssueEntry, IssueDetails, IssueRecord, IssueStatus, Severity};

/// Number of built-in sample issues, and of trigger keywords.
pub const SAMPLE_ISSUE_COUNT: usize = 5;

/// Trigger keywords in priority order.
///
/// Matching is case-sensitive substring containment, mirroring the strings
/// Kubernetes itself puts in pod status reasons and event messages.
pub const TRIGGER_KEYWORDS: [&str; SAMPLE_ISSUE_COUNT] = [
    "CrashLoopBackOff",
    "ImagePull",
    "OOMKilled",
    "NetworkPolicy",
    "Unschedulable",
];

/// Builds the sample issue records, in trigger-keyword order.
pub fn sample_issues() -> [IssueRecord; SAMPLE_ISSUE_COUNT] {
    [
        IssueRecord {
            issue: "CrashLoopBackOff".to_string(),
            confidence: 0.92,
            suggestion: "Restart the pod or check livenessProbe configuration".to_string(),
            details: IssueDetails {
                affected_pods: vec!["frontend-app-7d9f4b8f9c-2x4z5".to_string()],
                root_cause: "Application is failing to start due to missing configuration"
                    .to_string(),
                severity: Severity::High,
            },
        },
        IssueRecord {
            issue: "ImagePullBackOff".to_string(),
            confidence: 0.89,
            suggestion: "Verify image name and ensure pull secrets are configured correctly"
                .to_string(),
            details: IssueDetails {
                affected_pods: vec!["backend-api-5c8d7f6b4d-3y6x7".to_string()],
                root_cause: "Container image not found in registry".to_string(),
                severity: Severity::Medium,
            },
        },
        IssueRecord {
            issue: "OOMKilled".to_string(),
            confidence: 0.95,
            suggestion: "Increase memory limits for the container".to_string(),
            details: IssueDetails {
                affected_pods: vec!["database-0".to_string()],
                root_cause: "Container exceeded memory limits".to_string(),
                severity: Severity::Critical,
            },
        },
        IssueRecord {
            issue: "NetworkPolicyBlocked".to_string(),
            confidence: 0.87,
            suggestion: "Update network policy to allow required traffic".to_string(),
            details: IssueDetails {
                affected_pods: vec!["auth-service-6b9c5d4e3f-4z7x8".to_string()],
                root_cause: "Network policy is blocking required connections".to_string(),
                severity: Severity::High,
            },
        },
        IssueRecord {
            issue: "PodUnschedulable".to_string(),
            confidence: 0.91,
            suggestion: "Check node resources or adjust pod resource requests".to_string(),
            details: IssueDetails {
                affected_pods: vec!["analytics-job-9e8d7c6b5a".to_string()],
                root_cause: "Insufficient resources available on nodes".to_string(),
                severity: Severity::Medium,
            },
        },
    ]
}

/// Builds the fixed issue history served by the listing endpoint.
pub fn recent_issues() -> [HistoricalIssueEntry; 3] {
    [
        HistoricalIssueEntry {
            id: "issue-001".to_string(),
            namespace: "production".to_string(),
            resource: "deployment/frontend".to_string(),
            issue: "CrashLoopBackOff".to_string(),
            detected: detected_at(2025, 1, 15, 10, 30, 15),
            status: IssueStatus::Remediated,
            confidence: 0.92,
        },
        HistoricalIssueEntry {
            id: "issue-002".to_string(),
            namespace: "staging".to_string(),
            resource: "pod/backend-api-5c8d7f6b4d-3y6x7".to_string(),
            issue: "ImagePullBackOff".to_string(),
            detected: detected_at(2025, 1, 15, 9, 45, 22),
            status: IssueStatus::Pending,
            confidence: 0.89,
        },
        HistoricalIssueEntry {
            id: "issue-003".to_string(),
            namespace: "production".to_string(),
            resource: "statefulset/database".to_string(),
            issue: "OOMKilled".to_string(),
            detected: detected_at(2025, 1, 15, 8, 12, 5),
            status: IssueStatus::Remediated,
            confidence: 0.95,
        },
    ]
}

fn detected_at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    // Only called with the literal dates above, all of which are valid.
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second).unwrap()
}
