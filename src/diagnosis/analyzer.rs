//! Keyword scan over submitted log lines.

use super::catalog::{SAMPLE_ISSUE_COUNT, TRIGGER_KEYWORDS};
use super::IssueRecord;

/// Scans `logs` for trigger keywords and selects the matching record.
///
/// The scan is line-major, keyword-minor: each log line is tested against
/// every keyword in priority order before the scan moves to the next line,
/// and the first hit wins. A line mentioning several keywords therefore
/// resolves to the highest-priority one, and an earlier line beats a later
/// line regardless of keyword priority.
///
/// Returns `None` when no line contains any keyword.
pub fn match_issue<'a>(
    issues: &'a [IssueRecord; SAMPLE_ISSUE_COUNT],
    logs: &[String],
) -> Option<&'a IssueRecord> {
    for line in logs {
        for (index, keyword) in TRIGGER_KEYWORDS.iter().enumerate() {
            if line.contains(keyword) {
                return Some(&issues[index]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::catalog;
    use super::*;

    fn issues() -> [IssueRecord; SAMPLE_ISSUE_COUNT] {
        catalog::sample_issues()
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_each_keyword_selects_its_record() {
        let issues = issues();
        let expected = [
            "CrashLoopBackOff",
            "ImagePullBackOff",
            "OOMKilled",
            "NetworkPolicyBlocked",
            "PodUnschedulable",
        ];

        for (keyword, expected_issue) in TRIGGER_KEYWORDS.iter().zip(expected) {
            let line = format!("status changed: {keyword} observed");
            let record =
                match_issue(&issues, &lines(&[line.as_str()])).expect("keyword should match");
            assert_eq!(record.issue, expected_issue);
        }
    }

    #[test]
    fn test_earlier_line_wins_over_later_line() {
        let issues = issues();
        let logs = lines(&[
            "startup complete",
            "Warning: Failed to pull image, ImagePull error",
            "Last state: OOMKilled",
        ]);

        let record = match_issue(&issues, &logs).expect("should match");
        assert_eq!(record.issue, "ImagePullBackOff");
    }

    #[test]
    fn test_keyword_priority_breaks_ties_within_a_line() {
        let issues = issues();
        // OOMKilled appears first in the text, but CrashLoopBackOff has the
        // higher keyword priority.
        let logs = lines(&["pod OOMKilled then entered CrashLoopBackOff"]);

        let record = match_issue(&issues, &logs).expect("should match");
        assert_eq!(record.issue, "CrashLoopBackOff");
    }

    #[test]
    fn test_matching_is_case_sensitive_substring() {
        let issues = issues();

        assert!(match_issue(&issues, &lines(&["oomkilled lowercase"])).is_none());

        // Keyword embedded in a longer token still matches.
        let record = match_issue(&issues, &lines(&["reason=OOMKilled,exitCode=137"]))
            .expect("should match");
        assert_eq!(record.issue, "OOMKilled");
    }

    #[test]
    fn test_no_keyword_returns_none() {
        let issues = issues();
        assert!(match_issue(&issues, &[]).is_none());
        assert!(match_issue(&issues, &lines(&["all pods running", "no restarts"])).is_none());
    }
}
