//! Severity-count aggregation over the issue list.

use super::SeverityFilter;
use crate::model::{IssueList, IssueRecord, Severity};
use serde::Serialize;

/// Counts derived from the issue list itself.
///
/// `all` is the list length. The four buckets count exact severity literals
/// only, so their sum can be lower than `all`. These numbers are independent
/// of the producer's own aggregates in [`crate::model::AnalysisBody`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub all: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    /// Count for the bucket a filter selects.
    #[must_use]
    pub const fn get(&self, filter: SeverityFilter) -> usize {
        match filter {
            SeverityFilter::All => self.all,
            SeverityFilter::Critical => self.critical,
            SeverityFilter::High => self.high,
            SeverityFilter::Medium => self.medium,
            SeverityFilter::Low => self.low,
        }
    }

    /// Issues whose severity is `threshold` or worse.
    #[must_use]
    pub fn at_or_above(&self, threshold: Severity) -> usize {
        Severity::ALL
            .iter()
            .filter(|severity| **severity >= threshold)
            .map(|severity| self.get(SeverityFilter::from(*severity)))
            .sum()
    }

    /// Sum of the four recognized buckets.
    #[must_use]
    pub const fn recognized(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Single pass over the list.
#[must_use]
pub fn count_severities(issues: &IssueList) -> SeverityCounts {
    let mut counts = SeverityCounts {
        all: issues.len(),
        ..SeverityCounts::default()
    };
    for slot in issues {
        match slot.as_ref().and_then(IssueRecord::severity_level) {
            Some(Severity::Critical) => counts.critical += 1,
            Some(Severity::High) => counts.high += 1,
            Some(Severity::Medium) => counts.medium += 1,
            Some(Severity::Low) => counts.low += 1,
            None => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Option<&str>) -> Option<IssueRecord> {
        Some(IssueRecord {
            severity: severity.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_count_severities() {
        let issues = IssueList::new(vec![
            issue(Some("CRITICAL")),
            issue(Some("HIGH")),
            issue(Some("HIGH")),
            issue(Some("Medium")),
            issue(None),
            None,
            issue(Some("LOW")),
        ]);
        let counts = count_severities(&issues);
        assert_eq!(
            counts,
            SeverityCounts {
                all: 7,
                critical: 1,
                high: 2,
                medium: 0,
                low: 1,
            }
        );
        assert_eq!(counts.recognized(), 4);
        assert_eq!(counts.get(SeverityFilter::High), 2);
    }

    #[test]
    fn test_at_or_above() {
        let counts = SeverityCounts {
            all: 10,
            critical: 1,
            high: 2,
            medium: 3,
            low: 4,
        };
        assert_eq!(counts.at_or_above(Severity::Critical), 1);
        assert_eq!(counts.at_or_above(Severity::High), 3);
        assert_eq!(counts.at_or_above(Severity::Low), 10);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(count_severities(&IssueList::empty()), SeverityCounts::default());
    }
}
