//! One rendering session of one report.

use super::counts::{count_severities, SeverityCounts};
use super::filter::{filter_issues, FilterState, SeverityFilter};
use super::memo::Memo;
use super::view::{build_view, ReportView};
use crate::model::{IssueList, NormalizedReport};
use crate::normalize::normalize;
use serde::Serialize;

/// Recomputation counters for the memoized derivations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivationStats {
    pub count_computations: u64,
    pub filter_computations: u64,
}

/// Owns the filter selection and the cached derivations for one report.
///
/// Severity counts are keyed on the issue-list fingerprint only, so filter
/// changes never recount. The filtered subset is keyed on the fingerprint
/// and the filter value. Loading a payload whose issue list has the same
/// content keeps the current list, so nothing is recomputed.
#[derive(Debug, Default)]
pub struct ReportSession {
    report: Option<NormalizedReport>,
    filter: FilterState<SeverityFilter>,
    counts: Memo<u64, SeverityCounts>,
    filtered: Memo<(u64, SeverityFilter), IssueList>,
}

impl ReportSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a specific filter selected.
    #[must_use]
    pub fn with_filter(filter: SeverityFilter) -> Self {
        Self {
            filter: FilterState::with_filter(filter),
            ..Self::default()
        }
    }

    /// Load a raw payload. Returns whether there is anything to render.
    pub fn load(&mut self, raw: &serde_json::Value) -> bool {
        self.load_normalized(normalize(raw))
    }

    /// Load an already-normalized report (or its absence).
    pub fn load_normalized(&mut self, report: Option<NormalizedReport>) -> bool {
        let Some(mut report) = report else {
            self.report = None;
            return false;
        };

        if let Some(current) = &self.report {
            if current.body.issues == report.body.issues {
                report.body.issues = current.body.issues.clone();
            }
        }

        tracing::debug!(
            issues = report.body.issues.len(),
            fingerprint = report.body.issues.fingerprint(),
            "report loaded"
        );
        self.report = Some(report);
        true
    }

    /// The current report, `None` when the last payload was not an object.
    #[must_use]
    pub const fn report(&self) -> Option<&NormalizedReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn filter(&self) -> SeverityFilter {
        self.filter.current
    }

    pub fn select_filter(&mut self, filter: SeverityFilter) {
        self.filter.set(filter);
    }

    pub fn next_filter(&mut self) {
        self.filter.next();
    }

    pub fn prev_filter(&mut self) {
        self.filter.prev();
    }

    /// Counts derived from the current issue list.
    pub fn severity_counts(&mut self) -> Option<SeverityCounts> {
        let issues = &self.report.as_ref()?.body.issues;
        let key = issues.fingerprint();
        let counts = self.counts.get_or_compute(key, || {
            tracing::trace!(fingerprint = key, "recomputing severity counts");
            count_severities(issues)
        });
        Some(*counts)
    }

    /// The issues visible under the current filter.
    pub fn filtered_issues(&mut self) -> Option<IssueList> {
        let issues = &self.report.as_ref()?.body.issues;
        let filter = self.filter.current;
        let key = (issues.fingerprint(), filter);
        let filtered = self.filtered.get_or_compute(key, || {
            tracing::trace!(fingerprint = key.0, %filter, "recomputing filtered issues");
            filter_issues(issues, filter)
        });
        Some(filtered.clone())
    }

    /// Build the render tree. `None` means render nothing.
    pub fn view(&mut self) -> Option<ReportView> {
        let counts = self.severity_counts()?;
        let filtered = self.filtered_issues()?;
        let report = self.report.as_ref()?;
        Some(build_view(report, &counts, &filtered, self.filter.current))
    }

    #[must_use]
    pub const fn derivation_stats(&self) -> DerivationStats {
        DerivationStats {
            count_computations: self.counts.computations(),
            filter_computations: self.filtered.computations(),
        }
    }
}
