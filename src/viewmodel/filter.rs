//! Severity filter state and filtered-subset derivation.
//!
//! The filter cycling machinery is generic so any enum-based selector can
//! reuse it; [`SeverityFilter`] is the five-way selector over issue
//! severities.

use crate::model::{IssueList, IssueRecord, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for filter types that can cycle through options.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next filter in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous filter in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the filter.
    fn display_name(&self) -> &str;
}

/// Generic filter state that works with any [`CycleFilter`] enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: CycleFilter> {
    /// Current filter value
    pub current: F,
}

impl<F: CycleFilter> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CycleFilter> FilterState<F> {
    /// Create a new filter state with the default filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: F::default(),
        }
    }

    /// Create a filter state with a specific initial value.
    #[must_use]
    pub const fn with_filter(filter: F) -> Self {
        Self { current: filter }
    }

    /// Cycle to the next filter.
    pub fn next(&mut self) {
        self.current = self.current.next();
    }

    /// Cycle to the previous filter.
    pub fn prev(&mut self) {
        self.current = self.current.prev();
    }

    /// Set a specific filter.
    pub fn set(&mut self, filter: F) {
        self.current = filter;
    }

    /// Reset to the default filter.
    pub fn reset(&mut self) {
        self.current = F::default();
    }

    /// Get the current filter's display name.
    pub fn display_name(&self) -> &str {
        self.current.display_name()
    }
}

/// Issue-list selector: everything, or one severity bucket.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityFilter {
    #[default]
    All,
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityFilter {
    /// Selector order as presented to the user.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
    ];

    /// The severity bucket this filter selects, `None` for [`SeverityFilter::All`].
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::All => None,
            Self::Critical => Some(Severity::Critical),
            Self::High => Some(Severity::High),
            Self::Medium => Some(Severity::Medium),
            Self::Low => Some(Severity::Low),
        }
    }

    /// Upper-case selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.severity() {
            None => "ALL",
            Some(severity) => severity.as_str(),
        }
    }

    /// Position in [`SeverityFilter::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    /// Whether an issue slot passes this filter. Null entries only pass `All`.
    #[must_use]
    pub fn matches(self, issue: Option<&IssueRecord>) -> bool {
        match self.severity() {
            None => true,
            Some(wanted) => issue.and_then(IssueRecord::severity_level) == Some(wanted),
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self::Critical,
            Severity::High => Self::High,
            Severity::Medium => Self::Medium,
            Severity::Low => Self::Low,
        }
    }
}

impl CycleFilter for SeverityFilter {
    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn display_name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the issues visible under `filter`.
///
/// [`SeverityFilter::All`] hands back the same list (identity preserved, no
/// copy). Any other filter yields the order-preserving subsequence of issues
/// whose severity literal equals the bucket exactly.
#[must_use]
pub fn filter_issues(issues: &IssueList, filter: SeverityFilter) -> IssueList {
    if filter == SeverityFilter::All {
        return issues.clone();
    }
    IssueList::new(
        issues
            .iter()
            .filter(|&slot| filter.matches(slot.as_ref()))
            .cloned()
            .collect(),
    )
}
