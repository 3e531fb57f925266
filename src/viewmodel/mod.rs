//! View-model engine.
//!
//! Turns a [`NormalizedReport`](crate::model::NormalizedReport) plus the
//! current filter selection into a render-ready [`ReportView`]:
//!
//! - [`count_severities`] aggregates exact severity literals in one pass
//! - [`filter_issues`] derives the visible subset
//! - [`issue_key`] assigns every rendered issue a list-identity key
//! - [`ReportSession`] owns the filter state and memoizes the derivations
//!   on the issue list's identity token
//!
//! Nothing in this module fails or performs I/O.

mod counts;
mod filter;
mod identity;
mod memo;
mod session;
mod view;

pub use counts::{count_severities, SeverityCounts};
pub use filter::{filter_issues, CycleFilter, FilterState, SeverityFilter};
pub use identity::issue_key;
pub use memo::Memo;
pub use session::{DerivationStats, ReportSession};
pub use view::{
    FilterTab, IssueCard, PasswordPanel, Recommendation, ReportView, SeverityTiles, SummaryPanel,
    DEFAULT_CATEGORY, EMPTY_FILTER_MESSAGE, MISSING_FIELD, NO_DESCRIPTION, UNKNOWN_SEVERITY,
    UNTITLED_ISSUE,
};
