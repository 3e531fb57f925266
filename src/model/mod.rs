//! Typed records for a single security-analysis report.
//!
//! Every analysis payload, however partial, is normalized into these
//! structures before any view derivation happens. Optional sub-reports stay
//! `Option`, counts are always present, and the issue list is always a list.
//!
//! The element type of [`IssueList`] is `Option<IssueRecord>`: an entry that
//! was `null` or not an object in the payload is kept as `None` so it still
//! occupies its slot (and still receives a display key) instead of being
//! silently dropped.

mod report;
mod score;
mod severity;

pub use report::{
    AnalysisBody, ConfigSummary, IssueList, IssueRecord, NormalizedReport, PasswordAnalysis,
    CVE_NOT_AVAILABLE,
};
pub use score::{ColorClass, ScoreBand, SecurityScore};
pub use severity::{PasswordStrength, Severity};
