//! **View-model and renderers for security analysis reports.**
//!
//! `secreport` takes the JSON produced by a configuration security scanner
//! (a file name, an analysis timestamp and an `analysis` body holding a
//! score, per-severity counts, issues and optional sub-reports) and turns it
//! into a render-ready view: score band and colors, severity filter tabs
//! with live counts, stable keys for every issue, and display defaults for
//! anything the producer left out.
//!
//! ## Core Concepts & Modules
//!
//! - **[`normalize`]**: Reads arbitrary JSON into a [`NormalizedReport`] without
//!   ever failing; partial or mistyped payloads degrade to defaults.
//! - **[`viewmodel`]**: Derives counts, the filtered issue list and the
//!   [`ReportView`] render tree. [`ReportSession`] memoizes the derivations on
//!   the identity of the issue list, so changing only the filter never
//!   recounts.
//! - **[`reports`]**: Summary, Markdown, HTML and JSON renderers over a
//!   [`ReportView`].
//! - **[`tui`]**: Interactive terminal screen driven by the same session.
//! - **[`pipeline`]**: Reading reports from files or stdin and writing output.
//!
//! ## Getting Started
//!
//! ```
//! use secreport::{ReportSession, SeverityFilter};
//! use serde_json::json;
//!
//! let mut session = ReportSession::new();
//! session.load(&json!({
//!     "filename": "core-switch.cfg",
//!     "analysis": {
//!         "securityScore": 64,
//!         "issues": [
//!             {"id": "ssh-v1", "severity": "HIGH", "title": "SSH version 1 allowed"},
//!             {"severity": "LOW", "title": "No login banner"}
//!         ]
//!     }
//! }));
//!
//! session.select_filter(SeverityFilter::High);
//! let view = session.view().unwrap();
//! assert_eq!(view.summary.rating, "Fair");
//! assert_eq!(view.issues.len(), 1);
//! assert_eq!(view.issues[0].key, "ssh-v1");
//! assert_eq!(view.filters[0].label, "ALL (2)");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Score and layout math casts between usize, u16 and f64 with bounded values
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reports;
pub mod tui;
pub mod viewmodel;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, Validatable, ViewConfig};
pub use error::{ErrorContext, Result, SecReportError};
pub use model::{
    ColorClass, IssueList, IssueRecord, NormalizedReport, ScoreBand, SecurityScore, Severity,
};
pub use normalize::{normalize, normalize_str};
pub use pipeline::{read_report, LoadedReport};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
pub use viewmodel::{
    count_severities, filter_issues, issue_key, IssueCard, ReportSession, ReportView,
    SeverityCounts, SeverityFilter,
};
