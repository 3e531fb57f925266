//! Renderers for the report view.
//!
//! Every output surface consumes the same [`ReportView`] render tree:
//! - Summary: compact colored terminal output
//! - Markdown: human-readable documentation
//! - HTML: self-contained page with inline styles
//! - JSON: the render tree itself, for programmatic consumers
//!
//! # Security
//!
//! Report text comes from an external analysis producer. The [`escape`]
//! module must be used for everything embedded in HTML or Markdown.

pub mod escape;
mod html;
mod json;
mod markdown;
mod summary;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata, DEFAULT_TITLE};

use crate::viewmodel::{IssueCard, ReportView};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the view to a string
    fn generate(&self, view: &ReportView, config: &ReportConfig) -> Result<String, ReportError>;

    /// Write the rendered view to a writer
    fn write_to(
        &self,
        view: &ReportView,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(view, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json | ReportFormat::Tui => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

/// Issue cards to render after applying `max_issues`, and how many were cut.
pub(crate) fn visible_issues<'a>(
    view: &'a ReportView,
    config: &ReportConfig,
) -> (&'a [IssueCard], usize) {
    let limit = config
        .max_issues
        .map_or(view.issues.len(), |max| max.min(view.issues.len()));
    (&view.issues[..limit], view.issues.len() - limit)
}
