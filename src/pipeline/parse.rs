//! Reading analysis reports from disk or stdin.

use crate::error::{ErrorContext, ParseErrorKind, Result, SecReportError};
use crate::model::NormalizedReport;
use crate::normalize::normalize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// A report read from a source.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    /// Where the report came from
    pub source: PathBuf,
    /// The parsed payload as received
    pub raw: serde_json::Value,
    /// Normalized report; `None` when the payload is not an object
    pub report: Option<NormalizedReport>,
}

impl LoadedReport {
    /// Whether there is anything to render.
    #[must_use]
    pub const fn is_renderable(&self) -> bool {
        self.report.is_some()
    }

    /// Source path as shown in report metadata.
    #[must_use]
    pub fn source_label(&self) -> String {
        self.source.to_string_lossy().into_owned()
    }
}

/// Read and normalize a report file, or stdin when `path` is `-`.
///
/// Text that is not JSON at all is an error. Well-formed JSON that is not an
/// object is not: it yields a report with nothing to render.
pub fn read_report(path: &Path) -> Result<LoadedReport> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading report from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| SecReportError::io(path, e))?
    };

    read_report_str(&text, path).with_context(|| format!("parsing {}", path.display()))
}

/// Parse and normalize report text read from `source`.
pub fn read_report_str(text: &str, source: &Path) -> Result<LoadedReport> {
    if text.trim().is_empty() {
        return Err(SecReportError::parse("no data", ParseErrorKind::EmptyInput));
    }
    let raw: serde_json::Value = serde_json::from_str(text)?;
    let report = normalize(&raw);
    match &report {
        Some(report) => tracing::debug!(
            issues = report.body.issues.len(),
            "normalized report from {}",
            source.display()
        ),
        None => tracing::warn!(
            "{} does not contain a report object; nothing to render",
            source.display()
        ),
    }
    Ok(LoadedReport {
        source: source.to_path_buf(),
        raw,
        report,
    })
}
