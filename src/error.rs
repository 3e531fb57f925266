//! Error types for secreport.
//!
//! The normalizer and view-model engine never fail. Errors only arise at the
//! edges: reading the input, writing output, and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for secreport operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SecReportError {
    /// The input could not be read as data at all
    #[error("Failed to parse analysis report: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Input is empty")]
    EmptyInput,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

/// Convenient Result type for secreport operations
pub type Result<T> = std::result::Result<T, SecReportError>;

impl SecReportError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SecReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SecReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON deserialization", ParseErrorKind::InvalidJson(err.to_string()))
    }
}

impl From<crate::reports::ReportError> for SecReportError {
    fn from(err: crate::reports::ReportError) -> Self {
        match err {
            crate::reports::ReportError::IoError(io) => io.into(),
            other => Self::report("rendering", ReportErrorKind::Render(other.to_string())),
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first: `"outer: middle: inner"`.
///
/// ```ignore
/// use secreport::error::ErrorContext;
///
/// let text = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SecReportError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SecReportError, new_ctx: &str) -> SecReportError {
    match err {
        SecReportError::Parse { context, source } => SecReportError::Parse {
            context: chain_context(new_ctx, &context),
            source,
        },
        SecReportError::Report { context, source } => SecReportError::Report {
            context: chain_context(new_ctx, &context),
            source,
        },
        SecReportError::Io {
            path,
            message,
            source,
        } => SecReportError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SecReportError::Config(msg) => SecReportError::Config(chain_context(new_ctx, &msg)),
        SecReportError::Validation(msg) => {
            SecReportError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// `"new: existing"`, or just `new` when there is no existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SecReportError::io("/reports/router.json", io_err);
        assert!(err.to_string().contains("/reports/router.json"));
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SecReportError = json_err.into();
        assert!(matches!(
            err,
            SecReportError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(SecReportError::parse("base", ParseErrorKind::EmptyInput))
        }
        fn middle() -> Result<()> {
            inner().context("middle layer")
        }
        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(SecReportError::Parse { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let ok: Result<i32> = Ok(1);
        let _ = ok.with_context(|| {
            called = true;
            "unused"
        });
        assert!(!called);

        let err: Result<i32> = Err(SecReportError::validation("bad"));
        match err.with_context(|| "checking") {
            Err(SecReportError::Validation(msg)) => assert_eq!(msg, "checking: bad"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_report_error_conversion() {
        let err: SecReportError = crate::reports::ReportError::FormatError(std::fmt::Error).into();
        assert!(matches!(err, SecReportError::Report { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SecReportError = crate::reports::ReportError::IoError(io).into();
        assert!(matches!(err, SecReportError::Io { path: None, .. }));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
