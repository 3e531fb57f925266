//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief colored summary for the terminal
    Summary,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
    /// Self-contained HTML page
    Html,
    /// The render tree as JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Tui => "tui",
            Self::Summary => "summary",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum issue cards to render; counts are unaffected
    pub max_issues: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Title, or the default heading.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Heading used when no title is configured.
pub const DEFAULT_TITLE: &str = "Security Analysis Report";

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path the report was read from (`-` for stdin)
    pub source_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp; reporters stamp the current time when unset
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// The configured timestamp or now, RFC 3339.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(ReportFormat::from_str(&name, true).ok(), Some(*format));
        }
    }

    #[test]
    fn test_timestamp_prefers_configured_value() {
        let metadata = ReportMetadata {
            generated_at: Some("2024-01-01T00:00:00Z".to_string()),
            ..ReportMetadata::new()
        };
        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
    }
}
