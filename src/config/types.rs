//! Configuration types for secreport.

use crate::model::Severity;
use crate::reports::ReportFormat;
use crate::viewmodel::SeverityFilter;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from a config file and layered with
/// CLI arguments (CLI wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// How reports are presented
    pub view: ViewPreferences,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Report presentation preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ViewPreferences {
    /// Severity filter selected when a report is opened
    pub default_filter: SeverityFilter,
    /// Maximum issue cards rendered in non-interactive output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_issues: Option<usize>,
    /// Report heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

/// Resolved settings for one `view` invocation.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Report to read; `-` reads stdin
    pub report_path: PathBuf,
    /// Output configuration
    pub output: OutputConfig,
    /// Presentation preferences
    pub view: ViewPreferences,
    /// TUI theme name
    pub theme: String,
    /// Exit with the threshold code when an issue at or above this severity exists
    pub fail_on: Option<Severity>,
    /// Suppress informational logging
    pub quiet: bool,
}

impl ViewConfig {
    /// Build a view configuration from an application config.
    #[must_use]
    pub fn from_app_config(report_path: PathBuf, config: &AppConfig) -> Self {
        Self {
            report_path,
            output: config.output.clone(),
            view: config.view.clone(),
            theme: config.tui.theme.clone(),
            fail_on: None,
            quiet: false,
        }
    }
}
