//! JSON report generator.

use super::{visible_issues, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ConfigSummary;
use crate::viewmodel::{
    FilterTab, IssueCard, PasswordPanel, Recommendation, ReportView, SeverityFilter, SeverityTiles,
    SummaryPanel,
};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata<'a>,
    #[serde(flatten)]
    view: JsonView<'a>,
}

#[derive(Serialize)]
struct JsonMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_path: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

/// The render tree with the issue list cut to `max_issues`.
#[derive(Serialize)]
struct JsonView<'a> {
    summary: &'a SummaryPanel,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a PasswordPanel>,
    tiles: &'a SeverityTiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a ConfigSummary>,
    recommendations: &'a [Recommendation],
    filters: &'a [FilterTab],
    active_filter: SeverityFilter,
    issues: &'a [IssueCard],
    #[serde(skip_serializing_if = "is_zero")]
    omitted_issues: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_message: Option<&'static str>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, view: &ReportView, config: &ReportConfig) -> Result<String, ReportError> {
        let (issues, omitted_issues) = visible_issues(view, config);
        let report = JsonReport {
            metadata: JsonMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: config.metadata.timestamp(),
                title: config.title_or_default(),
                source_path: config.metadata.source_path.as_deref(),
            },
            view: JsonView {
                summary: &view.summary,
                password: view.password.as_ref(),
                tiles: &view.tiles,
                config: view.config.as_ref(),
                recommendations: &view.recommendations,
                filters: &view.filters,
                active_filter: view.active_filter,
                issues,
                omitted_issues,
                empty_message: view.empty_message,
            },
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::ReportSession;
    use serde_json::{json, Value};

    fn render(payload: Value, config: &ReportConfig) -> Value {
        let mut session = ReportSession::new();
        session.load(&payload);
        let view = session.view().expect("object payload");
        let out = JsonReporter::new()
            .pretty(false)
            .generate(&view, config)
            .expect("render");
        serde_json::from_str(&out).expect("valid json")
    }

    #[test]
    fn test_render_tree_shape() {
        let out = render(
            json!({"filename": "fw.cfg", "analysis": {
                "securityScore": 91,
                "issues": [{"severity": "LOW", "id": "L1"}, null]
            }}),
            &ReportConfig::default(),
        );
        assert_eq!(out["metadata"]["tool"]["name"], "secreport");
        assert_eq!(out["summary"]["filename"], "fw.cfg");
        assert_eq!(out["summary"]["rating"], "Excellent");
        assert_eq!(out["summary"]["text_color"], "green");
        assert_eq!(out["active_filter"], "ALL");
        assert_eq!(out["filters"][0]["label"], "ALL (2)");
        assert_eq!(out["filters"][4]["label"], "LOW (1)");
        assert_eq!(out["issues"][0]["key"], "L1");
        assert_eq!(out["issues"][1]["key"], "issue-1");
        assert_eq!(out["issues"][1]["severity_label"], "UNKNOWN");
        assert!(out.get("password").is_none());
        assert!(out.get("empty_message").is_none());
    }

    #[test]
    fn test_max_issues_reports_omitted() {
        let config = ReportConfig {
            max_issues: Some(1),
            ..Default::default()
        };
        let out = render(
            json!({"analysis": {"issues": [{"title": "a"}, {"title": "b"}]}}),
            &config,
        );
        assert_eq!(out["issues"].as_array().map(Vec::len), Some(1));
        assert_eq!(out["omitted_issues"], 1);
        assert_eq!(out["filters"][0]["count"], 2);
    }
}
