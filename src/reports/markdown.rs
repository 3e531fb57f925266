//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table};
use super::{visible_issues, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::viewmodel::ReportView;
use std::fmt::Write;

/// Markdown reporter
pub struct MarkdownReporter {
    /// Include the metadata footer
    include_footer: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_footer: true,
        }
    }

    /// Omit the generator footer (stable output for snapshots and diffs).
    #[must_use]
    pub const fn without_footer(mut self) -> Self {
        self.include_footer = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, view: &ReportView, config: &ReportConfig) -> Result<String, ReportError> {
        let mut md = String::new();
        let summary = &view.summary;

        writeln!(md, "# {}", escape_markdown_inline(config.title_or_default()))?;
        writeln!(md)?;
        writeln!(md, "## Analysis Summary")?;
        writeln!(md)?;
        writeln!(md, "| Field | Value |")?;
        writeln!(md, "|-------|-------|")?;
        writeln!(md, "| Filename | {} |", escape_markdown_table(&summary.filename))?;
        writeln!(
            md,
            "| Analysis Time | {} |",
            escape_markdown_table(&summary.analysis_time)
        )?;
        writeln!(md, "| Total Issues | {} |", summary.total_issues)?;
        writeln!(
            md,
            "| Security Score | {} ({}) |",
            summary.score_text(),
            summary.rating
        )?;
        writeln!(md)?;

        if let Some(password) = &view.password {
            writeln!(md, "## Password Strength Analysis")?;
            writeln!(md)?;
            writeln!(
                md,
                "Strength: **{}** | Score: **{}**",
                escape_markdown_inline(&password.strength_text),
                password.score_text()
            )?;
            writeln!(md)?;
            for title in &password.issues {
                writeln!(md, "- ⚠️ {}", escape_markdown_list(title))?;
            }
            if !password.issues.is_empty() {
                writeln!(md)?;
            }
        }

        writeln!(md, "## Issue Counts")?;
        writeln!(md)?;
        writeln!(md, "| Critical | High | Medium | Low |")?;
        writeln!(md, "|----------|------|--------|-----|")?;
        writeln!(
            md,
            "| {} | {} | {} | {} |",
            view.tiles.critical, view.tiles.high, view.tiles.medium, view.tiles.low
        )?;
        writeln!(md)?;

        if let Some(overview) = &view.config {
            writeln!(md, "## Configuration Overview")?;
            writeln!(md)?;
            writeln!(md, "| Total Interfaces | VTY Lines | Access Lists |")?;
            writeln!(md, "|------------------|-----------|--------------|")?;
            writeln!(
                md,
                "| {} | {} | {} |",
                overview.total_interfaces, overview.total_vty_lines, overview.total_acls
            )?;
            writeln!(md)?;
        }

        if !view.recommendations.is_empty() {
            writeln!(md, "## Recommendations")?;
            writeln!(md)?;
            for rec in &view.recommendations {
                writeln!(md, "- {}", escape_markdown_list(&rec.text))?;
            }
            writeln!(md)?;
        }

        writeln!(md, "## Detected Issues")?;
        writeln!(md)?;
        let tabs: Vec<String> = view
            .filters
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("**{}**", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        writeln!(md, "Filter: {}", tabs.join(" · "))?;
        writeln!(md)?;

        if let Some(message) = view.empty_message {
            writeln!(md, "_{message}_")?;
            writeln!(md)?;
        }

        let (shown, hidden) = visible_issues(view, config);
        for card in shown {
            writeln!(
                md,
                "### [{}] {}",
                escape_markdown_inline(&card.severity_label),
                escape_markdown_inline(&card.title)
            )?;
            writeln!(md)?;
            writeln!(md, "*Category:* {}", escape_markdown_inline(&card.category))?;
            writeln!(md)?;
            writeln!(md, "{}", escape_markdown_inline(&card.description))?;
            writeln!(md)?;
            if let Some(location) = &card.location {
                writeln!(md, "- 📍 Location: {}", escape_markdown_list(location))?;
            }
            if let Some(recommendation) = &card.recommendation {
                writeln!(md, "- 💡 Recommendation: {}", escape_markdown_list(recommendation))?;
            }
            if let Some(reference) = &card.reference {
                writeln!(md, "- 🔗 Reference: {}", escape_markdown_list(reference))?;
            }
            if card.location.is_some() || card.recommendation.is_some() || card.reference.is_some()
            {
                writeln!(md)?;
            }
        }
        if hidden > 0 {
            writeln!(md, "_... and {hidden} more issues_")?;
            writeln!(md)?;
        }

        if self.include_footer {
            writeln!(md, "---")?;
            writeln!(
                md,
                "_Generated by secreport v{} on {}_",
                env!("CARGO_PKG_VERSION"),
                config.metadata.timestamp()
            )?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::ReportSession;
    use serde_json::json;

    fn render(payload: serde_json::Value) -> String {
        let mut session = ReportSession::new();
        session.load(&payload);
        let view = session.view().expect("object payload");
        MarkdownReporter::new()
            .without_footer()
            .generate(&view, &ReportConfig::default())
            .expect("render")
    }

    #[test]
    fn test_sections_follow_presence() {
        let out = render(json!({"analysis": {}}));
        assert!(out.contains("## Analysis Summary"));
        assert!(out.contains("## Issue Counts"));
        assert!(!out.contains("## Password Strength Analysis"));
        assert!(!out.contains("## Configuration Overview"));
        assert!(!out.contains("## Recommendations"));
        assert!(out.contains("_No issues found for this filter._"));
        assert!(!out.contains("Generated by"));
    }

    #[test]
    fn test_issue_text_is_escaped() {
        let out = render(json!({"analysis": {"issues": [{
            "severity": "HIGH",
            "title": "**SNMP** community | public",
            "location": "line 12"
        }]}}));
        assert!(out.contains("### [HIGH] \\*\\*SNMP\\*\\* community \\| public"));
        assert!(out.contains("- 📍 Location: line 12"));
    }

    #[test]
    fn test_active_filter_is_bold() {
        let out = render(json!({"analysis": {"issues": []}}));
        assert!(out.contains("**ALL (0)** · CRITICAL (0)"));
    }
}
