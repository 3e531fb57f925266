//! HTML report generator.

use super::escape::{escape_html, escape_html_attr};
use super::{visible_issues, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Severity;
use crate::viewmodel::{IssueCard, ReportView};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Emit bare markup without the inline stylesheet.
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    const fn get_styles() -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --muted-color: #a6adc8;
                --accent-color: #89b4fa;
                --border-color: #45475a;
                --card-bg: #313244;
                --green: #a6e3a1;
                --blue: #89b4fa;
                --yellow: #f9e2af;
                --orange: #fab387;
                --red: #f38ba8;
                --gray: #9399b2;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container { max-width: 1100px; margin: 0 auto; }
            h1, h2, h3 { color: var(--accent-color); }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title { font-size: 0.9em; color: var(--muted-color); }
            .card-value { font-size: 2em; font-weight: bold; }

            .green { color: var(--green); }
            .blue { color: var(--blue); }
            .yellow { color: var(--yellow); }
            .orange { color: var(--orange); }
            .red { color: var(--red); }
            .gray { color: var(--gray); }

            .progress {
                background-color: var(--border-color);
                border-radius: 4px;
                height: 10px;
                overflow: hidden;
            }
            .progress > div { height: 100%; }
            .bar-green { background-color: var(--green); }
            .bar-yellow { background-color: var(--yellow); }
            .bar-orange { background-color: var(--orange); }
            .bar-red { background-color: var(--red); }
            .bar-blue { background-color: var(--blue); }
            .bar-gray { background-color: var(--gray); }

            .tabs { display: flex; gap: 8px; margin-bottom: 20px; }
            .tab {
                padding: 4px 12px;
                border-radius: 6px;
                background-color: var(--border-color);
                font-size: 0.85em;
            }
            .tab.active { background-color: var(--accent-color); color: var(--bg-color); }

            .issue {
                border-left: 4px solid var(--gray);
                background-color: var(--card-bg);
                border-radius: 6px;
                padding: 12px 16px;
                margin-bottom: 12px;
            }
            .issue.sev-critical { border-left-color: var(--red); }
            .issue.sev-high { border-left-color: var(--orange); }
            .issue.sev-medium { border-left-color: var(--yellow); }
            .issue.sev-low { border-left-color: var(--green); }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.8em;
                font-weight: 600;
                background-color: var(--border-color);
            }

            .empty { text-align: center; color: var(--muted-color); padding: 30px; }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: var(--muted-color);
            }
        </style>
        "#
    }

    fn write_card(html: &mut String, card: &IssueCard) -> Result<(), ReportError> {
        let style = card
            .severity
            .map_or("sev-unknown", |severity| match severity {
                Severity::Critical => "sev-critical",
                Severity::High => "sev-high",
                Severity::Medium => "sev-medium",
                Severity::Low => "sev-low",
            });
        writeln!(
            html,
            "    <div class=\"issue {style}\" data-key=\"{}\">",
            escape_html_attr(&card.key)
        )?;
        writeln!(
            html,
            "        <span class=\"badge {}\">{}</span> <span class=\"badge\">{}</span>",
            Severity::color_of(card.severity).as_str(),
            escape_html(&card.severity_label),
            escape_html(&card.category)
        )?;
        writeln!(html, "        <h3>{}</h3>", escape_html(&card.title))?;
        writeln!(html, "        <p>{}</p>", escape_html(&card.description))?;
        if let Some(location) = &card.location {
            writeln!(html, "        <p>📍 Location: {}</p>", escape_html(location))?;
        }
        if let Some(recommendation) = &card.recommendation {
            writeln!(
                html,
                "        <p><strong>💡 Recommendation:</strong> {}</p>",
                escape_html(recommendation)
            )?;
        }
        if let Some(reference) = &card.reference {
            writeln!(html, "        <p>🔗 Reference: {}</p>", escape_html(reference))?;
        }
        writeln!(html, "    </div>")?;
        Ok(())
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, view: &ReportView, config: &ReportConfig) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = config.title_or_default();
        let summary = &view.summary;

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(title))?;
        if self.include_styles {
            writeln!(html, "{}", Self::get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Summary
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(title))?;
        writeln!(html, "</div>")?;
        writeln!(html, "<h2>Analysis Summary</h2>")?;
        writeln!(html, "<div class=\"cards\">")?;
        for (label, value) in [
            ("Filename", summary.filename.clone()),
            ("Analysis Time", summary.analysis_time.clone()),
            ("Total Issues", summary.total_issues.to_string()),
        ] {
            writeln!(
                html,
                "    <div class=\"card\"><div class=\"card-title\">{label}</div><div>{}</div></div>",
                escape_html(&value)
            )?;
        }
        writeln!(
            html,
            "    <div class=\"card\"><div class=\"card-title\">Security Score</div><div class=\"card-value {color}\">{}</div><div class=\"{color}\">{}</div></div>",
            summary.score_text(),
            summary.rating,
            color = summary.text_color.as_str()
        )?;
        writeln!(html, "</div>")?;

        if let Some(password) = &view.password {
            writeln!(html, "<div class=\"card\">")?;
            writeln!(html, "    <h3>🔐 Password Strength Analysis</h3>")?;
            writeln!(
                html,
                "    <p>Strength: <strong class=\"{}\">{}</strong> | Score: <strong>{}</strong></p>",
                password.strength.color().as_str(),
                escape_html(&password.strength_text),
                password.score_text()
            )?;
            for issue in &password.issues {
                writeln!(html, "    <p>⚠️ {}</p>", escape_html(issue))?;
            }
            writeln!(html, "</div>")?;
        }

        // Score bar
        writeln!(html, "<h2>Security Score</h2>")?;
        writeln!(
            html,
            "<p><span class=\"{color}\">{}</span> <span class=\"{color}\">{}</span></p>",
            summary.rating,
            summary.percent_text(),
            color = summary.text_color.as_str()
        )?;
        writeln!(
            html,
            "<div class=\"progress\" role=\"progressbar\" aria-valuenow=\"{score}\" aria-valuemin=\"0\" aria-valuemax=\"100\"><div class=\"bar-{}\" style=\"width: {score}%\"></div></div>",
            summary.bar_color.as_str(),
            score = summary.score
        )?;

        // Tiles
        writeln!(html, "<div class=\"cards\">")?;
        for (severity, count) in view.tiles.entries() {
            writeln!(
                html,
                "    <div class=\"card\"><div class=\"card-title {color}\">{}</div><div class=\"card-value {color}\">{count}</div></div>",
                severity.title(),
                color = severity.color().as_str()
            )?;
        }
        writeln!(html, "</div>")?;

        if let Some(overview) = &view.config {
            writeln!(html, "<h2>Configuration Overview</h2>")?;
            writeln!(html, "<div class=\"cards\">")?;
            for (label, value) in [
                ("Total Interfaces", overview.total_interfaces),
                ("VTY Lines", overview.total_vty_lines),
                ("Access Lists", overview.total_acls),
            ] {
                writeln!(
                    html,
                    "    <div class=\"card\"><div class=\"card-title\">{label}</div><div class=\"card-value\">{value}</div></div>"
                )?;
            }
            writeln!(html, "</div>")?;
        }

        if !view.recommendations.is_empty() {
            writeln!(html, "<h2>💡 Recommendations</h2>")?;
            writeln!(html, "<ul>")?;
            for rec in &view.recommendations {
                writeln!(
                    html,
                    "    <li data-key=\"{}\">{}</li>",
                    escape_html_attr(&rec.key),
                    escape_html(&rec.text)
                )?;
            }
            writeln!(html, "</ul>")?;
        }

        // Issues
        writeln!(html, "<h2>Detected Issues</h2>")?;
        writeln!(html, "<div class=\"tabs\">")?;
        for tab in &view.filters {
            writeln!(
                html,
                "    <span class=\"tab{}\" aria-pressed=\"{}\">{}</span>",
                if tab.active { " active" } else { "" },
                tab.active,
                escape_html(&tab.label)
            )?;
        }
        writeln!(html, "</div>")?;

        if let Some(message) = view.empty_message {
            writeln!(html, "<p class=\"empty\">{}</p>", escape_html(message))?;
        }
        let (shown, hidden) = visible_issues(view, config);
        for card in shown {
            Self::write_card(&mut html, card)?;
        }
        if hidden > 0 {
            writeln!(html, "<p class=\"empty\">... and {hidden} more issues</p>")?;
        }

        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "    Generated by secreport v{} on {}",
            env!("CARGO_PKG_VERSION"),
            escape_html(&config.metadata.timestamp())
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}
