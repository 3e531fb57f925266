//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{visible_issues, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ColorClass, Severity};
use crate::viewmodel::ReportView;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "blue" => format!("\x1b[34m{text}\x1b[0m"),
            "orange" => format!("\x1b[38;5;208m{text}\x1b[0m"),
            "gray" => format!("\x1b[90m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            "reverse" => format!("\x1b[7m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const BAR_WIDTH: usize = 30;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn paint(&self, text: &str, color: ColorClass) -> String {
        self.color(text, color.as_str())
    }

    fn score_bar(&self, score: f64, color: ColorClass) -> String {
        let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!(
            "{}{}",
            self.paint(&"█".repeat(filled), color),
            self.color(&"░".repeat(BAR_WIDTH - filled), "dim")
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, view: &ReportView, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &view.summary;

        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!("{}  {}", self.color("File:", "cyan"), summary.filename));
        lines.push(format!(
            "{}  {}",
            self.color("Analyzed:", "cyan"),
            summary.analysis_time
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Total issues:", "cyan"),
            summary.total_issues
        ));
        lines.push(format!(
            "{}  {} {}",
            self.color("Score:", "cyan"),
            self.paint(&summary.score_text(), summary.text_color),
            self.paint(&format!("({})", summary.rating), summary.text_color)
        ));
        lines.push(format!(
            "  {} {}",
            self.score_bar(summary.score, summary.bar_color),
            summary.percent_text()
        ));

        lines.push(String::new());
        let tiles: Vec<String> = view
            .tiles
            .entries()
            .iter()
            .map(|(severity, count)| {
                self.paint(&format!("{}: {count}", severity.title()), severity.color())
            })
            .collect();
        lines.push(format!("{}  {}", self.color("Severity:", "bold"), tiles.join("  ")));

        if let Some(password) = &view.password {
            lines.push(String::new());
            lines.push(self.color("Password strength:", "bold"));
            lines.push(format!(
                "  {} | Score: {}",
                self.paint(&password.strength_text, password.strength.color()),
                password.score_text()
            ));
            for title in &password.issues {
                lines.push(format!("  ⚠ {title}"));
            }
        }

        if let Some(config_summary) = &view.config {
            lines.push(String::new());
            lines.push(self.color("Configuration overview:", "bold"));
            lines.push(format!(
                "  Interfaces: {}  VTY lines: {}  Access lists: {}",
                config_summary.total_interfaces,
                config_summary.total_vty_lines,
                config_summary.total_acls
            ));
        }

        if !view.recommendations.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations:", "bold"));
            for rec in &view.recommendations {
                lines.push(format!("  • {}", rec.text));
            }
        }

        lines.push(String::new());
        let tabs: Vec<String> = view
            .filters
            .iter()
            .map(|tab| {
                if tab.active {
                    self.color(&format!("[{}]", tab.label), "reverse")
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        lines.push(format!("{}  {}", self.color("Issues:", "bold"), tabs.join(" ")));

        if let Some(message) = view.empty_message {
            lines.push(format!("  {}", self.color(message, "dim")));
        }

        let (shown, hidden) = visible_issues(view, config);
        for card in shown {
            let badge = self.paint(
                &format!("[{}]", card.severity_label),
                Severity::color_of(card.severity),
            );
            lines.push(format!(
                "  {badge} {} {}",
                card.title,
                self.color(&format!("({})", card.category), "dim")
            ));
            if let Some(location) = &card.location {
                lines.push(format!("      at {location}"));
            }
            if let Some(reference) = &card.reference {
                lines.push(format!("      ref {reference}"));
            }
        }
        if hidden > 0 {
            lines.push(format!(
                "  {}",
                self.color(&format!("... and {hidden} more"), "dim")
            ));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
