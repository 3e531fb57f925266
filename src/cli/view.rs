//! View command handler.
//!
//! Implements the `view` subcommand for rendering a single analysis report.

use crate::config::ViewConfig;
use crate::model::Severity;
use crate::pipeline::{
    auto_detect_format, exit_codes, output_report, read_report, OutputTarget,
};
use crate::reports::ReportFormat;
use crate::tui::{run_report_tui, App};
use crate::viewmodel::{ReportSession, SeverityCounts};
use anyhow::Result;

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<i32> {
    let loaded = read_report(&config.report_path)?;

    let mut session = ReportSession::with_filter(config.view.default_filter);
    if !session.load_normalized(loaded.report) {
        tracing::warn!(
            "{} holds no analysis report; nothing to render",
            config.report_path.display()
        );
        return Ok(exit_codes::SUCCESS);
    }

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    if effective_output == ReportFormat::Tui {
        let mut app = App::new(session, &config.theme);
        run_report_tui(&mut app)?;
        session = app.into_session();
    } else if let Some(view) = session.view() {
        output_report(&config, &view, effective_output, &output_target)?;
    }

    let counts = session.severity_counts().unwrap_or_default();
    if let Some(threshold) = config.fail_on {
        if threshold_reached(&counts, threshold) {
            tracing::info!(
                "{} issue(s) at or above {threshold}",
                counts.at_or_above(threshold)
            );
            return Ok(exit_codes::SEVERITY_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Whether the issue list holds at least one issue at or above `threshold`.
#[must_use]
pub fn threshold_reached(counts: &SeverityCounts, threshold: Severity) -> bool {
    counts.at_or_above(threshold) > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::viewmodel::SeverityFilter;
    use tempfile::TempDir;

    fn write_report(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("report.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    fn config_for(report: std::path::PathBuf, out: std::path::PathBuf) -> ViewConfig {
        let mut config = ViewConfig::from_app_config(report, &AppConfig::default());
        config.output.format = ReportFormat::Markdown;
        config.output.file = Some(out);
        config.quiet = true;
        config
    }

    #[test]
    fn test_view_writes_report() {
        let tmp = TempDir::new().unwrap();
        let report = write_report(
            &tmp,
            r#"{"filename": "edge.cfg", "analysis": {"issues": [{"severity": "LOW"}]}}"#,
        );
        let out = tmp.path().join("out.md");
        let code = run_view(config_for(report, out.clone())).unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let rendered = std::fs::read_to_string(out).unwrap();
        assert!(rendered.contains("| Filename | edge.cfg |"));
    }

    #[test]
    fn test_fail_on_threshold() {
        let tmp = TempDir::new().unwrap();
        let report = write_report(
            &tmp,
            r#"{"analysis": {"issues": [{"severity": "MEDIUM"}, {"severity": "LOW"}]}}"#,
        );
        let out = tmp.path().join("out.md");

        let mut config = config_for(report.clone(), out.clone());
        config.fail_on = Some(Severity::Medium);
        config.view.default_filter = SeverityFilter::Low;
        assert_eq!(run_view(config).unwrap(), exit_codes::SEVERITY_THRESHOLD);

        let mut config = config_for(report, out);
        config.fail_on = Some(Severity::High);
        assert_eq!(run_view(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_non_object_payload_renders_nothing() {
        let tmp = TempDir::new().unwrap();
        let report = write_report(&tmp, "[]");
        let out = tmp.path().join("out.md");
        assert_eq!(
            run_view(config_for(report, out.clone())).unwrap(),
            exit_codes::SUCCESS
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let report = write_report(&tmp, "{broken");
        let out = tmp.path().join("out.md");
        assert!(run_view(config_for(report, out)).is_err());
    }
}
