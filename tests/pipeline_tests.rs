//! Pipeline, configuration and CLI integration tests.
//!
//! These tests exercise the read → derive → render path, error handling,
//! and the `view` command handler with real fixture files.

use secreport::cli::{run_view, threshold_reached};
use secreport::config::{load_config_file, load_or_default, AppConfig, Validatable, ViewConfig};
use secreport::error::{ParseErrorKind, SecReportError};
use secreport::model::Severity;
use secreport::pipeline::{
    auto_detect_format, exit_codes, read_report, read_report_str, write_output, OutputTarget,
};
use secreport::reports::ReportFormat;
use secreport::viewmodel::SeverityFilter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn view_config(report: PathBuf, format: ReportFormat, out: PathBuf) -> ViewConfig {
    let mut config = ViewConfig::from_app_config(report, &AppConfig::default());
    config.output.format = format;
    config.output.file = Some(out);
    config.output.no_color = true;
    config.quiet = true;
    config
}

// ============================================================================
// Read stage
// ============================================================================

mod read_stage {
    use super::*;

    #[test]
    fn reads_fixture() {
        let loaded = read_report(&fixture_path("full_report.json")).unwrap();
        assert!(loaded.is_renderable());
        assert!(loaded.source_label().ends_with("full_report.json"));
        assert_eq!(loaded.raw["filename"], "edge-router-01.cfg");
    }

    #[test]
    fn non_object_is_not_an_error() {
        let loaded = read_report(&fixture_path("not_object.json")).unwrap();
        assert!(!loaded.is_renderable());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = read_report(&fixture_path("invalid.json")).unwrap_err();
        assert!(matches!(err, SecReportError::Parse { .. }));
        assert!(err.to_string().contains("invalid.json"));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = read_report_str("  \n", Path::new("empty.json")).unwrap_err();
        assert!(matches!(
            err,
            SecReportError::Parse {
                source: ParseErrorKind::EmptyInput,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_report(&fixture_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, SecReportError::Io { .. }));
    }
}

// ============================================================================
// Output stage
// ============================================================================

mod output_stage {
    use super::*;

    #[test]
    fn explicit_format_is_kept() {
        let target = OutputTarget::File(PathBuf::from("out.html"));
        assert_eq!(auto_detect_format(ReportFormat::Html, &target), ReportFormat::Html);
    }

    #[test]
    fn auto_to_file_is_summary() {
        let target = OutputTarget::File(PathBuf::from("out.txt"));
        assert_eq!(auto_detect_format(ReportFormat::Auto, &target), ReportFormat::Summary);
    }

    #[test]
    fn writes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}

// ============================================================================
// View command
// ============================================================================

mod view_command {
    use super::*;

    #[test]
    fn renders_every_document_format() {
        let tmp = TempDir::new().unwrap();
        for (format, name) in [
            (ReportFormat::Summary, "out.txt"),
            (ReportFormat::Markdown, "out.md"),
            (ReportFormat::Html, "out.html"),
            (ReportFormat::Json, "out.json"),
        ] {
            let out = tmp.path().join(name);
            let config = view_config(fixture_path("full_report.json"), format, out.clone());
            assert_eq!(run_view(config).unwrap(), exit_codes::SUCCESS);
            let rendered = std::fs::read_to_string(&out).unwrap();
            assert!(rendered.contains("edge-router-01.cfg"), "{format} output");
        }
    }

    #[test]
    fn default_filter_applies_to_output() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("low.md");
        let mut config =
            view_config(fixture_path("full_report.json"), ReportFormat::Markdown, out.clone());
        config.view.default_filter = SeverityFilter::Low;
        run_view(config).unwrap();

        let rendered = std::fs::read_to_string(out).unwrap();
        assert!(rendered.contains("No login banner"));
        assert!(!rendered.contains("Telnet enabled on VTY lines"));
    }

    #[test]
    fn fail_on_uses_derived_counts() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.json");

        let mut config =
            view_config(fixture_path("full_report.json"), ReportFormat::Json, out.clone());
        config.fail_on = Some(Severity::Critical);
        assert_eq!(run_view(config).unwrap(), exit_codes::SEVERITY_THRESHOLD);

        // lowercase "critical" is an unknown severity, not a critical one
        let mut config = view_config(fixture_path("partial_report.json"), ReportFormat::Json, out);
        config.fail_on = Some(Severity::Low);
        assert_eq!(run_view(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn non_object_payload_exits_cleanly() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.md");
        let config = view_config(fixture_path("not_object.json"), ReportFormat::Markdown, out.clone());
        assert_eq!(run_view(config).unwrap(), exit_codes::SUCCESS);
        assert!(!out.exists());
    }

    #[test]
    fn threshold_helper() {
        let loaded = read_report(&fixture_path("full_report.json")).unwrap();
        let counts = secreport::count_severities(&loaded.report.unwrap().body.issues);
        assert!(threshold_reached(&counts, Severity::Low));
        assert!(threshold_reached(&counts, Severity::Critical));
    }
}

// ============================================================================
// Configuration files
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn loads_yaml_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".secreport.yaml");
        std::fs::write(
            &path,
            "output:\n  format: markdown\nview:\n  default_filter: HIGH\n  max_issues: 10\ntui:\n  theme: light\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert_eq!(config.view.default_filter, SeverityFilter::High);
        assert_eq!(config.view.max_issues, Some(10));
        assert_eq!(config.tui.theme, "light");
        assert!(config.is_valid());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secreport.yaml");
        std::fs::write(&path, "view: [unclosed").unwrap();

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn invalid_values_are_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secreport.yml");
        std::fs::write(&path, "view:\n  max_issues: 0\ntui:\n  theme: neon\n").unwrap();

        let config = load_config_file(&path).unwrap();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"view.max_issues".to_string()));
        assert!(fields.contains(&"tui.theme".to_string()));
    }

    #[test]
    fn cli_values_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".secreport.yaml");
        std::fs::write(&path, "output:\n  format: html\ntui:\n  theme: light\n").unwrap();

        let mut overrides = AppConfig::default();
        overrides.output.format = ReportFormat::Json;
        let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.tui.theme, "light");
    }
}
