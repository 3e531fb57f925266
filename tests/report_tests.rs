//! Renderer integration tests over fixture reports.

use secreport::reports::{
    create_reporter, create_reporter_with_options, HtmlReporter, JsonReporter, MarkdownReporter,
    ReportConfig, ReportFormat, ReportGenerator, SummaryReporter,
};
use secreport::{ReportSession, ReportView, SeverityFilter};
use serde_json::Value;
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn view_of(name: &str, filter: SeverityFilter) -> ReportView {
    let text = std::fs::read_to_string(Path::new(FIXTURES_DIR).join(name)).unwrap();
    let raw: Value = serde_json::from_str(&text).unwrap();
    let mut session = ReportSession::with_filter(filter);
    session.load(&raw);
    session.view().unwrap()
}

#[test]
fn reporters_declare_their_format() {
    assert_eq!(create_reporter(ReportFormat::Summary).format(), ReportFormat::Summary);
    assert_eq!(create_reporter(ReportFormat::Markdown).format(), ReportFormat::Markdown);
    assert_eq!(create_reporter(ReportFormat::Html).format(), ReportFormat::Html);
    assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
}

#[test]
fn summary_lists_panels_without_color() {
    let view = view_of("full_report.json", SeverityFilter::All);
    let out = SummaryReporter::new()
        .no_color()
        .generate(&view, &ReportConfig::default())
        .unwrap();

    assert!(!out.contains('\x1b'));
    assert!(out.contains("edge-router-01.cfg"));
    assert!(out.contains("58.5/100"));
    assert!(out.contains("(Fair)"));
    assert!(out.contains("Critical: 1"));
    assert!(out.contains("Interfaces: 24"));
    assert!(out.contains("Telnet enabled on VTY lines"));
}

#[test]
fn summary_color_is_optional() {
    let view = view_of("full_report.json", SeverityFilter::All);
    let colored = create_reporter_with_options(ReportFormat::Summary, true)
        .generate(&view, &ReportConfig::default())
        .unwrap();
    assert!(colored.contains('\x1b'));
}

#[test]
fn markdown_shows_filtered_issues_only() {
    let view = view_of("full_report.json", SeverityFilter::High);
    let out = MarkdownReporter::new()
        .without_footer()
        .generate(&view, &ReportConfig::default())
        .unwrap();

    assert!(out.starts_with("# Security Analysis Report"));
    assert!(out.contains("**HIGH (2)**"));
    assert!(out.contains("HTTP server enabled"));
    assert!(out.contains("Weak Password Policy"));
    assert!(!out.contains("No login banner"));
    assert!(out.contains("- 🔗 Reference: CVE-2023-20198"));
    assert!(!out.contains("Generated by secreport"));
}

#[test]
fn markdown_max_issues_notes_the_rest() {
    let view = view_of("full_report.json", SeverityFilter::All);
    let config = ReportConfig {
        max_issues: Some(2),
        title: Some("Edge audit".to_string()),
        ..Default::default()
    };
    let out = MarkdownReporter::new().generate(&view, &config).unwrap();
    assert!(out.starts_with("# Edge audit"));
    assert!(out.contains("_... and 4 more issues_"));
}

#[test]
fn empty_filter_message_in_every_document() {
    let view = view_of("empty_issues.json", SeverityFilter::Critical);
    let config = ReportConfig::default();

    let md = MarkdownReporter::new().generate(&view, &config).unwrap();
    assert!(md.contains("_No issues found for this filter._"));

    let html = HtmlReporter::new().generate(&view, &config).unwrap();
    assert!(html.contains("<p class=\"empty\">No issues found for this filter.</p>"));
}

#[test]
fn html_escapes_payload_text() {
    let view = view_of("full_report.json", SeverityFilter::Medium);
    let html = HtmlReporter::new()
        .generate(&view, &ReportConfig::default())
        .unwrap();
    assert!(html.contains("SNMP community string is &#x27;public&#x27;"));
    assert!(html.contains("data-key=\"SNMP-community-string-is-"));
}

#[test]
fn json_carries_render_tree_and_metadata() {
    let view = view_of("full_report.json", SeverityFilter::All);
    let config = ReportConfig {
        max_issues: Some(1),
        ..Default::default()
    };
    let out = JsonReporter::new().generate(&view, &config).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["metadata"]["tool"]["name"], "secreport");
    assert_eq!(json["summary"]["rating"], "Fair");
    assert_eq!(json["active_filter"], "ALL");
    assert_eq!(json["issues"].as_array().unwrap().len(), 1);
    assert_eq!(json["issues"][0]["key"], "SEC-001");
    assert_eq!(json["omitted_issues"], 5);
    assert_eq!(json["filters"][0]["label"], "ALL (6)");
}
