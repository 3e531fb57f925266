//! Normalization of raw analysis payloads.
//!
//! [`normalize`] turns an arbitrary JSON value into a [`NormalizedReport`]
//! with every field defaulted. It never fails: a payload that is not an
//! object yields `None` (render nothing), and any nested field of the wrong
//! shape falls back to its default.
//!
//! Individual issue entries are kept in order. Entries that are not objects
//! become `None` rather than being dropped, so the issue list length always
//! matches the payload.

mod fields;

use crate::model::{
    AnalysisBody, ConfigSummary, IssueList, IssueRecord, NormalizedReport, PasswordAnalysis,
    SecurityScore,
};
use serde_json::{Map, Value};

/// Normalize a raw analysis payload.
///
/// Returns `None` when `raw` is not a JSON object.
#[must_use]
pub fn normalize(raw: &Value) -> Option<NormalizedReport> {
    let Some(root) = raw.as_object() else {
        tracing::debug!("analysis payload is not an object; nothing to render");
        return None;
    };

    let body = match root.get("analysis") {
        Some(Value::Object(data)) => normalize_body(data),
        None | Some(Value::Null) => AnalysisBody::default(),
        Some(_) => {
            tracing::debug!("'analysis' is not an object; using defaults");
            AnalysisBody::default()
        }
    };

    Some(NormalizedReport {
        filename: fields::string(root.get("filename")),
        analysis_time: fields::string(root.get("analysisTime")),
        body,
    })
}

/// Parse and normalize payload text. Text that is not valid JSON is treated
/// like any other non-object payload.
#[must_use]
pub fn normalize_str(text: &str) -> Option<NormalizedReport> {
    match serde_json::from_str::<Value>(text) {
        Ok(raw) => normalize(&raw),
        Err(err) => {
            tracing::debug!("analysis payload is not valid JSON: {err}");
            None
        }
    }
}

fn normalize_body(data: &Map<String, Value>) -> AnalysisBody {
    let issues = normalize_issues(data.get("issues"));

    // An explicit null total falls back to the list length; a missing one is 0.
    let total_issues = match data.get("totalIssues") {
        Some(Value::Null) => issues.len() as u64,
        other => fields::count(other),
    };

    let security_score = match data.get("securityScore") {
        Some(Value::Number(n)) => n.as_f64().map_or_else(SecurityScore::default, SecurityScore::new),
        None => SecurityScore::default(),
        Some(_) => {
            tracing::debug!("'securityScore' is not a number; using 0");
            SecurityScore::default()
        }
    };

    AnalysisBody {
        total_issues,
        critical: fields::count(data.get("critical")),
        high: fields::count(data.get("high")),
        medium: fields::count(data.get("medium")),
        low: fields::count(data.get("low")),
        security_score,
        issues,
        recommendations: normalize_recommendations(data.get("recommendations")),
        config_summary: sub_report(data.get("configSummary"), normalize_config_summary),
        password_analysis: sub_report(data.get("passwordAnalysis"), normalize_password_analysis),
    }
}

fn normalize_issues(value: Option<&Value>) -> IssueList {
    match value {
        Some(Value::Array(items)) => IssueList::new(items.iter().map(normalize_issue).collect()),
        None | Some(Value::Null) => IssueList::empty(),
        Some(_) => {
            tracing::debug!("'issues' is not an array; using an empty list");
            IssueList::empty()
        }
    }
}

fn normalize_issue(value: &Value) -> Option<IssueRecord> {
    let issue = value.as_object()?;
    Some(IssueRecord {
        id: fields::truthy_text(issue.get("id")),
        cve: fields::truthy_text(issue.get("cve")),
        title: fields::text(issue.get("title")),
        description: fields::text(issue.get("description")),
        severity: fields::text(issue.get("severity")),
        category: fields::text(issue.get("category")),
        location: fields::text(issue.get("location")),
        recommendation: fields::text(issue.get("recommendation")),
    })
}

/// An optional sub-report. It is present whenever the field is truthy; a
/// truthy value that is not an object reads as an object with no fields.
fn sub_report<T>(
    value: Option<&Value>,
    build: impl FnOnce(&Map<String, Value>) -> T,
) -> Option<T> {
    match value? {
        Value::Object(map) => Some(build(map)),
        other if fields::is_truthy(other) => {
            tracing::debug!("sub-report is not an object; using defaults");
            Some(build(&Map::new()))
        }
        _ => None,
    }
}

fn normalize_recommendations(value: Option<&Value>) -> Vec<String> {
    fields::array(value)
        .map(|items| items.iter().filter_map(|item| fields::text(Some(item))).collect())
        .unwrap_or_default()
}

fn normalize_config_summary(summary: &Map<String, Value>) -> ConfigSummary {
    ConfigSummary {
        total_interfaces: fields::count(summary.get("totalInterfaces")),
        total_vty_lines: fields::count(summary.get("totalVTYLines")),
        total_acls: fields::count(summary.get("totalACLs")),
    }
}

fn normalize_password_analysis(analysis: &Map<String, Value>) -> PasswordAnalysis {
    let issues = fields::array(analysis.get("issues"))
        .map(|items| {
            items
                .iter()
                .map(|item| fields::text(item.get("title")))
                .collect()
        })
        .unwrap_or_default();

    PasswordAnalysis {
        strength: fields::text(analysis.get("strength")),
        score: fields::number(analysis.get("score")),
        issues,
    }
}
