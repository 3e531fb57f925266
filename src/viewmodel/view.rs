//! Render tree consumed by every output surface.
//!
//! A [`ReportView`] is a plain, serializable snapshot of what a renderer must
//! draw. All defaults for missing text are applied here, so renderers never
//! inspect raw optional fields.

use super::{issue_key, SeverityCounts, SeverityFilter};
use crate::model::{
    ConfigSummary, IssueList, IssueRecord, NormalizedReport, PasswordAnalysis, PasswordStrength,
    ScoreBand, ColorClass, Severity,
};
use serde::Serialize;

/// Placeholder for missing summary metadata.
pub const MISSING_FIELD: &str = "—";
/// Display label for issues without a severity.
pub const UNKNOWN_SEVERITY: &str = "UNKNOWN";
pub const DEFAULT_CATEGORY: &str = "General";
pub const UNTITLED_ISSUE: &str = "Untitled issue";
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Shown in place of the issue list when the filtered subset is empty.
pub const EMPTY_FILTER_MESSAGE: &str = "No issues found for this filter.";

/// Everything one report renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub summary: SummaryPanel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordPanel>,
    pub tiles: SeverityTiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSummary>,
    pub recommendations: Vec<Recommendation>,
    pub filters: Vec<FilterTab>,
    pub active_filter: SeverityFilter,
    pub issues: Vec<IssueCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// File metadata and score summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub filename: String,
    pub analysis_time: String,
    pub total_issues: u64,
    /// Clamped to `[0, 100]`
    pub score: f64,
    pub rating: &'static str,
    pub band: ScoreBand,
    pub text_color: ColorClass,
    pub bar_color: ColorClass,
}

impl SummaryPanel {
    /// Score as shown in the summary, e.g. `72.5/100`.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{}/100", self.score)
    }

    /// Score as shown next to the progress bar, e.g. `72.5%`.
    #[must_use]
    pub fn percent_text(&self) -> String {
        format!("{}%", self.score)
    }
}

/// Password-strength panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordPanel {
    /// Strength text as supplied (empty when missing)
    pub strength_text: String,
    pub strength: PasswordStrength,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub issues: Vec<String>,
}

impl PasswordPanel {
    fn from_analysis(analysis: &PasswordAnalysis) -> Self {
        Self {
            strength_text: analysis.strength.clone().unwrap_or_default(),
            strength: PasswordStrength::classify(analysis.strength.as_deref()),
            score: analysis.score,
            issues: analysis
                .issues
                .iter()
                .map(|title| title.clone().unwrap_or_else(|| UNTITLED_ISSUE.to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn score_text(&self) -> String {
        self.score
            .map_or_else(|| format!("{MISSING_FIELD}/100"), |score| format!("{score}/100"))
    }
}

/// The producer's own per-severity aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityTiles {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl SeverityTiles {
    /// Tiles in display order, most severe first.
    #[must_use]
    pub fn entries(&self) -> [(Severity, u64); 4] {
        [
            (Severity::Critical, self.critical),
            (Severity::High, self.high),
            (Severity::Medium, self.medium),
            (Severity::Low, self.low),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub key: String,
    pub text: String,
}

/// One of the five filter selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub filter: SeverityFilter,
    /// `<SEVERITY> (<count>)`
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// One rendered issue of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCard {
    pub key: String,
    /// Raw severity text, or `UNKNOWN`
    pub severity_label: String,
    /// Recognized level for styling; `None` selects the unknown style
    pub severity: Option<Severity>,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl IssueCard {
    /// Build the card for the issue at `index` of the filtered list.
    #[must_use]
    pub fn new(issue: Option<&IssueRecord>, index: usize) -> Self {
        let non_empty = |value: Option<&String>| value.filter(|v| !v.is_empty()).cloned();
        Self {
            key: issue_key(issue, index),
            severity_label: issue
                .and_then(|i| i.severity.clone())
                .unwrap_or_else(|| UNKNOWN_SEVERITY.to_string()),
            severity: issue.and_then(IssueRecord::severity_level),
            category: issue
                .and_then(|i| i.category.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            title: issue
                .and_then(|i| i.title.clone())
                .unwrap_or_else(|| UNTITLED_ISSUE.to_string()),
            description: issue
                .and_then(|i| i.description.clone())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            location: non_empty(issue.and_then(|i| i.location.as_ref())),
            recommendation: non_empty(issue.and_then(|i| i.recommendation.as_ref())),
            reference: issue.and_then(IssueRecord::reference).map(str::to_string),
        }
    }
}

/// Assemble the render tree from already-derived inputs.
pub(super) fn build_view(
    report: &NormalizedReport,
    counts: &SeverityCounts,
    filtered: &IssueList,
    active: SeverityFilter,
) -> ReportView {
    let body = &report.body;
    let score = body.security_score;
    let band = score.band();

    let summary = SummaryPanel {
        filename: report
            .filename
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        analysis_time: report
            .analysis_time
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        total_issues: body.total_issues,
        score: score.value(),
        rating: band.label(),
        band,
        text_color: band.text_color(),
        bar_color: band.bar_color(),
    };

    let filters = SeverityFilter::ALL
        .iter()
        .map(|&filter| {
            let count = counts.get(filter);
            FilterTab {
                filter,
                label: format!("{filter} ({count})"),
                count,
                active: filter == active,
            }
        })
        .collect();

    let issues: Vec<IssueCard> = filtered
        .iter()
        .enumerate()
        .map(|(index, slot)| IssueCard::new(slot.as_ref(), index))
        .collect();

    ReportView {
        summary,
        password: body.password_analysis.as_ref().map(PasswordPanel::from_analysis),
        tiles: SeverityTiles {
            critical: body.critical,
            high: body.high,
            medium: body.medium,
            low: body.low,
        },
        config: body.config_summary,
        recommendations: body
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, text)| Recommendation {
                key: format!("rec-{i}"),
                text: text.clone(),
            })
            .collect(),
        filters,
        active_filter: active,
        empty_message: issues.is_empty().then_some(EMPTY_FILTER_MESSAGE),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults_for_null_slot() {
        let card = IssueCard::new(None, 4);
        assert_eq!(card.key, "issue-4");
        assert_eq!(card.severity_label, UNKNOWN_SEVERITY);
        assert_eq!(card.severity, None);
        assert_eq!(card.category, DEFAULT_CATEGORY);
        assert_eq!(card.title, UNTITLED_ISSUE);
        assert_eq!(card.description, NO_DESCRIPTION);
        assert!(card.location.is_none());
        assert!(card.reference.is_none());
    }

    #[test]
    fn test_card_keeps_unrecognized_severity_text() {
        let issue = IssueRecord {
            severity: Some("Severe".to_string()),
            cve: Some("N/A".to_string()),
            location: Some(String::new()),
            ..Default::default()
        };
        let card = IssueCard::new(Some(&issue), 0);
        assert_eq!(card.severity_label, "Severe");
        assert_eq!(card.severity, None);
        assert!(card.reference.is_none());
        assert!(card.location.is_none());
    }

    #[test]
    fn test_score_text() {
        let panel = SummaryPanel {
            filename: MISSING_FIELD.to_string(),
            analysis_time: MISSING_FIELD.to_string(),
            total_issues: 0,
            score: 72.5,
            rating: "Fair",
            band: ScoreBand::Fair,
            text_color: ColorClass::Yellow,
            bar_color: ColorClass::Yellow,
        };
        assert_eq!(panel.score_text(), "72.5/100");
        assert_eq!(panel.percent_text(), "72.5%");
    }
}
