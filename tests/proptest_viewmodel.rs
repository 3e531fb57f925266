//! Property-based tests for the normalizer and view-model derivations.
//!
//! Ensures arbitrary payloads never panic and that the score, filter,
//! count and key invariants hold across random inputs.

use proptest::prelude::*;
use secreport::model::{IssueList, IssueRecord, ScoreBand, SecurityScore, Severity};
use secreport::viewmodel::{count_severities, filter_issues, issue_key, SeverityFilter};
use secreport::{normalize, normalize_str};
use serde_json::{json, Value};

fn severity_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("CRITICAL".to_string())),
        Just(Some("HIGH".to_string())),
        Just(Some("MEDIUM".to_string())),
        Just(Some("LOW".to_string())),
        Just(Some("critical".to_string())),
        Just(Some("INFO".to_string())),
        "[A-Za-z]{0,8}".prop_map(Some),
    ]
}

fn issue_slot() -> impl Strategy<Value = Option<IssueRecord>> {
    let record = (
        proptest::option::of("[a-z0-9-]{0,6}"),
        proptest::option::of(prop_oneof![Just("N/A".to_string()), "CVE-[0-9]{4}-[0-9]{1,5}"]),
        proptest::option::of("[ A-Za-z]{0,24}"),
        severity_text(),
    )
        .prop_map(|(id, cve, title, severity)| IssueRecord {
            id,
            cve,
            title,
            severity,
            ..IssueRecord::default()
        });
    prop_oneof![1 => Just(None), 6 => record.prop_map(Some)]
}

fn issue_list() -> impl Strategy<Value = IssueList> {
    proptest::collection::vec(issue_slot(), 0..40).prop_map(IssueList::new)
}

fn filter() -> impl Strategy<Value = SeverityFilter> {
    proptest::sample::select(SeverityFilter::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_always_in_range(
        raw in prop_oneof![Just(-0.0f64), proptest::num::f64::ANY]
    ) {
        let score = SecurityScore::new(raw).value();
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert!(score.is_sign_positive());
        if !raw.is_finite() {
            prop_assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn rating_and_color_share_bands(raw in -50.0f64..150.0) {
        let score = SecurityScore::new(raw);
        let band = ScoreBand::from_score(score.value());
        prop_assert_eq!(score.band(), band);
        let expected = if score.value() >= 90.0 {
            ScoreBand::Excellent
        } else if score.value() >= 75.0 {
            ScoreBand::Good
        } else if score.value() >= 50.0 {
            ScoreBand::Fair
        } else if score.value() >= 25.0 {
            ScoreBand::Poor
        } else {
            ScoreBand::Critical
        };
        prop_assert_eq!(band, expected);
        prop_assert_eq!(band.text_color(), expected.text_color());
        prop_assert_eq!(band.bar_color(), expected.bar_color());
    }

    #[test]
    fn filtered_subset_is_exact(issues in issue_list(), filter in filter()) {
        let filtered = filter_issues(&issues, filter);
        let counts = count_severities(&issues);
        prop_assert_eq!(filtered.len(), counts.get(filter));

        if let Some(wanted) = filter.severity() {
            let expected: Vec<Option<IssueRecord>> = issues
                .iter()
                .filter(|slot| {
                    slot.as_ref().and_then(IssueRecord::severity_level) == Some(wanted)
                })
                .cloned()
                .collect();
            prop_assert_eq!(filtered.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn all_filter_is_identity(issues in issue_list()) {
        let filtered = filter_issues(&issues, SeverityFilter::All);
        prop_assert!(filtered.same_identity(&issues));
    }

    #[test]
    fn recognized_counts_never_exceed_total(issues in issue_list()) {
        let counts = count_severities(&issues);
        prop_assert!(counts.recognized() <= counts.all);
        let all_recognized = issues
            .iter()
            .all(|slot| slot.as_ref().and_then(IssueRecord::severity_level).is_some());
        prop_assert_eq!(counts.recognized() == counts.all, all_recognized);
    }

    #[test]
    fn every_issue_gets_a_key(issues in issue_list()) {
        for (index, slot) in issues.iter().enumerate() {
            let key = issue_key(slot.as_ref(), index);
            prop_assert!(!key.is_empty());
            if let Some(id) = slot.as_ref().and_then(|i| i.id.as_deref()).filter(|id| !id.is_empty()) {
                prop_assert_eq!(key, id);
            }
        }
    }

    #[test]
    fn normalize_never_panics(text in "\\PC{0,200}") {
        let _ = normalize_str(&text);
    }

    #[test]
    fn normalize_handles_any_issue_shapes(
        severity in prop_oneof![Just(json!("HIGH")), Just(json!(3)), Just(Value::Null)],
        total in prop_oneof![Just(json!(null)), Just(json!(-4)), Just(json!(2.7)), Just(json!("x"))],
        score in prop_oneof![Just(json!(55)), Just(json!("55")), Just(json!(1e308))],
    ) {
        let raw = json!({
            "analysis": {
                "totalIssues": total,
                "securityScore": score,
                "issues": [{"severity": severity}, null, 5]
            }
        });
        let report = normalize(&raw).unwrap();
        prop_assert_eq!(report.body.issues.len(), 3);
        prop_assert!((0.0..=100.0).contains(&report.body.security_score.value()));
    }
}

#[test]
fn key_examples() {
    let by_id = IssueRecord {
        id: Some("X".to_string()),
        ..IssueRecord::default()
    };
    assert_eq!(issue_key(Some(&by_id), 7), "X");

    let by_cve = IssueRecord {
        cve: Some("CVE-1".to_string()),
        ..IssueRecord::default()
    };
    assert_eq!(issue_key(Some(&by_cve), 0), "CVE-1");

    let by_title = IssueRecord {
        cve: Some("N/A".to_string()),
        title: Some("Weak Password Policy".to_string()),
        ..IssueRecord::default()
    };
    assert_eq!(issue_key(Some(&by_title), 4), "Weak-Password-Policy-4");

    assert_eq!(issue_key(Some(&IssueRecord::default()), 3), "issue-3");
    assert_eq!(issue_key(None, 0), "issue-0");
    assert_eq!(Severity::color_of(None), secreport::ColorClass::Gray);
}
