//! Normalized report records.

use super::{SecurityScore, Severity};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use xxhash_rust::xxh3::xxh3_64;

/// Sentinel `cve` value meaning "no CVE reference".
pub const CVE_NOT_AVAILABLE: &str = "N/A";

/// A fully-defaulted analysis report.
///
/// Produced by [`crate::normalize::normalize`]; only exists when the raw
/// payload was an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedReport {
    /// Name of the scanned artifact
    pub filename: Option<String>,
    /// When the analysis ran, as supplied by the producer
    pub analysis_time: Option<String>,
    /// Analysis findings with every field defaulted
    pub body: AnalysisBody,
}

/// Analysis findings for one artifact.
///
/// `critical`/`high`/`medium`/`low` are the producer's own aggregates and are
/// never reconciled with the issue list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisBody {
    pub total_issues: u64,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub security_score: SecurityScore,
    pub issues: IssueList,
    pub recommendations: Vec<String>,
    pub config_summary: Option<ConfigSummary>,
    pub password_analysis: Option<PasswordAnalysis>,
}

impl AnalysisBody {
    /// The producer-supplied count for one severity bucket.
    #[must_use]
    pub const fn reported_count(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// One detected finding. Every field is optional; defaults are applied at
/// render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw severity text as supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl IssueRecord {
    /// Recognized severity level, `None` for missing or unknown text.
    #[must_use]
    pub fn severity_level(&self) -> Option<Severity> {
        self.severity.as_deref().and_then(Severity::from_exact)
    }

    /// CVE reference, unless absent, empty, or the `N/A` sentinel.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.cve
            .as_deref()
            .filter(|cve| !cve.is_empty() && *cve != CVE_NOT_AVAILABLE)
    }
}

/// Ordered, shared, immutable issue sequence with an identity token.
///
/// Cloning is cheap and preserves identity ([`IssueList::same_identity`]).
/// The fingerprint is a content hash used as the memoization key for every
/// derivation over the list.
#[derive(Debug, Clone)]
pub struct IssueList {
    items: Arc<[Option<IssueRecord>]>,
    fingerprint: u64,
}

impl IssueList {
    /// Build a list and compute its content fingerprint.
    #[must_use]
    pub fn new(items: Vec<Option<IssueRecord>>) -> Self {
        let fingerprint = Self::content_fingerprint(&items);
        Self {
            items: items.into(),
            fingerprint,
        }
    }

    /// An empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn content_fingerprint(items: &[Option<IssueRecord>]) -> u64 {
        let mut hasher_input = (items.len() as u64).to_le_bytes().to_vec();
        if let Ok(json) = serde_json::to_vec(items) {
            hasher_input.extend(json);
        }
        xxh3_64(&hasher_input)
    }

    /// Content fingerprint (identity token for memoized derivations).
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// True when both handles point at the same underlying sequence.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IssueRecord> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<IssueRecord>> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Option<IssueRecord>] {
        &self.items
    }
}

impl Default for IssueList {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for IssueList {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint && self.items == other.items
    }
}

impl Serialize for IssueList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.as_ref().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Option<IssueRecord>;
    type IntoIter = std::slice::Iter<'a, Option<IssueRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Configuration overview counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub total_interfaces: u64,
    pub total_vty_lines: u64,
    pub total_acls: u64,
}

/// Password-strength sub-report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PasswordAnalysis {
    /// Raw strength text as supplied
    pub strength: Option<String>,
    pub score: Option<f64>,
    /// Titles of password-related findings, in order; `None` when an entry
    /// carried no usable title
    pub issues: Vec<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(severity: &str) -> IssueRecord {
        IssueRecord {
            severity: Some(severity.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_severity_level() {
        assert_eq!(record("HIGH").severity_level(), Some(Severity::High));
        assert_eq!(record("high").severity_level(), None);
        assert_eq!(IssueRecord::default().severity_level(), None);
    }

    #[test]
    fn test_reference_hides_sentinel() {
        let mut issue = IssueRecord::default();
        assert_eq!(issue.reference(), None);
        issue.cve = Some("N/A".to_string());
        assert_eq!(issue.reference(), None);
        issue.cve = Some(String::new());
        assert_eq!(issue.reference(), None);
        issue.cve = Some("CVE-2023-20198".to_string());
        assert_eq!(issue.reference(), Some("CVE-2023-20198"));
    }

    #[test]
    fn test_issue_list_identity() {
        let list = IssueList::new(vec![Some(record("LOW")), None]);
        let shared = list.clone();
        assert!(list.same_identity(&shared));

        let rebuilt = IssueList::new(vec![Some(record("LOW")), None]);
        assert!(!list.same_identity(&rebuilt));
        assert_eq!(list.fingerprint(), rebuilt.fingerprint());
        assert_eq!(list, rebuilt);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = IssueList::new(vec![Some(record("LOW"))]);
        let b = IssueList::new(vec![Some(record("HIGH"))]);
        let c = IssueList::new(vec![None]);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_ne!(IssueList::empty().fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_get_skips_null_entries() {
        let list = IssueList::new(vec![None, Some(record("LOW"))]);
        assert_eq!(list.len(), 2);
        assert!(list.get(0).is_none());
        assert!(list.get(1).is_some());
        assert!(list.get(2).is_none());
    }
}
