//! Severity levels for issues and password-strength classification.

use super::ColorClass;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized issue severity.
///
/// Issue payloads carry severity as free text. Only the exact upper-case
/// literals map to a level; anything else (including `"critical"` or
/// `"Critical"`) is an unknown severity and is represented as `None` at the
/// call site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All levels, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Match a payload literal exactly (case-sensitive, no synonyms).
    #[must_use]
    pub fn from_exact(value: &str) -> Option<Self> {
        match value {
            "CRITICAL" => Some(Self::Critical),
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    /// Parse user input (CLI flags, config values) case-insensitively.
    #[must_use]
    pub fn parse_loose(value: &str) -> Option<Self> {
        Self::from_exact(value.trim().to_ascii_uppercase().as_str())
    }

    /// The payload literal for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Title-case label used on the count tiles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub const fn color(self) -> ColorClass {
        match self {
            Self::Critical => ColorClass::Red,
            Self::High => ColorClass::Orange,
            Self::Medium => ColorClass::Yellow,
            Self::Low => ColorClass::Green,
        }
    }

    /// Color for an optional severity; unknown severities are gray.
    #[must_use]
    pub const fn color_of(severity: Option<Self>) -> ColorClass {
        match severity {
            Some(severity) => severity.color(),
            None => ColorClass::Gray,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Password-strength classification of a `passwordAnalysis` sub-report.
///
/// `CRITICAL`, `WEAK` and `MODERATE` are recognized exactly; every other
/// value, including a missing one, is treated as strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PasswordStrength {
    Critical,
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub fn classify(value: Option<&str>) -> Self {
        match value {
            Some("CRITICAL") => Self::Critical,
            Some("WEAK") => Self::Weak,
            Some("MODERATE") => Self::Moderate,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub const fn color(self) -> ColorClass {
        match self {
            Self::Critical => ColorClass::Red,
            Self::Weak => ColorClass::Orange,
            Self::Moderate => ColorClass::Yellow,
            Self::Strong => ColorClass::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exact_is_case_sensitive() {
        assert_eq!(Severity::from_exact("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_exact("LOW"), Some(Severity::Low));
        assert_eq!(Severity::from_exact("critical"), None);
        assert_eq!(Severity::from_exact("Critical"), None);
        assert_eq!(Severity::from_exact("SEVERE"), None);
        assert_eq!(Severity::from_exact(""), None);
    }

    #[test]
    fn test_parse_loose() {
        assert_eq!(Severity::parse_loose("high"), Some(Severity::High));
        assert_eq!(Severity::parse_loose(" Medium "), Some(Severity::Medium));
        assert_eq!(Severity::parse_loose("info"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_password_strength_fallback() {
        assert_eq!(
            PasswordStrength::classify(Some("CRITICAL")),
            PasswordStrength::Critical
        );
        assert_eq!(PasswordStrength::classify(Some("WEAK")), PasswordStrength::Weak);
        assert_eq!(
            PasswordStrength::classify(Some("MODERATE")),
            PasswordStrength::Moderate
        );
        assert_eq!(PasswordStrength::classify(Some("weak")), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify(None), PasswordStrength::Strong);
    }
}
