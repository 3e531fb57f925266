//! Security score clamping and rating bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A security score guaranteed to lie in `[0, 100]`.
///
/// Deserialization goes through the same clamp as [`SecurityScore::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SecurityScore(f64);

impl SecurityScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Clamp a raw score. Non-finite input (NaN, ±∞) becomes 0, and so
    /// does negative zero.
    #[must_use]
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() {
            // adding +0.0 turns -0.0 into +0.0 so it never prints as "-0"
            Self(raw.clamp(Self::MIN, Self::MAX) + 0.0)
        } else {
            Self(Self::MIN)
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Rating band for this score.
    #[must_use]
    pub fn band(self) -> ScoreBand {
        ScoreBand::from_score(self.0)
    }
}

impl From<f64> for SecurityScore {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<SecurityScore> for f64 {
    fn from(score: SecurityScore) -> Self {
        score.0
    }
}

impl fmt::Display for SecurityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display already drops a trailing ".0"
        write!(f, "{}", self.0)
    }
}

/// Rating tier of a security score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

/// Lower bounds of each tier, highest first. Both the rating label and every
/// color mapping go through this table.
const BAND_FLOORS: [(f64, ScoreBand); 4] = [
    (90.0, ScoreBand::Excellent),
    (75.0, ScoreBand::Good),
    (50.0, ScoreBand::Fair),
    (25.0, ScoreBand::Poor),
];

impl ScoreBand {
    /// Classify a score. Anything below the lowest floor (or NaN) is `Critical`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        BAND_FLOORS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map_or(Self::Critical, |(_, band)| *band)
    }

    /// Human-readable rating.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }

    /// Color for the score text and rating label.
    #[must_use]
    pub const fn text_color(self) -> ColorClass {
        match self {
            Self::Excellent => ColorClass::Green,
            Self::Good => ColorClass::Blue,
            Self::Fair => ColorClass::Yellow,
            Self::Poor => ColorClass::Orange,
            Self::Critical => ColorClass::Red,
        }
    }

    /// Color for the progress bar. The top two tiers share green.
    #[must_use]
    pub const fn bar_color(self) -> ColorClass {
        match self {
            Self::Excellent | Self::Good => ColorClass::Green,
            Self::Fair => ColorClass::Yellow,
            Self::Poor => ColorClass::Orange,
            Self::Critical => ColorClass::Red,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic color names shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl ColorClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}
