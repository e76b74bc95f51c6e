use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Match confidence clamped to [0.0, 1.0].
///
/// The single canonical score scale for every matching tier: fuzzy scores
/// (natively 0–100) are divided by 100 at the tier boundary, cosine
/// similarity is clamped at zero. No other scale crosses a crate boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Confidence assigned by the exact tier.
    pub const EXACT: f64 = 1.0;
    /// Matches above this are considered reliable for template selection.
    pub const HIGH: f64 = 0.8;
    /// Matches below this are borderline and worth surfacing to the caller.
    pub const LOW: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Convert a fuzzy-tier score on the 0–100 scale.
    pub fn from_percent(score: f64) -> Self {
        Self::new(score / 100.0)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this is an exact-tier confidence.
    pub fn is_exact(self) -> bool {
        self.0 >= Self::EXACT
    }

    /// Whether the match is above the high-reliability threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
