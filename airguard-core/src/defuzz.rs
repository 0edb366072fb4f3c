//! Centroid defuzzification
//!
//! ```text
//! centroid = Σ xᵢ·μ(xᵢ) / Σ μ(xᵢ)
//! ```
//!
//! over the sample points of the output universe. When `Σ μ = 0` no rule
//! fired and the ratio is undefined; the universe midpoint is returned
//! instead, tagged as [`Defuzzified::Fallback`] so callers can tell.

use crate::inference::AggregatedSet;

/// Crisp value produced from an aggregated set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Defuzzified {
    /// Centre of mass of a non-empty set
    Centroid(f64),
    /// Universe midpoint, returned for an identically zero set
    Fallback(f64),
}

impl Defuzzified {
    /// The crisp value, whichever branch produced it
    pub fn value(self) -> f64 {
        match self {
            Self::Centroid(x) | Self::Fallback(x) => x,
        }
    }

    /// Whether the degenerate branch was taken
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Discrete centroid of `set`
pub fn centroid(set: &AggregatedSet) -> Defuzzified {
    let (moment, area) = set
        .samples()
        .fold((0.0, 0.0), |(moment, area), (x, mu)| (moment + x * mu, area + mu));

    if area > 0.0 {
        Defuzzified::Centroid(moment / area)
    } else {
        Defuzzified::Fallback(set.universe().midpoint())
    }
}
