//! Quality Band Thresholds
//!
//! The crisp index is mapped to one of eight ordered bands. Each threshold
//! is an inclusive lower bound; anything below the last threshold is
//! alarming. Together the bands cover the whole index range with no gap
//! or overlap.

use crate::terms::QualityBand;

/// Inclusive lower bound of the exceptional band.
pub const EXCEPTIONAL_MIN_INDEX: f64 = 97.0;

/// Inclusive lower bound of the very-good band.
pub const VERY_GOOD_MIN_INDEX: f64 = 90.0;

/// Inclusive lower bound of the good band.
pub const GOOD_MIN_INDEX: f64 = 80.0;

/// Inclusive lower bound of the moderate band.
pub const MODERATE_MIN_INDEX: f64 = 68.0;

/// Inclusive lower bound of the fair band.
pub const FAIR_MIN_INDEX: f64 = 55.0;

/// Inclusive lower bound of the poor band.
pub const POOR_MIN_INDEX: f64 = 42.0;

/// Inclusive lower bound of the very-poor band.
///
/// Everything below is alarming.
pub const VERY_POOR_MIN_INDEX: f64 = 28.0;

/// Thresholds checked from the top down.
pub const BAND_THRESHOLDS: [(f64, QualityBand); 7] = [
    (EXCEPTIONAL_MIN_INDEX, QualityBand::Exceptional),
    (VERY_GOOD_MIN_INDEX, QualityBand::VeryGood),
    (GOOD_MIN_INDEX, QualityBand::Good),
    (MODERATE_MIN_INDEX, QualityBand::Moderate),
    (FAIR_MIN_INDEX, QualityBand::Fair),
    (POOR_MIN_INDEX, QualityBand::Poor),
    (VERY_POOR_MIN_INDEX, QualityBand::VeryPoor),
];

/// Decimal places of the externally reported index.
pub const INDEX_DECIMALS: i32 = 1;
