//! Quality bands and the assessment result
//!
//! | index ≥ | band        |
//! |---------|-------------|
//! | 97      | exceptional |
//! | 90      | very good   |
//! | 80      | good        |
//! | 68      | moderate    |
//! | 55      | fair        |
//! | 42      | poor        |
//! | 28      | very poor   |
//! | -       | alarming    |
//!
//! The band is chosen from the full-precision index. Only the reported
//! index is rounded, so a raw 89.96 reads "good (index 90.0)".

use core::fmt;

use crate::{
    constants::quality::{BAND_THRESHOLDS, INDEX_DECIMALS},
    terms::QualityBand,
};

impl QualityBand {
    /// Band containing `index`
    ///
    /// Total over `f64`: anything below the lowest threshold, including
    /// NaN, is alarming.
    pub fn from_index(index: f64) -> Self {
        BAND_THRESHOLDS
            .iter()
            .find(|(threshold, _)| index >= *threshold)
            .map(|(_, band)| *band)
            .unwrap_or(QualityBand::Alarming)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alarming => "alarming",
            Self::VeryPoor => "very poor",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::VeryGood => "very good",
            Self::Exceptional => "exceptional",
        }
    }

    /// Inclusive lower bound of the band's index range
    pub fn min_index(&self) -> f64 {
        BAND_THRESHOLDS
            .iter()
            .find(|(_, band)| band == self)
            .map(|(threshold, _)| *threshold)
            .unwrap_or(f64::NEG_INFINITY)
    }
}

/// Round to the reporting precision
pub fn round_index(raw: f64) -> f64 {
    let scale = libm::pow(10.0, INDEX_DECIMALS as f64);
    libm::round(raw * scale) / scale
}

/// Outcome of one assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityAssessment {
    /// Band of the full-precision index
    pub band: QualityBand,
    /// Index rounded to one decimal, for reporting
    pub index: f64,
    /// Full-precision centroid
    pub raw_index: f64,
    /// Set when no rule fired and `raw_index` is the fallback midpoint
    pub degenerate: bool,
}

impl QualityAssessment {
    /// Assessment for a defuzzified index
    pub fn new(raw_index: f64, degenerate: bool) -> Self {
        Self {
            band: QualityBand::from_index(raw_index),
            index: round_index(raw_index),
            raw_index,
            degenerate,
        }
    }

    /// Human-readable band label (e.g. "very good")
    pub fn label(&self) -> &'static str {
        self.band.label()
    }
}

impl fmt::Display for QualityAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (index {:.1})", self.label(), self.index)?;
        if self.degenerate {
            f.write_str(" [no rule fired]")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QualityAssessment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("QualityAssessment", 5)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("band", &self.band)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("raw_index", &self.raw_index)?;
        state.serialize_field("degenerate", &self.degenerate)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Term;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(QualityBand::from_index(100.0), QualityBand::Exceptional);
        assert_eq!(QualityBand::from_index(97.0), QualityBand::Exceptional);
        assert_eq!(QualityBand::from_index(96.999), QualityBand::VeryGood);
        assert_eq!(QualityBand::from_index(90.0), QualityBand::VeryGood);
        assert_eq!(QualityBand::from_index(80.0), QualityBand::Good);
        assert_eq!(QualityBand::from_index(68.0), QualityBand::Moderate);
        assert_eq!(QualityBand::from_index(55.0), QualityBand::Fair);
        assert_eq!(QualityBand::from_index(42.0), QualityBand::Poor);
        assert_eq!(QualityBand::from_index(28.0), QualityBand::VeryPoor);
        assert_eq!(QualityBand::from_index(27.99), QualityBand::Alarming);
        assert_eq!(QualityBand::from_index(0.0), QualityBand::Alarming);
        assert_eq!(QualityBand::from_index(f64::NAN), QualityBand::Alarming);
    }

    #[test]
    fn bands_cover_index_range_in_order() {
        let mut previous = QualityBand::Alarming;
        for step in 0..=10_000 {
            let band = QualityBand::from_index(step as f64 / 100.0);
            assert!(band >= previous);
            previous = band;
        }
        assert_eq!(previous, QualityBand::Exceptional);
    }

    #[test]
    fn every_band_has_a_threshold_or_is_the_floor() {
        for band in QualityBand::ALL {
            if *band == QualityBand::Alarming {
                assert_eq!(band.min_index(), f64::NEG_INFINITY);
            } else {
                assert_eq!(QualityBand::from_index(band.min_index()), *band);
            }
        }
    }

    #[test]
    fn label_comes_from_raw_index() {
        let assessment = QualityAssessment::new(89.96, false);
        assert_eq!(assessment.index, 90.0);
        assert_eq!(assessment.band, QualityBand::Good);
        assert_eq!(assessment.label(), "good");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_index(90.70996), 90.7);
        assert_eq!(round_index(9.135), 9.1);
        assert_eq!(round_index(50.0), 50.0);
        assert_eq!(round_index(36.84), 36.8);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(QualityAssessment::new(90.70996, false).to_string(), "very good (index 90.7)");
        assert_eq!(
            QualityAssessment::new(50.0, true).to_string(),
            "poor (index 50.0) [no rule fired]"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn serializes_label_text() {
        let json = serde_json::to_string(&QualityAssessment::new(90.70996, false)).unwrap();
        assert!(json.starts_with(r#"{"label":"very good","band":"very_good","index":90.7,"#));
        assert!(json.ends_with(r#""degenerate":false}"#));
    }
}
