//! Linguistic labels for every variable of the air-quality model
//!
//! Each variable has a closed set of labels, listed in ascending order
//! along its universe. Using enumerations instead of free-form strings
//! means a rule cannot reference a label that does not exist, and a
//! variable that forgets to define one of its labels is rejected when the
//! model is built.

use core::fmt;

use crate::traits::Term;

macro_rules! define_terms {
    (
        $(#[$meta:meta])*
        $name:ident, $variable:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Term for $name {
            const VARIABLE: &'static str = $variable;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

define_terms! {
    /// Fine particulate concentration (PM2.5, µg/m³)
    Particulate, "particulate" {
        /// Clean air
        VeryLow => "very_low",
        /// Background urban level
        Low => "low",
        /// Noticeable pollution
        Moderate => "moderate",
        /// Unhealthy for sensitive groups
        High => "high",
        /// Smog episode
        VeryHigh => "very_high",
    }
}

define_terms! {
    /// Wind speed (m/s)
    Wind, "wind" {
        /// Still air, pollutants accumulate
        Calm => "calm",
        /// Light ventilation
        Breeze => "breeze",
        /// Steady dispersion
        Windy => "windy",
        /// Strong, gusting wind
        Gusty => "gusty",
    }
}

define_terms! {
    /// Air temperature (°C)
    Temperature, "temperature" {
        /// Below freezing
        Freezing => "freezing",
        /// Cold
        Cold => "cold",
        /// Mild
        Mild => "mild",
        /// Warm
        Warm => "warm",
        /// Hot
        Hot => "hot",
    }
}

define_terms! {
    /// Relative humidity (%)
    Humidity, "humidity" {
        /// Very dry air
        VeryDry => "very_dry",
        /// Dry air
        Dry => "dry",
        /// Comfortable range
        Comfortable => "comfortable",
        /// Humid air
        Humid => "humid",
        /// Near saturation (fog, mist)
        Saturated => "saturated",
    }
}

define_terms! {
    /// Air-quality bands, used both as output sets and as assessment labels
    QualityBand, "quality" {
        /// Index below 28
        Alarming => "alarming",
        /// Index in [28, 42)
        VeryPoor => "very_poor",
        /// Index in [42, 55)
        Poor => "poor",
        /// Index in [55, 68)
        Fair => "fair",
        /// Index in [68, 80)
        Moderate => "moderate",
        /// Index in [80, 90)
        Good => "good",
        /// Index in [90, 97)
        VeryGood => "very_good",
        /// Index of 97 and above
        Exceptional => "exceptional",
    }
}
