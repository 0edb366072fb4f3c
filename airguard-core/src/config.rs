//! Engine Configuration
//!
//! The numeric semantics of an assessment are fixed by a handful of
//! switches. Defaults reproduce classic Mamdani inference with a 101-point
//! output universe.
//!
//! ## JSON Form
//!
//! ```json
//! {
//!   "t_norm": "min",
//!   "input_policy": "extrapolate",
//!   "degenerate_policy": "fallback",
//!   "quality_resolution": 101
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use crate::{
    constants::{
        capacity::MAX_UNIVERSE_SAMPLES,
        universes::QUALITY_DEFAULT_RESOLUTION,
    },
    errors::{ModelError, ModelResult},
    rules::TNorm,
};

/// Treatment of readings outside their variable's universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputPolicy {
    /// Evaluate membership formulas at the raw value
    #[default]
    Extrapolate,
    /// Clamp each reading into its universe before fuzzification
    ClampToUniverse,
}

/// Treatment of an identically zero aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegeneratePolicy {
    /// Report the output universe midpoint with the `degenerate` flag set
    #[default]
    Fallback,
    /// Fail with `AssessmentError::DegenerateAggregate`
    Reject,
}

/// Switches controlling inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EngineConfig {
    /// Conjunction of antecedent clauses
    pub t_norm: TNorm,
    /// Out-of-universe readings
    pub input_policy: InputPolicy,
    /// Empty aggregates
    pub degenerate_policy: DegeneratePolicy,
    /// Sample count of the output universe
    pub quality_resolution: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            t_norm: TNorm::Min,
            input_policy: InputPolicy::Extrapolate,
            degenerate_policy: DegeneratePolicy::Fallback,
            quality_resolution: QUALITY_DEFAULT_RESOLUTION,
        }
    }
}

impl EngineConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> ModelResult<()> {
        if self.quality_resolution < 2 {
            return Err(ModelError::InvalidConfig {
                reason: "quality_resolution must be at least 2",
            });
        }
        if self.quality_resolution > MAX_UNIVERSE_SAMPLES {
            return Err(ModelError::InvalidConfig {
                reason: "quality_resolution exceeds the sample capacity",
            });
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use loading::{ConfigError, ConfigResult};

#[cfg(feature = "std")]
mod loading {
    use std::{fs, path::Path};

    use thiserror_no_std::Error;

    use super::EngineConfig;
    use crate::errors::ModelError;

    /// Errors raised while loading a configuration file
    #[derive(Error, Debug)]
    pub enum ConfigError {
        /// The file could not be read
        #[error("Cannot read configuration: {0}")]
        Io(#[from] std::io::Error),

        /// The file is not a valid configuration document
        #[error("Malformed configuration: {0}")]
        Json(#[from] serde_json::Error),

        /// The configuration parsed but is unusable
        #[error(transparent)]
        Invalid(#[from] ModelError),
    }

    /// Result type for configuration loading
    pub type ConfigResult<T> = Result<T, ConfigError>;

    impl EngineConfig {
        /// Parse and validate a JSON document
        pub fn from_json_str(json: &str) -> ConfigResult<Self> {
            let config: EngineConfig = serde_json::from_str(json)?;
            config.validate()?;
            Ok(config)
        }

        /// Read, parse and validate a JSON file
        pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
            let json = fs::read_to_string(path)?;
            Self::from_json_str(&json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.t_norm, TNorm::Min);
        assert_eq!(config.input_policy, InputPolicy::Extrapolate);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Fallback);
        assert_eq!(config.quality_resolution, 101);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn resolution_bounds() {
        let mut config = EngineConfig::default();

        config.quality_resolution = 1;
        assert!(config.validate().is_err());
        config.quality_resolution = 2;
        assert!(config.validate().is_ok());
        config.quality_resolution = MAX_UNIVERSE_SAMPLES;
        assert!(config.validate().is_ok());
        config.quality_resolution = MAX_UNIVERSE_SAMPLES + 1;
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn parses_partial_json() {
        let config =
            EngineConfig::from_json_str(r#"{"t_norm": "product", "input_policy": "clamp_to_universe"}"#)
                .unwrap();

        assert_eq!(config.t_norm, TNorm::Product);
        assert_eq!(config.input_policy, InputPolicy::ClampToUniverse);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Fallback);
        assert_eq!(config.quality_resolution, 101);
    }

    #[cfg(feature = "std")]
    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"tnorm": "min"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"t_norm": "max"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"quality_resolution": 5000}"#),
            Err(ConfigError::Invalid(ModelError::InvalidConfig { .. }))
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            EngineConfig::from_json_file("/nonexistent/airguard/engine.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
