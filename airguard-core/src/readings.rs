//! Crisp input readings

use crate::{
    errors::{AssessmentError, AssessmentResult},
    rules::InputVariable,
    traits::Validatable,
};

/// One set of environmental readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readings {
    /// PM2.5 concentration (µg/m³), non-negative
    pub particulate: f64,
    /// Wind speed (m/s), non-negative
    pub wind: f64,
    /// Air temperature (°C), unconstrained
    pub temperature: f64,
    /// Relative humidity (%), non-negative
    pub humidity: f64,
}

impl Readings {
    /// Readings in the argument order of [`assess`](crate::Model::assess)
    pub const fn new(particulate: f64, wind: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            particulate,
            wind,
            temperature,
            humidity,
        }
    }

    /// Value of one input
    pub fn get(&self, variable: InputVariable) -> f64 {
        match variable {
            InputVariable::Particulate => self.particulate,
            InputVariable::Wind => self.wind,
            InputVariable::Temperature => self.temperature,
            InputVariable::Humidity => self.humidity,
        }
    }

    /// Copy with one input replaced
    pub fn with(mut self, variable: InputVariable, value: f64) -> Self {
        match variable {
            InputVariable::Particulate => self.particulate = value,
            InputVariable::Wind => self.wind = value,
            InputVariable::Temperature => self.temperature = value,
            InputVariable::Humidity => self.humidity = value,
        }
        self
    }

    /// Check the preconditions of an assessment
    ///
    /// Every reading must be finite; particulate, wind and humidity must
    /// also be non-negative. The first violation, in argument order, is
    /// reported.
    pub fn validate(&self) -> AssessmentResult<()> {
        for variable in InputVariable::ALL {
            let value = self.get(variable);

            if !value.is_valid() {
                return Err(AssessmentError::InvalidInput {
                    reading: variable,
                    value,
                    reason: "must be finite",
                });
            }

            if variable != InputVariable::Temperature && value < 0.0 {
                return Err(AssessmentError::InvalidInput {
                    reading: variable,
                    value,
                    reason: "must be non-negative",
                });
            }
        }

        Ok(())
    }
}
