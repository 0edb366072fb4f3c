//! Environmental samples
//!
//! One row of a measurement database: three descriptive tags used only for
//! filtering, and the four readings the engine consumes.

use airguard_core::{Model, QualityAssessment, Readings};
use serde::{Deserialize, Serialize};

use crate::errors::RecordResult;

/// Tag value used for readings typed in by hand
pub const MANUAL_TAG: &str = "manual";

/// One environmental record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalSample {
    /// Zone type (e.g. urban, suburban, rural, industrial)
    #[serde(alias = "Strefa")]
    pub zone: String,
    /// Season
    #[serde(alias = "Sezon")]
    pub season: String,
    /// Time of day
    #[serde(alias = "Pora_dnia")]
    pub time_of_day: String,
    /// Air temperature (°C)
    #[serde(alias = "temperature_c", alias = "Temperatura_C")]
    pub temperature: f64,
    /// Relative humidity (%)
    #[serde(alias = "humidity_pct", alias = "Wilgotnosc_rel_%")]
    pub humidity: f64,
    /// Wind speed (m/s)
    #[serde(alias = "wind_m_s", alias = "Predkosc_wiatru_m_s")]
    pub wind: f64,
    /// PM2.5 concentration (µg/m³)
    #[serde(alias = "pm25_ug_m3", alias = "PM2_5_ug_m3")]
    pub particulate: f64,
}

impl EnvironmentalSample {
    /// Sample for hand-entered readings, every tag set to `manual`
    pub fn manual(readings: Readings) -> Self {
        Self {
            zone: MANUAL_TAG.to_owned(),
            season: MANUAL_TAG.to_owned(),
            time_of_day: MANUAL_TAG.to_owned(),
            temperature: readings.temperature,
            humidity: readings.humidity,
            wind: readings.wind,
            particulate: readings.particulate,
        }
    }

    /// The four engine inputs
    pub fn to_readings(&self) -> Readings {
        Readings::new(self.particulate, self.wind, self.temperature, self.humidity)
    }

    /// Assess the sample against `model`
    pub fn evaluate(&self, model: &Model) -> RecordResult<QualityAssessment> {
        Ok(model.assess(&self.to_readings())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecordError;

    #[test]
    fn maps_fields_onto_readings() {
        let sample = EnvironmentalSample {
            zone: "miejska".into(),
            season: "zima".into(),
            time_of_day: "rano".into(),
            temperature: -3.0,
            humidity: 85.0,
            wind: 0.8,
            particulate: 95.0,
        };

        assert_eq!(sample.to_readings(), Readings::new(95.0, 0.8, -3.0, 85.0));
    }

    #[test]
    fn manual_sample_round_trips_readings() {
        let readings = Readings::new(12.0, 3.0, 21.0, 45.0);
        let sample = EnvironmentalSample::manual(readings);

        assert_eq!(sample.zone, "manual");
        assert_eq!(sample.to_readings(), readings);
    }

    #[test]
    fn evaluate_uses_the_model() {
        let model = Model::standard().unwrap();
        let sample = EnvironmentalSample::manual(Readings::new(0.0, 1.5, 18.0, 50.0));

        let assessment = sample.evaluate(&model).unwrap();
        assert_eq!(assessment.label(), "very good");
        assert_eq!(assessment.index, 90.7);
    }

    #[test]
    fn evaluate_surfaces_invalid_input() {
        let model = Model::standard().unwrap();
        let sample = EnvironmentalSample {
            particulate: -4.0,
            ..EnvironmentalSample::default()
        };

        assert!(matches!(sample.evaluate(&model), Err(RecordError::Assessment(_))));
    }

    #[test]
    fn deserializes_polish_keys() {
        let json = r#"{"Strefa":"wiejska","Sezon":"lato","Pora_dnia":"noc","Temperatura_C":14.5,"Wilgotnosc_rel_%":70,"Predkosc_wiatru_m_s":2.1,"PM2_5_ug_m3":8}"#;
        let sample: EnvironmentalSample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.zone, "wiejska");
        assert_eq!(sample.time_of_day, "noc");
        assert_eq!(sample.humidity, 70.0);
        assert_eq!(sample.particulate, 8.0);
    }
}
