//! Universe Bounds and Sampling Resolutions
//!
//! Every linguistic variable lives on a bounded universe. For the inputs
//! the bounds document the nominal sensor range and drive the optional
//! clamping policy; fuzzification itself evaluates membership formulas
//! directly and needs no sampling. The output universe is sampled for
//! aggregation and centroid defuzzification.

// ===== PARTICULATE MATTER (PM2.5) =====

/// Lower bound of the particulate universe (µg/m³).
pub const PARTICULATE_MIN_UG_M3: f64 = 0.0;

/// Upper bound of the particulate universe (µg/m³).
///
/// Twice the level at which the very-high set saturates; readings above
/// this are smog-episode values well outside typical low-cost sensor range.
pub const PARTICULATE_MAX_UG_M3: f64 = 200.0;

/// Sample count of the particulate universe (1 µg/m³ steps).
pub const PARTICULATE_RESOLUTION: usize = 201;

// ===== WIND =====

/// Lower bound of the wind universe (m/s).
pub const WIND_MIN_M_S: f64 = 0.0;

/// Upper bound of the wind universe (m/s).
///
/// Roughly Beaufort 8 (gale). Dispersion stops improving well below this.
pub const WIND_MAX_M_S: f64 = 18.0;

/// Sample count of the wind universe (0.1 m/s steps).
pub const WIND_RESOLUTION: usize = 181;

// ===== TEMPERATURE =====

/// Lower bound of the temperature universe (°C).
pub const TEMPERATURE_MIN_C: f64 = -20.0;

/// Upper bound of the temperature universe (°C).
pub const TEMPERATURE_MAX_C: f64 = 40.0;

/// Sample count of the temperature universe (0.25 °C steps).
pub const TEMPERATURE_RESOLUTION: usize = 241;

// ===== HUMIDITY =====

/// Lower bound of the relative humidity universe (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Upper bound of the relative humidity universe (%).
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

/// Sample count of the humidity universe (0.5 % steps).
pub const HUMIDITY_RESOLUTION: usize = 201;

// ===== QUALITY INDEX (OUTPUT) =====

/// Lower bound of the quality index.
pub const QUALITY_MIN: f64 = 0.0;

/// Upper bound of the quality index.
pub const QUALITY_MAX: f64 = 100.0;

/// Default sample count of the quality universe.
///
/// One sample per index point. Aggregation and the centroid are computed
/// on this grid, so it directly affects the reported index: a finer grid
/// weights the narrow top bands differently. Configurable through
/// [`EngineConfig::quality_resolution`](crate::EngineConfig).
pub const QUALITY_DEFAULT_RESOLUTION: usize = 101;
