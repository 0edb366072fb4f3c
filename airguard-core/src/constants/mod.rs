//! Constants for AirGuard Core
//!
//! This module provides centralized, documented constants used throughout
//! the inference engine. Numeric values that shape the standard model live
//! here rather than as magic numbers in the model code.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Universes**: Bounds and sampling resolution of every variable
//! - **Quality**: Band thresholds and index rounding
//! - **Capacity**: Fixed sizes of the heap-free containers
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document their units and source
//! 3. Group related constants together
//! 4. Use descriptive names that include units

/// Universe bounds and resolutions for inputs and output.
pub mod universes;

/// Quality-band thresholds and index rounding.
pub mod quality;

/// Fixed capacities of the engine's containers.
pub mod capacity;

// Re-export commonly used constants for convenience
pub use universes::{
    PARTICULATE_MIN_UG_M3, PARTICULATE_MAX_UG_M3,
    WIND_MIN_M_S, WIND_MAX_M_S,
    TEMPERATURE_MIN_C, TEMPERATURE_MAX_C,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    QUALITY_MIN, QUALITY_MAX, QUALITY_DEFAULT_RESOLUTION,
};

pub use quality::{BAND_THRESHOLDS, INDEX_DECIMALS};

pub use capacity::{MAX_ANTECEDENTS, MAX_RULES, MAX_TERMS, MAX_UNIVERSE_SAMPLES};
