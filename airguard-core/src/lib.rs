//! Fuzzy inference engine for AirGuard
//!
//! Turns four environmental readings (particulate concentration, wind
//! speed, temperature, relative humidity) into a continuous air-quality
//! index in `[0, 100]` and one of eight quality bands, using Mamdani
//! inference: min t-norm for rule antecedents, min implication, max
//! aggregation and centroid defuzzification.
//!
//! Key constraints:
//! - No heap allocation: every container has a fixed capacity
//! - The model is built once and shared read-only by every evaluation
//! - Sub-millisecond assessment on edge hardware
//!
//! ```
//! use airguard_core::{Model, Readings};
//!
//! let model = Model::standard()?;
//! let readings = Readings::new(0.0, 1.5, 18.0, 50.0);
//!
//! let assessment = model.assess(&readings)?;
//! assert!(assessment.index >= 90.0);
//! # Ok::<(), airguard_core::AssessmentError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Logging compiles away entirely without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod assessment;
pub mod config;
pub mod constants;
pub mod defuzz;
pub mod errors;
pub mod inference;
pub mod membership;
pub mod model;
pub mod readings;
pub mod rules;
pub mod terms;
pub mod traits;
pub mod universe;
pub mod variable;

// Public API
pub use assessment::QualityAssessment;
pub use config::{DegeneratePolicy, EngineConfig, InputPolicy};
pub use defuzz::Defuzzified;
pub use errors::{AssessmentError, AssessmentResult, ModelError, ModelResult};
pub use inference::{AggregatedSet, Inference, InferenceEngine, RuleActivation};
pub use membership::MembershipFunction;
pub use model::{Model, ModelBuilder};
pub use readings::Readings;
pub use rules::{Antecedent, InputVariable, Rule, RuleBase, TNorm};
pub use terms::{Humidity, Particulate, QualityBand, Temperature, Wind};
pub use traits::{Term, Validatable};
pub use universe::Universe;
pub use variable::LinguisticVariable;

#[cfg(feature = "std")]
pub use config::ConfigError;
#[cfg(feature = "std")]
pub use model::{assess, shared_model};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
