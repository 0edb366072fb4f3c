//! Error Types for Assessment and Model Construction
//!
//! ## Design Philosophy
//!
//! AirGuard's error system follows the same rules as the rest of the core:
//!
//! 1. **Small Size**: Variants carry only scalars and `&'static str` context,
//!    so errors stay cheap to return from the evaluation hot path.
//!
//! 2. **No Heap Allocation**: No `String` anywhere. Variable and label names
//!    are the static names of the closed label enumerations.
//!
//! 3. **Copy Semantics**: Both error enums are `Copy`, which lets the shared
//!    model cache its construction outcome and hand it to every caller.
//!
//! ## Error Categories
//!
//! ### Evaluation time ([`AssessmentError`])
//! - `InvalidInput`: negative particulate, wind or humidity, or a non-finite
//!   reading. Rejected before any inference work.
//! - `DegenerateAggregate`: no rule fired. Only surfaced as an error under
//!   [`DegeneratePolicy::Reject`](crate::DegeneratePolicy::Reject); the default
//!   policy returns the universe midpoint and flags the assessment instead.
//! - `MalformedModel`: the shared model failed to build.
//!
//! ### Construction time ([`ModelError`])
//! Invalid universes, membership parameters, duplicate or undefined labels,
//! malformed rules and invalid engine configuration. These are fatal at
//! startup and never produced per call.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use airguard_core::{AssessmentError, Model, Readings};
//!
//! fn report(model: &Model, readings: &Readings) {
//!     match model.assess(readings) {
//!         Ok(assessment) if assessment.degenerate => {
//!             // No rule matched these conditions - index is a fallback
//!         }
//!         Ok(assessment) => {
//!             // publish(assessment.label(), assessment.index);
//!         }
//!         Err(AssessmentError::InvalidInput { .. }) => {
//!             // Sensor produced an impossible value
//!             // mark_sensor_faulty();
//!         }
//!         Err(_) => {
//!             // Model or policy failure - log and investigate
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::rules::InputVariable;

/// Result type for evaluation operations
pub type AssessmentResult<T> = Result<T, AssessmentError>;

/// Result type for model construction
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while assessing a set of readings
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AssessmentError {
    /// Reading violates the input preconditions
    #[error("Invalid {reading} reading {value}: {reason}")]
    InvalidInput {
        /// Which input was rejected
        reading: InputVariable,
        /// The offending value
        value: f64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// No rule fired, so the aggregated output set is identically zero
    #[error("No rule fired; aggregated output is empty (fallback {fallback})")]
    DegenerateAggregate {
        /// The fallback index the default policy would have reported
        fallback: f64,
    },

    /// The model used for the assessment could not be built
    #[error("Malformed model: {0}")]
    MalformedModel(ModelError),
}

impl From<ModelError> for AssessmentError {
    fn from(err: ModelError) -> Self {
        Self::MalformedModel(err)
    }
}

/// Errors raised while building a model
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Universe bounds or resolution are unusable
    #[error("Invalid universe [{min}, {max}] with {resolution} samples: {reason}")]
    InvalidUniverse {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
        /// Requested sample count
        resolution: usize,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Membership function parameters break their invariants
    #[error("Invalid membership function {variable}.{label}: {reason}")]
    InvalidMembership {
        /// Variable owning the set
        variable: &'static str,
        /// Label of the set
        label: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The same label is defined twice within a variable
    #[error("Duplicate label {variable}.{label}")]
    DuplicateLabel {
        /// Variable owning the set
        variable: &'static str,
        /// Repeated label
        label: &'static str,
    },

    /// A rule references a label its variable does not define
    #[error("Rule {rule} references undefined label {variable}.{label}")]
    UndefinedLabel {
        /// Position of the rule in the rule base
        rule: usize,
        /// Variable referenced
        variable: &'static str,
        /// Label referenced
        label: &'static str,
    },

    /// A rule has no antecedent clauses
    #[error("Rule has no antecedent clauses")]
    EmptyAntecedents,

    /// A rule has more antecedent clauses than the fixed capacity
    #[error("Rule has more than {max} antecedent clauses")]
    TooManyAntecedents {
        /// Maximum number of clauses per rule
        max: usize,
    },

    /// Rule weight is not a finite value in [0, 1]
    #[error("Rule weight {weight} outside [0, 1]")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// A fixed-capacity table overflowed
    #[error("Capacity exceeded for {what}: maximum {max}")]
    CapacityExceeded {
        /// Which table overflowed
        what: &'static str,
        /// Its capacity
        max: usize,
    },

    /// A required variable was not supplied to the model builder
    #[error("Missing linguistic variable {variable}")]
    MissingVariable {
        /// Name of the variable
        variable: &'static str,
    },

    /// Engine configuration is unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AssessmentError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput { reading, value, reason } =>
                defmt::write!(fmt, "Invalid {} reading {}: {}", reading.name(), value, reason),
            Self::DegenerateAggregate { fallback } =>
                defmt::write!(fmt, "No rule fired (fallback {})", fallback),
            Self::MalformedModel(err) =>
                defmt::write!(fmt, "Malformed model: {}", err),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModelError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidUniverse { min, max, resolution, reason } =>
                defmt::write!(fmt, "Universe [{}, {}]x{}: {}", min, max, resolution, reason),
            Self::InvalidMembership { variable, label, reason } =>
                defmt::write!(fmt, "Membership {}.{}: {}", variable, label, reason),
            Self::DuplicateLabel { variable, label } =>
                defmt::write!(fmt, "Duplicate label {}.{}", variable, label),
            Self::UndefinedLabel { rule, variable, label } =>
                defmt::write!(fmt, "Rule {} uses undefined {}.{}", rule, variable, label),
            Self::EmptyAntecedents =>
                defmt::write!(fmt, "Rule without antecedents"),
            Self::TooManyAntecedents { max } =>
                defmt::write!(fmt, "Rule exceeds {} antecedents", max),
            Self::InvalidWeight { weight } =>
                defmt::write!(fmt, "Rule weight {} outside [0, 1]", weight),
            Self::CapacityExceeded { what, max } =>
                defmt::write!(fmt, "{} exceeds capacity {}", what, max),
            Self::MissingVariable { variable } =>
                defmt::write!(fmt, "Missing variable {}", variable),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid configuration: {}", reason),
        }
    }
}
