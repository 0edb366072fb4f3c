//! Core traits for the inference engine
//!
//! These traits define what a linguistic label is and which numbers are
//! usable as readings. Keep them simple - embedded targets don't need
//! complex abstractions.

use core::fmt::Debug;

/// A label of a linguistic variable (e.g. `Wind::Breeze`)
///
/// Each variable gets its own closed enumeration, so a rule can only name
/// labels that exist. Whether the variable actually defines a membership
/// function for every label it is used with is checked when the model is
/// built.
pub trait Term: Copy + Eq + Debug + 'static {
    /// Name of the variable these labels belong to
    const VARIABLE: &'static str;

    /// Every label, in ascending order along the variable's universe
    const ALL: &'static [Self];

    /// Snake_case name of the label
    fn name(&self) -> &'static str;

    /// Look a label up by its snake_case name (case-insensitive)
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|term| term.name().eq_ignore_ascii_case(name))
    }
}

/// Trait for values that can be used as readings
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
