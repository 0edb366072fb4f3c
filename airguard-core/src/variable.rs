//! Linguistic variables
//!
//! A [`LinguisticVariable`] couples a [`Universe`] with one membership
//! function per label. The table is fixed-capacity and immutable once built.

use heapless::Vec;

use crate::{
    constants::capacity::MAX_TERMS,
    errors::{ModelError, ModelResult},
    membership::MembershipFunction,
    traits::Term,
    universe::Universe,
};

/// Degrees of every label of a variable, in definition order
pub type Memberships<L> = Vec<(L, f64), MAX_TERMS>;

/// Named quantity with a universe and a label table
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable<L: Term> {
    universe: Universe,
    sets: Vec<(L, MembershipFunction), MAX_TERMS>,
}

impl<L: Term> LinguisticVariable<L> {
    /// Build a variable from its label table
    ///
    /// Every membership function is validated and every label may appear at
    /// most once. Labels of `L` that are not listed are simply undefined;
    /// rules referencing them are rejected by the model builder.
    pub fn new(universe: Universe, sets: &[(L, MembershipFunction)]) -> ModelResult<Self> {
        let mut table: Vec<(L, MembershipFunction), MAX_TERMS> = Vec::new();

        for &(label, mf) in sets {
            mf.validate().map_err(|reason| ModelError::InvalidMembership {
                variable: L::VARIABLE,
                label: label.name(),
                reason,
            })?;

            if table.iter().any(|(existing, _)| *existing == label) {
                return Err(ModelError::DuplicateLabel {
                    variable: L::VARIABLE,
                    label: label.name(),
                });
            }

            table.push((label, mf)).map_err(|_| ModelError::CapacityExceeded {
                what: "labels per variable",
                max: MAX_TERMS,
            })?;
        }

        Ok(Self { universe, sets: table })
    }

    /// Name of the variable
    pub fn name(&self) -> &'static str {
        L::VARIABLE
    }

    /// Domain of the variable
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Membership function of `label`, if defined
    pub fn membership(&self, label: L) -> Option<&MembershipFunction> {
        self.sets
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, mf)| mf)
    }

    /// Whether `label` has a membership function
    pub fn defines(&self, label: L) -> bool {
        self.membership(label).is_some()
    }

    /// Degree of `x` in `label`, `None` if the label is undefined
    pub fn degree(&self, label: L, x: f64) -> Option<f64> {
        self.membership(label).map(|mf| mf.degree(x))
    }

    /// Degree of `x` in every defined label
    pub fn fuzzify(&self, x: f64) -> Memberships<L> {
        self.sets
            .iter()
            .map(|(label, mf)| (*label, mf.degree(x)))
            .collect()
    }

    /// Defined labels, in definition order
    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.sets.iter().map(|(label, _)| *label)
    }

    /// Defined label/function pairs, in definition order
    pub fn sets(&self) -> &[(L, MembershipFunction)] {
        &self.sets
    }
}
