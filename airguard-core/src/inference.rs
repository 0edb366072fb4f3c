//! Mamdani Inference
//!
//! ## Algorithm
//!
//! For every rule:
//!
//! 1. **Firing strength**: the antecedent degrees are combined with the
//!    configured t-norm (min by default) and multiplied by the rule weight.
//! 2. **Implication**: the consequent set is clipped at the firing strength,
//!    `implied(xᵢ) = min(strength, μ_consequent(xᵢ))`, at every sample of the
//!    output universe.
//!
//! The implied sets of all rules are then merged by pointwise maximum into
//! a single [`AggregatedSet`], regardless of which band produced them.
//!
//! A rule with zero strength implies the zero set, which is the identity of
//! max-aggregation, so skipping it during aggregation gives the same result
//! as evaluating it. Its activation is still reported.
//!
//! ## Complexity
//!
//! O(rules × output resolution): 15 rules over 101 samples is about 1.5k
//! membership evaluations per assessment.

use heapless::Vec;

use crate::{
    constants::capacity::{MAX_RULES, MAX_UNIVERSE_SAMPLES},
    model::Model,
    readings::Readings,
    rules::{Rule, TNorm},
    terms::QualityBand,
    universe::Universe,
};

/// Firing strength of one rule for one set of readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleActivation {
    /// Position of the rule in the rule base
    pub rule: usize,
    /// Band the rule concludes
    pub consequent: QualityBand,
    /// Weighted firing strength in `[0, 1]`
    pub strength: f64,
}

impl RuleActivation {
    /// Whether the rule contributes to the aggregate
    pub fn fired(&self) -> bool {
        self.strength > 0.0
    }
}

/// Aggregated output fuzzy set, sampled over the output universe
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSet {
    universe: Universe,
    membership: Vec<f64, MAX_UNIVERSE_SAMPLES>,
}

impl AggregatedSet {
    /// Identically zero set over `universe`
    pub fn zero(universe: Universe) -> Self {
        let mut membership = Vec::new();
        // Universe::new caps the resolution at the container capacity
        membership.resize(universe.resolution(), 0.0).ok();
        Self { universe, membership }
    }

    /// Output universe the set is sampled over
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Degrees at each sample point
    pub fn degrees(&self) -> &[f64] {
        &self.membership
    }

    /// `(xᵢ, μ(xᵢ))` pairs in ascending order of `x`
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.membership
            .iter()
            .enumerate()
            .map(move |(i, mu)| (self.universe.sample(i), *mu))
    }

    /// Largest degree in the set
    pub fn height(&self) -> f64 {
        self.membership.iter().fold(0.0, |acc: f64, mu| acc.max(*mu))
    }

    /// Whether the set is identically zero (no rule fired)
    pub fn is_empty(&self) -> bool {
        self.membership.iter().all(|mu| *mu == 0.0)
    }

    fn absorb(&mut self, i: usize, mu: f64) {
        if let Some(slot) = self.membership.get_mut(i) {
            if mu > *slot {
                *slot = mu;
            }
        }
    }
}

/// Result of running the rule base against a set of readings
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// One activation per rule, in rule-base order
    pub activations: Vec<RuleActivation, MAX_RULES>,
    /// Max-aggregated output set
    pub aggregate: AggregatedSet,
}

impl Inference {
    /// Activations of the rules that fired
    pub fn fired(&self) -> impl Iterator<Item = &RuleActivation> + '_ {
        self.activations.iter().filter(|activation| activation.fired())
    }

    /// Strongest activation, first one wins ties
    pub fn dominant(&self) -> Option<&RuleActivation> {
        self.fired().fold(None, |best: Option<&RuleActivation>, activation| match best {
            Some(current) if current.strength >= activation.strength => Some(current),
            _ => Some(activation),
        })
    }
}

/// Evaluates a model's rule base
///
/// Borrows the model; holds no state of its own besides the t-norm.
#[derive(Debug, Clone, Copy)]
pub struct InferenceEngine<'m> {
    model: &'m Model,
    t_norm: TNorm,
}

impl<'m> InferenceEngine<'m> {
    /// Engine using the model's configured t-norm
    pub fn new(model: &'m Model) -> Self {
        Self {
            model,
            t_norm: model.config().t_norm,
        }
    }

    /// Override the t-norm
    pub fn with_t_norm(mut self, t_norm: TNorm) -> Self {
        self.t_norm = t_norm;
        self
    }

    /// T-norm in use
    pub fn t_norm(&self) -> TNorm {
        self.t_norm
    }

    /// Weighted firing strength of a single rule
    pub fn firing_strength(&self, rule: &Rule, readings: &Readings) -> f64 {
        let conjunction = self.t_norm.combine(
            rule.antecedents()
                .iter()
                .map(|clause| self.model.clause_degree(clause, readings)),
        );
        conjunction * rule.weight()
    }

    /// Firing strength of every rule, in rule-base order
    pub fn activations(&self, readings: &Readings) -> Vec<RuleActivation, MAX_RULES> {
        self.model
            .rules()
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleActivation {
                rule: index,
                consequent: rule.consequent(),
                strength: self.firing_strength(rule, readings),
            })
            .collect()
    }

    /// Clip each consequent at its strength and max-aggregate
    pub fn aggregate(&self, activations: &[RuleActivation]) -> AggregatedSet {
        let output = self.model.output();
        let mut aggregate = AggregatedSet::zero(*output.universe());

        for activation in activations.iter().filter(|a| a.fired()) {
            let Some(consequent) = output.membership(activation.consequent) else {
                continue;
            };

            for (i, x) in output.universe().samples().enumerate() {
                aggregate.absorb(i, activation.strength.min(consequent.degree(x)));
            }
        }

        aggregate
    }

    /// Full inference: activations and aggregated output
    ///
    /// `readings` are used as given; validation and input policy are the
    /// caller's concern (see [`Model::infer`]).
    pub fn run(&self, readings: &Readings) -> Inference {
        let activations = self.activations(readings);
        let aggregate = self.aggregate(&activations);
        Inference { activations, aggregate }
    }
}
