//! Rule base
//!
//! A [`Rule`] is an ordered list of antecedent clauses joined by a fixed
//! conjunction, one consequent quality band and a weight. The clauses are
//! typed: each carries the label enumeration of its own variable, so a
//! clause such as "wind IS very_high" cannot be written at all.
//!
//! The conjunction itself is pluggable through [`TNorm`].

use core::fmt;

use heapless::Vec;

use crate::{
    constants::capacity::{MAX_ANTECEDENTS, MAX_RULES},
    errors::{ModelError, ModelResult},
    terms::{Humidity, Particulate, QualityBand, Temperature, Wind},
    traits::Term,
};

/// The four crisp inputs of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputVariable {
    /// PM2.5 concentration (µg/m³)
    Particulate,
    /// Wind speed (m/s)
    Wind,
    /// Air temperature (°C)
    Temperature,
    /// Relative humidity (%)
    Humidity,
}

impl InputVariable {
    /// Every input, in the order of the `assess` arguments
    pub const ALL: [InputVariable; 4] = [
        InputVariable::Particulate,
        InputVariable::Wind,
        InputVariable::Temperature,
        InputVariable::Humidity,
    ];

    /// Variable name, shared with the label enumeration
    pub fn name(&self) -> &'static str {
        match self {
            Self::Particulate => Particulate::VARIABLE,
            Self::Wind => Wind::VARIABLE,
            Self::Temperature => Temperature::VARIABLE,
            Self::Humidity => Humidity::VARIABLE,
        }
    }

    /// Look an input up by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variable| variable.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for InputVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One "variable IS label" clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "variable", content = "label", rename_all = "snake_case"))]
pub enum Antecedent {
    /// Clause on particulate concentration
    Particulate(Particulate),
    /// Clause on wind speed
    Wind(Wind),
    /// Clause on temperature
    Temperature(Temperature),
    /// Clause on humidity
    Humidity(Humidity),
}

impl Antecedent {
    /// Input the clause tests
    pub fn variable(&self) -> InputVariable {
        match self {
            Self::Particulate(_) => InputVariable::Particulate,
            Self::Wind(_) => InputVariable::Wind,
            Self::Temperature(_) => InputVariable::Temperature,
            Self::Humidity(_) => InputVariable::Humidity,
        }
    }

    /// Name of the label the clause tests
    pub fn label(&self) -> &'static str {
        match self {
            Self::Particulate(label) => label.name(),
            Self::Wind(label) => label.name(),
            Self::Temperature(label) => label.name(),
            Self::Humidity(label) => label.name(),
        }
    }
}

impl From<Particulate> for Antecedent {
    fn from(label: Particulate) -> Self {
        Self::Particulate(label)
    }
}

impl From<Wind> for Antecedent {
    fn from(label: Wind) -> Self {
        Self::Wind(label)
    }
}

impl From<Temperature> for Antecedent {
    fn from(label: Temperature) -> Self {
        Self::Temperature(label)
    }
}

impl From<Humidity> for Antecedent {
    fn from(label: Humidity) -> Self {
        Self::Humidity(label)
    }
}

impl fmt::Display for Antecedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IS {}", self.variable(), self.label())
    }
}

/// Conjunction used to combine antecedent degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TNorm {
    /// Minimum (classic Mamdani)
    #[default]
    Min,
    /// Algebraic product
    Product,
}

impl TNorm {
    /// Combine two degrees
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min => a.min(b),
            Self::Product => a * b,
        }
    }

    /// Combine any number of degrees; the empty conjunction is 1
    pub fn combine<I: IntoIterator<Item = f64>>(self, degrees: I) -> f64 {
        degrees.into_iter().fold(1.0, |acc, degree| self.apply(acc, degree))
    }
}

/// IF antecedents THEN quality IS consequent
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedents: Vec<Antecedent, MAX_ANTECEDENTS>,
    consequent: QualityBand,
    weight: f64,
}

impl Rule {
    /// Rule with weight 1
    pub fn new(antecedents: &[Antecedent], consequent: QualityBand) -> ModelResult<Self> {
        if antecedents.is_empty() {
            return Err(ModelError::EmptyAntecedents);
        }

        let antecedents = Vec::from_slice(antecedents)
            .map_err(|_| ModelError::TooManyAntecedents { max: MAX_ANTECEDENTS })?;

        Ok(Self {
            antecedents,
            consequent,
            weight: 1.0,
        })
    }

    /// Replace the weight, which must lie in `[0, 1]`
    pub fn with_weight(mut self, weight: f64) -> ModelResult<Self> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(ModelError::InvalidWeight { weight });
        }
        self.weight = weight;
        Ok(self)
    }

    /// Clauses, in authoring order
    pub fn antecedents(&self) -> &[Antecedent] {
        &self.antecedents
    }

    /// Output band the rule concludes
    pub fn consequent(&self) -> QualityBand {
        self.consequent
    }

    /// Weight multiplied into the firing strength
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;
        for (i, clause) in self.antecedents.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, " THEN {} IS {}", QualityBand::VARIABLE, self.consequent)?;
        if self.weight != 1.0 {
            write!(f, " WITH {}", self.weight)?;
        }
        Ok(())
    }
}

/// Ordered, fixed-capacity list of rules
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleBase {
    rules: Vec<Rule, MAX_RULES>,
}

impl RuleBase {
    /// Empty rule base
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule base holding `rules` in order
    pub fn from_rules<I: IntoIterator<Item = Rule>>(rules: I) -> ModelResult<Self> {
        let mut base = Self::new();
        for rule in rules {
            base.push(rule)?;
        }
        Ok(base)
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) -> ModelResult<()> {
        self.rules.push(rule).map_err(|_| ModelError::CapacityExceeded {
            what: "rules",
            max: MAX_RULES,
        })
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at position `index`
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Rules in order
    pub fn iter(&self) -> core::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = core::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rule_with_default_weight() {
        let rule = Rule::new(
            &[Particulate::VeryLow.into(), Wind::Breeze.into(), Humidity::Comfortable.into()],
            QualityBand::Exceptional,
        )
        .unwrap();

        assert_eq!(rule.antecedents().len(), 3);
        assert_eq!(rule.antecedents()[1].variable(), InputVariable::Wind);
        assert_eq!(rule.antecedents()[1].label(), "breeze");
        assert_eq!(rule.consequent(), QualityBand::Exceptional);
        assert_eq!(rule.weight(), 1.0);
    }

    #[test]
    fn rejects_malformed_rules() {
        assert_eq!(
            Rule::new(&[], QualityBand::Good),
            Err(ModelError::EmptyAntecedents)
        );

        let too_many = [
            Particulate::Low.into(),
            Wind::Calm.into(),
            Temperature::Mild.into(),
            Humidity::Dry.into(),
            Wind::Gusty.into(),
        ];
        assert_eq!(
            Rule::new(&too_many, QualityBand::Good),
            Err(ModelError::TooManyAntecedents { max: MAX_ANTECEDENTS })
        );
    }

    #[test]
    fn weight_must_be_in_unit_interval() {
        let rule = Rule::new(&[Particulate::High.into()], QualityBand::Poor).unwrap();

        assert_eq!(rule.clone().with_weight(0.5).unwrap().weight(), 0.5);
        assert!(rule.clone().with_weight(0.0).is_ok());
        assert!(rule.clone().with_weight(1.5).is_err());
        assert!(rule.clone().with_weight(-0.1).is_err());
        assert!(rule.with_weight(f64::NAN).is_err());
    }

    #[test]
    fn t_norms() {
        assert_eq!(TNorm::Min.apply(0.3, 0.8), 0.3);
        assert!((TNorm::Product.apply(0.5, 0.8) - 0.4).abs() < 1e-12);
        assert_eq!(TNorm::Min.combine([0.9, 0.2, 0.7]), 0.2);
        assert_eq!(TNorm::Product.combine([]), 1.0);
        assert_eq!(TNorm::default(), TNorm::Min);
    }

    #[test]
    fn rule_base_capacity() {
        let mut base = RuleBase::new();
        let rule = Rule::new(&[Particulate::VeryHigh.into()], QualityBand::Alarming).unwrap();

        for _ in 0..MAX_RULES {
            base.push(rule.clone()).unwrap();
        }
        assert_eq!(base.len(), MAX_RULES);
        assert_eq!(
            base.push(rule),
            Err(ModelError::CapacityExceeded { what: "rules", max: MAX_RULES })
        );
    }

    #[test]
    fn input_variable_names() {
        assert_eq!(InputVariable::from_name("Humidity"), Some(InputVariable::Humidity));
        assert_eq!(InputVariable::from_name("pressure"), None);
        assert_eq!(InputVariable::Particulate.name(), "particulate");
    }

    #[cfg(feature = "std")]
    #[test]
    fn rule_display() {
        let rule = Rule::new(&[Humidity::Humid.into(), Temperature::Warm.into()], QualityBand::Moderate)
            .unwrap();
        assert_eq!(
            rule.to_string(),
            "IF humidity IS humid AND temperature IS warm THEN quality IS moderate"
        );
    }
}
