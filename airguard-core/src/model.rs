//! The air-quality model
//!
//! A [`Model`] holds the four input variables, the quality output variable,
//! the rule base and the engine configuration. It is immutable once built
//! and has no per-call state, so one instance can serve any number of
//! concurrent readers by shared reference.
//!
//! ## Building
//!
//! - [`Model::standard`] builds the fixed 15-rule air-quality model
//! - [`ModelBuilder`] assembles custom models from the same parts
//!
//! Construction validates everything up front: membership parameters,
//! duplicate labels, labels referenced by rules but not defined by their
//! variable, and the configuration. A model that builds cannot fail at
//! evaluation time except on invalid readings or, under
//! [`DegeneratePolicy::Reject`], an empty aggregate.
//!
//! ## Shared Instance
//!
//! With the `std` feature, [`shared_model`] returns a process-wide standard
//! model built exactly once on first use, and [`assess`] evaluates against
//! it. Prefer building a model at startup and passing `&Model` around;
//! the shared instance exists for callers that only have four numbers.

use heapless::Vec;

use crate::{
    assessment::QualityAssessment,
    config::{DegeneratePolicy, EngineConfig, InputPolicy},
    constants::{
        capacity::MAX_TERMS,
        universes::{
            HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, HUMIDITY_RESOLUTION, PARTICULATE_MAX_UG_M3,
            PARTICULATE_MIN_UG_M3, PARTICULATE_RESOLUTION, QUALITY_MAX, QUALITY_MIN,
            TEMPERATURE_MAX_C, TEMPERATURE_MIN_C, TEMPERATURE_RESOLUTION, WIND_MAX_M_S,
            WIND_MIN_M_S, WIND_RESOLUTION,
        },
    },
    defuzz::{self, Defuzzified},
    errors::{AssessmentError, AssessmentResult, ModelError, ModelResult},
    inference::{Inference, InferenceEngine},
    membership::MembershipFunction,
    readings::Readings,
    rules::{Antecedent, InputVariable, Rule, RuleBase},
    terms::{Humidity, Particulate, QualityBand, Temperature, Wind},
    traits::Term,
    universe::Universe,
    variable::LinguisticVariable,
};

// ===== STANDARD MODEL DATA =====

const PARTICULATE_SETS: [(Particulate, MembershipFunction); 5] = [
    (Particulate::VeryLow, MembershipFunction::trapezoid(0.0, 0.0, 5.0, 12.0)),
    (Particulate::Low, MembershipFunction::gaussian(20.0, 6.0)),
    (Particulate::Moderate, MembershipFunction::gaussian(35.0, 8.0)),
    (Particulate::High, MembershipFunction::gaussian(60.0, 12.0)),
    (Particulate::VeryHigh, MembershipFunction::trapezoid(80.0, 100.0, 200.0, 200.0)),
];

const WIND_SETS: [(Wind, MembershipFunction); 4] = [
    (Wind::Calm, MembershipFunction::trapezoid(0.0, 0.0, 0.6, 1.2)),
    (Wind::Breeze, MembershipFunction::gaussian(2.0, 0.8)),
    (Wind::Windy, MembershipFunction::gaussian(4.0, 1.2)),
    (Wind::Gusty, MembershipFunction::trapezoid(5.0, 6.5, 18.0, 18.0)),
];

const TEMPERATURE_SETS: [(Temperature, MembershipFunction); 5] = [
    (Temperature::Freezing, MembershipFunction::trapezoid(-20.0, -20.0, -5.0, 2.0)),
    (Temperature::Cold, MembershipFunction::gaussian(5.0, 4.0)),
    (Temperature::Mild, MembershipFunction::gaussian(18.0, 5.0)),
    (Temperature::Warm, MembershipFunction::gaussian(24.0, 4.0)),
    (Temperature::Hot, MembershipFunction::trapezoid(28.0, 32.0, 40.0, 40.0)),
];

const HUMIDITY_SETS: [(Humidity, MembershipFunction); 5] = [
    (Humidity::VeryDry, MembershipFunction::trapezoid(0.0, 0.0, 20.0, 35.0)),
    (Humidity::Dry, MembershipFunction::gaussian(40.0, 10.0)),
    (Humidity::Comfortable, MembershipFunction::gaussian(50.0, 8.0)),
    (Humidity::Humid, MembershipFunction::gaussian(70.0, 8.0)),
    (Humidity::Saturated, MembershipFunction::trapezoid(80.0, 90.0, 100.0, 100.0)),
];

const QUALITY_SETS: [(QualityBand, MembershipFunction); 8] = [
    (QualityBand::Alarming, MembershipFunction::trapezoid(0.0, 0.0, 8.0, 14.0)),
    (QualityBand::VeryPoor, MembershipFunction::trapezoid(12.0, 18.0, 24.0, 30.0)),
    (QualityBand::Poor, MembershipFunction::trapezoid(26.0, 32.0, 40.0, 48.0)),
    (QualityBand::Fair, MembershipFunction::trapezoid(44.0, 50.0, 56.0, 62.0)),
    (QualityBand::Moderate, MembershipFunction::trapezoid(58.0, 64.0, 70.0, 76.0)),
    (QualityBand::Good, MembershipFunction::trapezoid(72.0, 78.0, 84.0, 90.0)),
    (QualityBand::VeryGood, MembershipFunction::trapezoid(88.0, 92.0, 96.0, 99.0)),
    (QualityBand::Exceptional, MembershipFunction::trapezoid(97.0, 99.0, 100.0, 100.0)),
];

const STANDARD_RULES: [(&[Antecedent], QualityBand); 15] = [
    (&[Antecedent::Particulate(Particulate::VeryHigh)], QualityBand::Alarming),
    (
        &[Antecedent::Particulate(Particulate::High), Antecedent::Humidity(Humidity::Saturated)],
        QualityBand::VeryPoor,
    ),
    (
        &[Antecedent::Particulate(Particulate::High), Antecedent::Wind(Wind::Gusty)],
        QualityBand::Poor,
    ),
    (
        &[Antecedent::Particulate(Particulate::Moderate), Antecedent::Wind(Wind::Calm)],
        QualityBand::Poor,
    ),
    (
        &[Antecedent::Particulate(Particulate::Moderate), Antecedent::Wind(Wind::Windy)],
        QualityBand::Moderate,
    ),
    (
        &[Antecedent::Particulate(Particulate::Moderate), Antecedent::Humidity(Humidity::Humid)],
        QualityBand::Fair,
    ),
    (
        &[Antecedent::Particulate(Particulate::Low), Antecedent::Wind(Wind::Windy)],
        QualityBand::Good,
    ),
    (
        &[
            Antecedent::Particulate(Particulate::Low),
            Antecedent::Humidity(Humidity::Comfortable),
            Antecedent::Temperature(Temperature::Mild),
        ],
        QualityBand::VeryGood,
    ),
    (
        &[
            Antecedent::Particulate(Particulate::VeryLow),
            Antecedent::Wind(Wind::Breeze),
            Antecedent::Humidity(Humidity::Comfortable),
        ],
        QualityBand::Exceptional,
    ),
    (
        &[Antecedent::Particulate(Particulate::VeryLow), Antecedent::Temperature(Temperature::Freezing)],
        QualityBand::Good,
    ),
    (
        &[Antecedent::Humidity(Humidity::VeryDry), Antecedent::Temperature(Temperature::Hot)],
        QualityBand::Poor,
    ),
    (
        &[Antecedent::Humidity(Humidity::Humid), Antecedent::Temperature(Temperature::Warm)],
        QualityBand::Moderate,
    ),
    (
        &[
            Antecedent::Humidity(Humidity::Dry),
            Antecedent::Temperature(Temperature::Mild),
            Antecedent::Particulate(Particulate::Moderate),
        ],
        QualityBand::Fair,
    ),
    (
        &[Antecedent::Particulate(Particulate::Low), Antecedent::Temperature(Temperature::Warm)],
        QualityBand::Good,
    ),
    (
        &[Antecedent::Particulate(Particulate::VeryLow), Antecedent::Wind(Wind::Gusty)],
        QualityBand::VeryGood,
    ),
];

/// Degrees of every label of one input, keyed by label name
pub type LabelDegrees = Vec<(&'static str, f64), MAX_TERMS>;

/// Immutable fuzzy model: variables, rules and configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    particulate: LinguisticVariable<Particulate>,
    wind: LinguisticVariable<Wind>,
    temperature: LinguisticVariable<Temperature>,
    humidity: LinguisticVariable<Humidity>,
    output: LinguisticVariable<QualityBand>,
    rules: RuleBase,
    config: EngineConfig,
}

impl Model {
    /// Start a custom model
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    /// The standard air-quality model with default configuration
    pub fn standard() -> ModelResult<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// The standard air-quality model with a custom configuration
    pub fn with_config(config: EngineConfig) -> ModelResult<Self> {
        // The output universe is sized from the config
        config.validate()?;

        let mut rules = RuleBase::new();
        for (antecedents, consequent) in STANDARD_RULES.iter() {
            rules.push(Rule::new(antecedents, *consequent)?)?;
        }

        let model = ModelBuilder::new()
            .particulate(LinguisticVariable::new(
                Universe::new(PARTICULATE_MIN_UG_M3, PARTICULATE_MAX_UG_M3, PARTICULATE_RESOLUTION)?,
                &PARTICULATE_SETS,
            )?)
            .wind(LinguisticVariable::new(
                Universe::new(WIND_MIN_M_S, WIND_MAX_M_S, WIND_RESOLUTION)?,
                &WIND_SETS,
            )?)
            .temperature(LinguisticVariable::new(
                Universe::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C, TEMPERATURE_RESOLUTION)?,
                &TEMPERATURE_SETS,
            )?)
            .humidity(LinguisticVariable::new(
                Universe::new(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, HUMIDITY_RESOLUTION)?,
                &HUMIDITY_SETS,
            )?)
            .output(LinguisticVariable::new(
                Universe::new(QUALITY_MIN, QUALITY_MAX, config.quality_resolution)?,
                &QUALITY_SETS,
            )?)
            .rules(rules)
            .config(config)
            .build()?;

        Ok(model)
    }

    /// Particulate input variable
    pub fn particulate(&self) -> &LinguisticVariable<Particulate> {
        &self.particulate
    }

    /// Wind input variable
    pub fn wind(&self) -> &LinguisticVariable<Wind> {
        &self.wind
    }

    /// Temperature input variable
    pub fn temperature(&self) -> &LinguisticVariable<Temperature> {
        &self.temperature
    }

    /// Humidity input variable
    pub fn humidity(&self) -> &LinguisticVariable<Humidity> {
        &self.humidity
    }

    /// Quality output variable
    pub fn output(&self) -> &LinguisticVariable<QualityBand> {
        &self.output
    }

    /// Rule base
    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Universe of one input
    pub fn input_universe(&self, variable: InputVariable) -> &Universe {
        match variable {
            InputVariable::Particulate => self.particulate.universe(),
            InputVariable::Wind => self.wind.universe(),
            InputVariable::Temperature => self.temperature.universe(),
            InputVariable::Humidity => self.humidity.universe(),
        }
    }

    /// Inputs of `readings` lying outside their universe
    ///
    /// Non-finite values are reported too. The input policy decides what
    /// happens to them; this only lets callers tell the user.
    pub fn outside_universe(&self, readings: &Readings) -> Vec<InputVariable, 4> {
        InputVariable::ALL
            .iter()
            .copied()
            .filter(|&variable| !self.input_universe(variable).contains(readings.get(variable)))
            .collect()
    }

    /// Degree to which `readings` satisfy one clause
    pub fn clause_degree(&self, clause: &Antecedent, readings: &Readings) -> f64 {
        // Labels are checked against their variable at build time
        let degree = match *clause {
            Antecedent::Particulate(label) => self.particulate.degree(label, readings.particulate),
            Antecedent::Wind(label) => self.wind.degree(label, readings.wind),
            Antecedent::Temperature(label) => self.temperature.degree(label, readings.temperature),
            Antecedent::Humidity(label) => self.humidity.degree(label, readings.humidity),
        };
        degree.unwrap_or(0.0)
    }

    /// Degree of `x` in every label of `variable`
    ///
    /// The input policy applies: under [`InputPolicy::ClampToUniverse`] the
    /// value is clamped first.
    pub fn fuzzify(&self, variable: InputVariable, x: f64) -> LabelDegrees {
        let x = self.apply_policy(variable, x);

        fn named<L: Term>(degrees: Vec<(L, f64), MAX_TERMS>) -> LabelDegrees {
            degrees.into_iter().map(|(label, mu)| (label.name(), mu)).collect()
        }

        match variable {
            InputVariable::Particulate => named(self.particulate.fuzzify(x)),
            InputVariable::Wind => named(self.wind.fuzzify(x)),
            InputVariable::Temperature => named(self.temperature.fuzzify(x)),
            InputVariable::Humidity => named(self.humidity.fuzzify(x)),
        }
    }

    /// Engine over this model
    pub fn engine(&self) -> InferenceEngine<'_> {
        InferenceEngine::new(self)
    }

    /// Validate `readings`, apply the input policy and run the rule base
    pub fn infer(&self, readings: &Readings) -> AssessmentResult<Inference> {
        readings.validate()?;
        let prepared = self.prepare(readings);
        Ok(self.engine().run(&prepared))
    }

    /// Full assessment: inference, centroid, band and rounding
    pub fn assess(&self, readings: &Readings) -> AssessmentResult<QualityAssessment> {
        let inference = self.infer(readings)?;
        let crisp = defuzz::centroid(&inference.aggregate);

        if let Defuzzified::Fallback(fallback) = crisp {
            log_warn!(
                "No rule fired for {:?}; reporting fallback index {}",
                readings,
                fallback
            );
            if self.config.degenerate_policy == DegeneratePolicy::Reject {
                return Err(AssessmentError::DegenerateAggregate { fallback });
            }
        }

        Ok(QualityAssessment::new(crisp.value(), crisp.is_fallback()))
    }

    fn prepare(&self, readings: &Readings) -> Readings {
        InputVariable::ALL.iter().fold(*readings, |prepared, &variable| {
            prepared.with(variable, self.apply_policy(variable, readings.get(variable)))
        })
    }

    fn apply_policy(&self, variable: InputVariable, x: f64) -> f64 {
        match self.config.input_policy {
            InputPolicy::Extrapolate => x,
            InputPolicy::ClampToUniverse => {
                let clamped = self.input_universe(variable).clamp(x);
                if clamped != x {
                    log_warn!("Clamped {} reading {} to {}", variable, x, clamped);
                }
                clamped
            }
        }
    }
}

/// Assembles a [`Model`] from its parts
///
/// Every part is required except the configuration. The output universe is
/// resampled to the configuration's `quality_resolution`.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    particulate: Option<LinguisticVariable<Particulate>>,
    wind: Option<LinguisticVariable<Wind>>,
    temperature: Option<LinguisticVariable<Temperature>>,
    humidity: Option<LinguisticVariable<Humidity>>,
    output: Option<LinguisticVariable<QualityBand>>,
    rules: RuleBase,
    config: EngineConfig,
    error: Option<ModelError>,
}

impl ModelBuilder {
    /// Empty builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particulate input
    pub fn particulate(mut self, variable: LinguisticVariable<Particulate>) -> Self {
        self.particulate = Some(variable);
        self
    }

    /// Set the wind input
    pub fn wind(mut self, variable: LinguisticVariable<Wind>) -> Self {
        self.wind = Some(variable);
        self
    }

    /// Set the temperature input
    pub fn temperature(mut self, variable: LinguisticVariable<Temperature>) -> Self {
        self.temperature = Some(variable);
        self
    }

    /// Set the humidity input
    pub fn humidity(mut self, variable: LinguisticVariable<Humidity>) -> Self {
        self.humidity = Some(variable);
        self
    }

    /// Set the quality output
    pub fn output(mut self, variable: LinguisticVariable<QualityBand>) -> Self {
        self.output = Some(variable);
        self
    }

    /// Append one rule
    pub fn rule(mut self, rule: Rule) -> Self {
        if let Err(err) = self.rules.push(rule) {
            self.error.get_or_insert(err);
        }
        self
    }

    /// Replace the whole rule base
    pub fn rules(mut self, rules: RuleBase) -> Self {
        self.rules = rules;
        self
    }

    /// Set the engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and build
    pub fn build(self) -> ModelResult<Model> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.config.validate()?;

        let particulate = required(self.particulate)?;
        let wind = required(self.wind)?;
        let temperature = required(self.temperature)?;
        let humidity = required(self.humidity)?;
        let output = required(self.output)?;

        let output = if output.universe().resolution() == self.config.quality_resolution {
            output
        } else {
            let universe = output.universe().with_resolution(self.config.quality_resolution)?;
            LinguisticVariable::new(universe, output.sets())?
        };

        let model = Model {
            particulate,
            wind,
            temperature,
            humidity,
            output,
            rules: self.rules,
            config: self.config,
        };
        check_rules(&model)?;

        if model.rules.is_empty() {
            log_warn!("Model has no rules; every assessment will be degenerate");
        }
        log_debug!(
            "Built model: {} rules, output resolution {}, {:?}",
            model.rules.len(),
            model.output.universe().resolution(),
            model.config
        );

        Ok(model)
    }
}

fn required<L: Term>(variable: Option<LinguisticVariable<L>>) -> ModelResult<LinguisticVariable<L>> {
    variable.ok_or(ModelError::MissingVariable { variable: L::VARIABLE })
}

/// Every label a rule mentions must be defined by its variable
fn check_rules(model: &Model) -> ModelResult<()> {
    for (index, rule) in model.rules.iter().enumerate() {
        for clause in rule.antecedents() {
            let defined = match *clause {
                Antecedent::Particulate(label) => model.particulate.defines(label),
                Antecedent::Wind(label) => model.wind.defines(label),
                Antecedent::Temperature(label) => model.temperature.defines(label),
                Antecedent::Humidity(label) => model.humidity.defines(label),
            };
            if !defined {
                return Err(ModelError::UndefinedLabel {
                    rule: index,
                    variable: clause.variable().name(),
                    label: clause.label(),
                });
            }
        }

        if !model.output.defines(rule.consequent()) {
            return Err(ModelError::UndefinedLabel {
                rule: index,
                variable: QualityBand::VARIABLE,
                label: rule.consequent().name(),
            });
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
lazy_static::lazy_static! {
    /// Standard model, built on first use
    static ref STANDARD_MODEL: Result<Model, ModelError> = Model::standard();
}

/// Process-wide standard model
///
/// Built exactly once, on the first call from any thread; every caller
/// observes the same instance (or the same construction error).
#[cfg(feature = "std")]
pub fn shared_model() -> Result<&'static Model, ModelError> {
    STANDARD_MODEL.as_ref().map_err(|err| *err)
}

/// Assess four readings against the shared standard model
///
/// Fails with [`AssessmentError::InvalidInput`] on negative particulate,
/// wind or humidity, or any non-finite reading.
///
/// ```
/// let assessment = airguard_core::assess(0.0, 1.5, 18.0, 50.0)?;
/// assert_eq!(assessment.label(), "very good");
/// # Ok::<(), airguard_core::AssessmentError>(())
/// ```
#[cfg(feature = "std")]
pub fn assess(
    particulate: f64,
    wind: f64,
    temperature: f64,
    humidity: f64,
) -> AssessmentResult<QualityAssessment> {
    shared_model()?.assess(&Readings::new(particulate, wind, temperature, humidity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_model_shape() {
        let model = Model::standard().unwrap();

        assert_eq!(model.rules().len(), 15);
        assert_eq!(model.particulate().sets().len(), 5);
        assert_eq!(model.wind().sets().len(), 4);
        assert_eq!(model.temperature().sets().len(), 5);
        assert_eq!(model.humidity().sets().len(), 5);
        assert_eq!(model.output().sets().len(), 8);
        assert_eq!(model.output().universe().resolution(), 101);
        assert_eq!(model.input_universe(InputVariable::Wind).max(), 18.0);
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(Model::standard().unwrap(), Model::standard().unwrap());
    }

    #[test]
    fn fuzzify_by_label_name() {
        let model = Model::standard().unwrap();
        let degrees = model.fuzzify(InputVariable::Particulate, 0.0);

        assert_eq!(degrees.len(), 5);
        assert_eq!(degrees[0], ("very_low", 1.0));
        assert_eq!(degrees[4], ("very_high", 0.0));
        let low = degrees.iter().find(|(name, _)| *name == "low").unwrap().1;
        assert!((low - libm::exp(-400.0 / 72.0)).abs() < 1e-15);
    }

    #[test]
    fn fuzzify_does_not_clamp_by_default() {
        let model = Model::standard().unwrap();
        let degrees = model.fuzzify(InputVariable::Particulate, 250.0);
        assert_eq!(degrees[4], ("very_high", 0.0));

        let clamping = Model::with_config(EngineConfig {
            input_policy: InputPolicy::ClampToUniverse,
            ..EngineConfig::default()
        })
        .unwrap();
        let degrees = clamping.fuzzify(InputVariable::Particulate, 250.0);
        assert_eq!(degrees[4], ("very_high", 1.0));
    }

    #[test]
    fn invalid_input_is_rejected_before_inference() {
        let model = Model::standard().unwrap();
        assert!(matches!(
            model.assess(&Readings::new(-1.0, 0.0, 20.0, 50.0)),
            Err(AssessmentError::InvalidInput { reading: InputVariable::Particulate, .. })
        ));
        assert!(model.infer(&Readings::new(-1.0, 0.0, 20.0, 50.0)).is_err());
    }

    #[test]
    fn degenerate_fallback_and_reject() {
        let readings = Readings::new(10_000.0, 1.5, 10_000.0, 50.0);

        let fallback = Model::standard().unwrap().assess(&readings).unwrap();
        assert!(fallback.degenerate);
        assert_eq!(fallback.raw_index, 50.0);
        assert_eq!(fallback.band, QualityBand::Poor);

        let rejecting = Model::with_config(EngineConfig {
            degenerate_policy: DegeneratePolicy::Reject,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(
            rejecting.assess(&readings),
            Err(AssessmentError::DegenerateAggregate { fallback: 50.0 })
        );
    }

    #[test]
    fn clamping_policy_changes_out_of_range_result() {
        let readings = Readings::new(10_000.0, 1.5, 10_000.0, 50.0);
        let clamping = Model::with_config(EngineConfig {
            input_policy: InputPolicy::ClampToUniverse,
            ..EngineConfig::default()
        })
        .unwrap();

        let assessment = clamping.assess(&readings).unwrap();
        assert!(!assessment.degenerate);
        assert!((assessment.raw_index - 5.407).abs() < 1e-2, "got {}", assessment.raw_index);
        assert_eq!(assessment.band, QualityBand::Alarming);
    }

    #[test]
    fn builder_requires_every_variable() {
        let base = Model::standard().unwrap();
        let result = Model::builder()
            .particulate(base.particulate().clone())
            .wind(base.wind().clone())
            .humidity(base.humidity().clone())
            .output(base.output().clone())
            .build();

        assert_eq!(result, Err(ModelError::MissingVariable { variable: "temperature" }));
    }

    #[test]
    fn builder_rejects_rule_with_undefined_label() {
        let base = Model::standard().unwrap();
        let wind = LinguisticVariable::new(
            *base.wind().universe(),
            &[(Wind::Calm, MembershipFunction::trapezoid(0.0, 0.0, 0.6, 1.2))],
        )
        .unwrap();

        let result = Model::builder()
            .particulate(base.particulate().clone())
            .wind(wind)
            .temperature(base.temperature().clone())
            .humidity(base.humidity().clone())
            .output(base.output().clone())
            .rules(base.rules().clone())
            .build();

        // Rule 3 (high PM AND gusty wind) is the first to need a missing label
        assert_eq!(
            result,
            Err(ModelError::UndefinedLabel { rule: 2, variable: "wind", label: "gusty" })
        );
    }

    #[test]
    fn builder_rejects_bad_config() {
        let result = Model::with_config(EngineConfig {
            quality_resolution: 1,
            ..EngineConfig::default()
        });
        assert!(matches!(result, Err(ModelError::InvalidConfig { .. })));
    }

    #[test]
    fn oversized_resolution_is_a_config_error() {
        let result = Model::with_config(EngineConfig {
            quality_resolution: 5000,
            ..EngineConfig::default()
        });
        assert_eq!(
            result.map(|_| ()),
            Err(ModelError::InvalidConfig {
                reason: "quality_resolution exceeds the sample capacity",
            })
        );
    }

    #[test]
    fn reports_readings_outside_their_universe() {
        let model = Model::standard().unwrap();

        assert!(model.outside_universe(&Readings::new(0.0, 1.5, 18.0, 50.0)).is_empty());
        assert!(model.outside_universe(&Readings::new(200.0, 18.0, 40.0, 100.0)).is_empty());

        let outside = model.outside_universe(&Readings::new(250.0, 1.5, -30.0, 50.0));
        assert_eq!(&outside[..], &[InputVariable::Particulate, InputVariable::Temperature]);
    }

    #[test]
    fn builder_resamples_output() {
        let model = Model::with_config(EngineConfig {
            quality_resolution: 201,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(model.output().universe().resolution(), 201);

        let assessment = model.assess(&Readings::new(0.0, 1.5, 18.0, 50.0)).unwrap();
        assert!((assessment.raw_index - 89.94).abs() < 1e-2, "got {}", assessment.raw_index);
    }

    #[cfg(feature = "std")]
    #[test]
    fn shared_model_is_built_once() {
        let first = shared_model().unwrap();
        let second = shared_model().unwrap();
        assert!(core::ptr::eq(first, second));
    }

    #[cfg(feature = "std")]
    #[test]
    fn free_assess_matches_model() {
        let model = Model::standard().unwrap();
        let readings = Readings::new(35.0, 0.3, 18.0, 70.0);
        assert_eq!(assess(35.0, 0.3, 18.0, 70.0), model.assess(&readings));
    }
}
