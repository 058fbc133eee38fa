// Risk Engine - validates inputs and assembles the actual vs optimal comparison
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{ConfidenceInterval, PatientInputs, RiskResult};
use crate::risk::{
    validate_inputs, CoefficientRegistry, DemographicGroup, ExponentBase, LifetimeRiskClassifier,
    PooledCohortEquation, RiskError,
};

// Ideal reference measurements for the optimal-risk comparison.
pub const OPTIMAL_TOTAL_CHOLESTEROL: f64 = 170.0;
pub const OPTIMAL_HDL: f64 = 50.0;
pub const OPTIMAL_SYSTOLIC_BP: f64 = 110.0;

/// Configuration for the risk engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskEngineConfig {
    pub exponent_base: ExponentBase,
}

impl Default for RiskEngineConfig {
    fn default() -> Self {
        Self {
            exponent_base: ExponentBase::default(),
        }
    }
}

/// Orchestrates validation, coefficient lookup and both risk calculators.
///
/// Stateless: every evaluation is independent and referentially
/// transparent, and a shared engine may be used from any number of threads
/// without synchronization.
pub struct RiskEngine {
    equation: PooledCohortEquation,
    classifier: LifetimeRiskClassifier,
    config: RiskEngineConfig,
}

impl RiskEngine {
    /// Create an engine with the default (legacy-compatible) configuration.
    pub fn new() -> Self {
        Self::with_config(RiskEngineConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: RiskEngineConfig) -> Self {
        Self {
            equation: PooledCohortEquation::with_exponent_base(config.exponent_base),
            classifier: LifetimeRiskClassifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &RiskEngineConfig {
        &self.config
    }

    /// 10-year risk probability in [0, 1] for validated inputs.
    pub fn ten_year_risk(&self, inputs: &PatientInputs) -> Result<f64, RiskError> {
        validate_inputs(inputs)?;
        let group = DemographicGroup::new(inputs.race, inputs.sex);
        let coeff = CoefficientRegistry::lookup(group)?;
        self.equation.compute(coeff, inputs)
    }

    /// Lifetime-risk confidence interval for validated inputs.
    pub fn lifetime_risk(&self, inputs: &PatientInputs) -> Result<ConfidenceInterval, RiskError> {
        validate_inputs(inputs)?;
        Ok(self.classifier.compute(inputs))
    }

    /// Run the full evaluation: actual and optimal-reference 10-year and
    /// lifetime risks, rounded to one decimal place of a percentage.
    pub fn evaluate(&self, inputs: &PatientInputs) -> Result<RiskResult, RiskError> {
        validate_inputs(inputs)?;

        let group = DemographicGroup::new(inputs.race, inputs.sex);
        let coeff = CoefficientRegistry::lookup(group)?;

        info!(group = %group, age = inputs.age, "Starting risk evaluation");

        let optimal = Self::optimal_profile(inputs);

        let ten_year = self.equation.compute(coeff, inputs)?;
        let ten_year_optimal = self.equation.compute(coeff, &optimal)?;

        let lifetime = self.classifier.compute(inputs);
        let lifetime_optimal = self.classifier.compute(&optimal);

        let result = RiskResult {
            age: inputs.age,
            ten_year_risk: round_percent(ten_year),
            ten_year_optimal_risk: round_percent(ten_year_optimal),
            lifetime_risk: round_percent(lifetime.point),
            lifetime_optimal_risk: round_percent(lifetime_optimal.point),
            lifetime_interval: lifetime,
            lifetime_optimal_interval: lifetime_optimal,
        };

        info!(
            ten_year_risk = result.ten_year_risk,
            ten_year_optimal_risk = result.ten_year_optimal_risk,
            lifetime_risk = result.lifetime_risk,
            lifetime_optimal_risk = result.lifetime_optimal_risk,
            "Completed risk evaluation"
        );

        Ok(result)
    }

    /// Score a batch of patients. Evaluations are independent; one
    /// patient's failure never aborts the rest.
    pub fn evaluate_many(&self, patients: &[PatientInputs]) -> Vec<Result<RiskResult, RiskError>> {
        patients.iter().map(|inputs| self.evaluate(inputs)).collect()
    }

    /// Same age, sex and race with every modifiable factor at its ideal
    /// value.
    fn optimal_profile(inputs: &PatientInputs) -> PatientInputs {
        PatientInputs {
            total_cholesterol: OPTIMAL_TOTAL_CHOLESTEROL,
            hdl: OPTIMAL_HDL,
            systolic_bp: OPTIMAL_SYSTOLIC_BP,
            on_hypertension_treatment: false,
            diabetic: false,
            smoker: false,
            ..*inputs
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a probability to one decimal place of a percentage.
fn round_percent(value: f64) -> f64 {
    (value * 1000.0).round() / 10.0
}
