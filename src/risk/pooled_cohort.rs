// Pooled Cohort Equations - continuous 10-year ASCVD risk
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::PatientInputs;
use crate::risk::{CoefficientSet, RiskError, MAX_RISK_PROBABILITY, MIN_RISK_PROBABILITY};

/// Exponentiation base used in place of the mathematical constant e.
/// Kept verbatim so results stay comparable with previously stored ones.
pub const LEGACY_EXPONENT_BASE: f64 = 2.7;

/// Base used to scale the deviation from the cohort mean before raising
/// the baseline survival to that power.
///
/// `Legacy` reproduces the literal 2.7; `NaturalE` is the corrected
/// variant. Results differ subtly between the two, so the choice is
/// explicit and defaults to compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExponentBase {
    Legacy,
    NaturalE,
}

impl ExponentBase {
    pub fn value(self) -> f64 {
        match self {
            ExponentBase::Legacy => LEGACY_EXPONENT_BASE,
            ExponentBase::NaturalE => std::f64::consts::E,
        }
    }
}

impl Default for ExponentBase {
    fn default() -> Self {
        ExponentBase::Legacy
    }
}

/// Sex-specific log-linear survival model for 10-year ASCVD risk.
pub struct PooledCohortEquation {
    exponent_base: f64,
}

impl PooledCohortEquation {
    pub fn new() -> Self {
        Self::with_exponent_base(ExponentBase::default())
    }

    pub fn with_exponent_base(base: ExponentBase) -> Self {
        Self {
            exponent_base: base.value(),
        }
    }

    /// Compute the 10-year risk probability for range-validated inputs.
    ///
    /// Accumulates the weighted natural-log terms, raises the baseline
    /// survival to the scaled deviation from the cohort mean, and clamps
    /// the complement into [0, 1].
    pub fn compute(&self, coeff: &CoefficientSet, inputs: &PatientInputs) -> Result<f64, RiskError> {
        let ln_age = inputs.age.ln();
        let ln_tc = inputs.total_cholesterol.ln();
        let ln_hdl = inputs.hdl.ln();
        let ln_sbp = inputs.systolic_bp.ln();

        let mut sum = 0.0;
        sum += ln_age * coeff.age;
        sum += ln_age.powi(2) * coeff.age_squared;
        sum += ln_tc * coeff.total_cholesterol;
        sum += ln_age * ln_tc * coeff.age_total_cholesterol;
        sum += ln_hdl * coeff.hdl;
        sum += ln_age * ln_hdl * coeff.age_hdl;

        // Treatment status selects exactly one blood-pressure branch.
        if inputs.on_hypertension_treatment {
            sum += ln_sbp * coeff.treated_sbp;
            sum += ln_age * ln_sbp * coeff.age_treated_sbp;
        } else {
            sum += ln_sbp * coeff.untreated_sbp;
            sum += ln_age * ln_sbp * coeff.age_untreated_sbp;
        }

        if inputs.smoker {
            sum += coeff.smoker;
            sum += ln_age * coeff.age_smoker;
        }
        if inputs.diabetic {
            sum += coeff.diabetes;
        }

        let risk = 1.0
            - coeff
                .baseline_survival
                .powf(self.exponent_base.powf(sum - coeff.overall_mean));

        debug!(
            weighted_sum = sum,
            risk = risk,
            "Computed 10-year risk probability"
        );

        if !risk.is_finite() {
            return Err(RiskError::CalculationError {
                message: format!("10-year risk is not finite (weighted sum {sum})"),
            });
        }

        Ok(risk.clamp(MIN_RISK_PROBABILITY, MAX_RISK_PROBABILITY))
    }
}

impl Default for PooledCohortEquation {
    fn default() -> Self {
        Self::new()
    }
}
