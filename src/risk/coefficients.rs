// Pooled Cohort Equations coefficient sets, keyed by demographic group
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Race, Sex};
use crate::risk::RiskError;

/// Demographic groups the published Pooled Cohort Equations are keyed by.
///
/// All four race/sex combinations are representable so callers can request
/// any of them; only the White groups currently carry a tabulated
/// coefficient set, and lookup for the others reports `UnsupportedGroup`
/// rather than defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemographicGroup {
    WhiteMale,
    WhiteFemale,
    BlackMale,
    BlackFemale,
}

impl DemographicGroup {
    /// Resolve the group for a race/sex combination. Total: every
    /// combination maps to exactly one group.
    pub fn new(race: Race, sex: Sex) -> Self {
        match (race, sex) {
            (Race::White, Sex::Male) => DemographicGroup::WhiteMale,
            (Race::White, Sex::Female) => DemographicGroup::WhiteFemale,
            (Race::Black, Sex::Male) => DemographicGroup::BlackMale,
            (Race::Black, Sex::Female) => DemographicGroup::BlackFemale,
        }
    }
}

impl fmt::Display for DemographicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemographicGroup::WhiteMale => write!(f, "WhiteMale"),
            DemographicGroup::WhiteFemale => write!(f, "WhiteFemale"),
            DemographicGroup::BlackMale => write!(f, "BlackMale"),
            DemographicGroup::BlackFemale => write!(f, "BlackFemale"),
        }
    }
}

/// Regression coefficients and survival constants for one demographic
/// group. Immutable: constructed once as a `'static` table entry and
/// shared read-only across all computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    pub age: f64,
    pub age_squared: f64,
    pub total_cholesterol: f64,
    pub age_total_cholesterol: f64,
    pub hdl: f64,
    pub age_hdl: f64,
    pub treated_sbp: f64,
    pub age_treated_sbp: f64,
    pub untreated_sbp: f64,
    pub age_untreated_sbp: f64,
    pub smoker: f64,
    pub age_smoker: f64,
    pub diabetes: f64,
    /// Cohort survival probability at the mean risk-factor level; the base
    /// of the final exponentiation. Always in (0, 1).
    pub baseline_survival: f64,
    pub overall_mean: f64,
}

pub const WHITE_MALE: CoefficientSet = CoefficientSet {
    age: 12.344,
    age_squared: 0.0,
    total_cholesterol: 11.853,
    age_total_cholesterol: -2.664,
    hdl: -7.99,
    age_hdl: 1.769,
    treated_sbp: 1.797,
    age_treated_sbp: 0.0,
    untreated_sbp: 1.764,
    age_untreated_sbp: 0.0,
    smoker: 7.837,
    age_smoker: -1.795,
    diabetes: 0.658,
    baseline_survival: 0.91436,
    overall_mean: 61.1816,
};

pub const WHITE_FEMALE: CoefficientSet = CoefficientSet {
    age: -29.799,
    age_squared: 4.884,
    total_cholesterol: 13.54,
    age_total_cholesterol: -3.114,
    hdl: -13.578,
    age_hdl: 3.149,
    treated_sbp: 2.019,
    age_treated_sbp: 0.0,
    untreated_sbp: 1.957,
    age_untreated_sbp: 0.0,
    smoker: 7.574,
    age_smoker: -1.665,
    diabetes: 0.661,
    baseline_survival: 0.96652,
    overall_mean: -29.1817,
};

/// Static registry mapping demographic groups to their coefficient sets.
pub struct CoefficientRegistry;

impl CoefficientRegistry {
    /// Look up the coefficient set for a demographic group.
    ///
    /// Fails with `UnsupportedGroup` for groups without a tabulated set;
    /// there is no fallback set.
    pub fn lookup(group: DemographicGroup) -> Result<&'static CoefficientSet, RiskError> {
        match group {
            DemographicGroup::WhiteMale => Ok(&WHITE_MALE),
            DemographicGroup::WhiteFemale => Ok(&WHITE_FEMALE),
            DemographicGroup::BlackMale | DemographicGroup::BlackFemale => {
                Err(RiskError::UnsupportedGroup {
                    group: group.to_string(),
                })
            }
        }
    }
}
