// Lifetime ASCVD risk - risk-factor tier tally and categorical interval table
use tracing::debug;

use crate::models::{ConfidenceInterval, PatientInputs, Sex};

/// Transient counts of risk-factor occurrences per severity tier.
/// Produced and consumed within a single classification.
#[derive(Debug, Default, Clone, Copy)]
struct RiskFactorTally {
    optimal: u8,
    suboptimal: u8,
    elevated: u8,
    major: u8,
}

/// Category resolved from a tally. Discriminants double as row indices
/// into the interval tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifetimeCategory {
    MultipleMajor = 0,
    SingleMajor = 1,
    ElevatedPresent = 2,
    SuboptimalPresent = 3,
    AllOptimal = 4,
}

// Fixed (point, low, high) literals per category. A lookup table rather
// than cascading conditionals keeps the literals and the priority order
// auditable on their own.
const LIFETIME_RISK_MALE: [ConfidenceInterval; 5] = [
    ConfidenceInterval::new(0.69, 0.62, 0.73),
    ConfidenceInterval::new(0.50, 0.46, 0.55),
    ConfidenceInterval::new(0.46, 0.38, 0.53),
    ConfidenceInterval::new(0.36, 0.23, 0.50),
    ConfidenceInterval::new(0.05, 0.00, 0.12),
];

const LIFETIME_RISK_FEMALE: [ConfidenceInterval; 5] = [
    ConfidenceInterval::new(0.50, 0.45, 0.56),
    ConfidenceInterval::new(0.39, 0.35, 0.43),
    ConfidenceInterval::new(0.39, 0.33, 0.45),
    ConfidenceInterval::new(0.27, 0.18, 0.36),
    ConfidenceInterval::new(0.08, 0.00, 0.22),
];

/// Categorical lifetime-risk estimator over risk-factor severity tiers.
pub struct LifetimeRiskClassifier;

impl LifetimeRiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Compute the lifetime-risk confidence interval for the given inputs.
    pub fn compute(&self, inputs: &PatientInputs) -> ConfidenceInterval {
        let tally = Self::tally_risk_factors(inputs);
        let category = Self::resolve_category(&tally);

        debug!(
            major = tally.major,
            elevated = tally.elevated,
            suboptimal = tally.suboptimal,
            optimal = tally.optimal,
            category = ?category,
            "Resolved lifetime risk category"
        );

        Self::interval_for(category, inputs.sex)
    }

    /// Bucket cholesterol, blood pressure, diabetes and smoking into
    /// severity tiers. Tiers are exclusive: each measurement lands in
    /// exactly one. Diabetes and smoking each contribute an independent
    /// major factor and may stack with the measurement tiers.
    fn tally_risk_factors(inputs: &PatientInputs) -> RiskFactorTally {
        let mut tally = RiskFactorTally::default();

        let tc = inputs.total_cholesterol;
        if tc >= 240.0 {
            tally.major += 1;
        } else if tc >= 200.0 {
            tally.elevated += 1;
        } else if tc >= 180.0 {
            tally.suboptimal += 1;
        } else {
            tally.optimal += 1;
        }

        // Any hypertension treatment counts as a major factor regardless
        // of the measured pressure.
        if inputs.on_hypertension_treatment {
            tally.major += 1;
        } else {
            let sbp = inputs.systolic_bp;
            if sbp >= 160.0 {
                tally.major += 1;
            } else if sbp >= 140.0 {
                tally.elevated += 1;
            } else if sbp >= 120.0 {
                tally.suboptimal += 1;
            } else {
                tally.optimal += 1;
            }
        }

        if inputs.diabetic {
            tally.major += 1;
        }
        if inputs.smoker {
            tally.major += 1;
        }

        tally
    }

    /// First matching rule wins; evaluation order is the priority order.
    fn resolve_category(tally: &RiskFactorTally) -> LifetimeCategory {
        if tally.major >= 2 {
            LifetimeCategory::MultipleMajor
        } else if tally.major == 1 {
            LifetimeCategory::SingleMajor
        } else if tally.elevated >= 1 {
            LifetimeCategory::ElevatedPresent
        } else if tally.suboptimal >= 1 {
            LifetimeCategory::SuboptimalPresent
        } else {
            LifetimeCategory::AllOptimal
        }
    }

    fn interval_for(category: LifetimeCategory, sex: Sex) -> ConfidenceInterval {
        let table = match sex {
            Sex::Male => &LIFETIME_RISK_MALE,
            Sex::Female => &LIFETIME_RISK_FEMALE,
        };
        table[category as usize]
    }
}

impl Default for LifetimeRiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}
