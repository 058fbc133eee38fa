// Risk assessment result types returned to the display/persistence layer
use serde::{Deserialize, Serialize};

/// Lifetime-risk estimate: point value with its published confidence
/// bounds, all probabilities in [0, 1]. Always one of the fixed literals
/// from the lifetime-risk table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub point: f64,
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    pub const fn new(point: f64, low: f64, high: f64) -> Self {
        Self { point, low, high }
    }
}

/// Coarse classification of a rounded 10-year risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Borderline,
    Intermediate,
    High,
}

/// Output bundle of a full evaluation.
///
/// The risk fields are percentages rounded to one decimal place, keyed the
/// way the external database writer persists them. The raw lifetime
/// confidence intervals ride along as context data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub age: f64,
    pub ten_year_risk: f64,
    pub ten_year_optimal_risk: f64,
    pub lifetime_risk: f64,
    pub lifetime_optimal_risk: f64,
    pub lifetime_interval: ConfidenceInterval,
    pub lifetime_optimal_interval: ConfidenceInterval,
}

impl RiskResult {
    /// Get the risk level for the 10-year percentage.
    pub fn risk_level(&self) -> RiskLevel {
        match self.ten_year_risk {
            p if p >= 20.0 => RiskLevel::High,
            p if p >= 7.5 => RiskLevel::Intermediate,
            p if p >= 5.0 => RiskLevel::Borderline,
            _ => RiskLevel::Low,
        }
    }
}
