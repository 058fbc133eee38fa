// Patient measurement inputs collected by the external form layer
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient sex. Selects the coefficient column of the 10-year model and
/// the row set of the lifetime-risk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Patient race. Only White currently has tabulated coefficient sets;
/// other values resolve to a demographic group the registry reports as
/// unsupported instead of silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    White,
    Black,
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Race::White => write!(f, "White"),
            Race::Black => write!(f, "Black"),
        }
    }
}

/// One patient's measurements.
///
/// Units: years for age, mg/dL for both cholesterol fields, mmHg for
/// systolic blood pressure. The engine re-validates domain ranges before
/// computing anything, since the formula takes natural logarithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInputs {
    pub age: f64,
    pub total_cholesterol: f64,
    pub hdl: f64,
    pub systolic_bp: f64,
    pub on_hypertension_treatment: bool,
    pub diabetic: bool,
    pub smoker: bool,
    pub sex: Sex,
    pub race: Race,
}
