// Domain-range validation for patient measurements
use crate::models::PatientInputs;
use crate::risk::RiskError;

pub const AGE_MIN: f64 = 20.0;
pub const AGE_MAX: f64 = 79.0;
pub const HDL_MIN: f64 = 20.0;
pub const HDL_MAX: f64 = 100.0;
pub const TOTAL_CHOLESTEROL_MIN: f64 = 130.0;
pub const TOTAL_CHOLESTEROL_MAX: f64 = 320.0;
pub const SYSTOLIC_BP_MIN: f64 = 90.0;
pub const SYSTOLIC_BP_MAX: f64 = 200.0;

/// Validate every measurement field, reporting the first violation with
/// the offending field's name. Values outside the clinical ranges are
/// undefined for the model and rejected rather than computed.
pub fn validate_inputs(inputs: &PatientInputs) -> Result<(), RiskError> {
    check_field("age", inputs.age, AGE_MIN, AGE_MAX)?;
    check_field("hdl", inputs.hdl, HDL_MIN, HDL_MAX)?;
    check_field(
        "totalCholesterol",
        inputs.total_cholesterol,
        TOTAL_CHOLESTEROL_MIN,
        TOTAL_CHOLESTEROL_MAX,
    )?;
    check_field("systolicBp", inputs.systolic_bp, SYSTOLIC_BP_MIN, SYSTOLIC_BP_MAX)?;
    Ok(())
}

fn check_field(field: &str, value: f64, min: f64, max: f64) -> Result<(), RiskError> {
    // The formula takes natural logarithms, so non-finite and non-positive
    // values are ruled out before the range is even considered.
    if !value.is_finite() {
        return Err(RiskError::ValidationError {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(RiskError::ValidationError {
            field: field.to_string(),
            reason: "must be strictly positive".to_string(),
        });
    }
    if value < min || value > max {
        return Err(RiskError::ValidationError {
            field: field.to_string(),
            reason: format!("must be between {min} and {max}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Race, Sex};

    fn valid_inputs() -> PatientInputs {
        PatientInputs {
            age: 55.0,
            total_cholesterol: 213.0,
            hdl: 50.0,
            systolic_bp: 120.0,
            on_hypertension_treatment: false,
            diabetic: false,
            smoker: false,
            sex: Sex::Male,
            race: Race::White,
        }
    }

    fn rejected_field(inputs: PatientInputs) -> String {
        match validate_inputs(&inputs).unwrap_err() {
            RiskError::ValidationError { field, .. } => field,
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_inputs(&valid_inputs()).is_ok());
    }

    #[test]
    fn test_boundary_values_pass() {
        let mut inputs = valid_inputs();
        inputs.age = AGE_MIN;
        inputs.hdl = HDL_MAX;
        inputs.total_cholesterol = TOTAL_CHOLESTEROL_MIN;
        inputs.systolic_bp = SYSTOLIC_BP_MAX;
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_underage_rejected_by_field_name() {
        let mut inputs = valid_inputs();
        inputs.age = 15.0;
        assert_eq!(rejected_field(inputs), "age");
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let mut inputs = valid_inputs();
        inputs.hdl = 101.0;
        assert_eq!(rejected_field(inputs), "hdl");

        let mut inputs = valid_inputs();
        inputs.total_cholesterol = 129.0;
        assert_eq!(rejected_field(inputs), "totalCholesterol");

        let mut inputs = valid_inputs();
        inputs.systolic_bp = 201.0;
        assert_eq!(rejected_field(inputs), "systolicBp");
    }

    #[test]
    fn test_non_finite_and_non_positive_rejected() {
        let mut inputs = valid_inputs();
        inputs.systolic_bp = f64::NAN;
        assert_eq!(rejected_field(inputs), "systolicBp");

        let mut inputs = valid_inputs();
        inputs.age = -55.0;
        assert_eq!(rejected_field(inputs), "age");
    }

    #[test]
    fn test_first_violation_wins() {
        let mut inputs = valid_inputs();
        inputs.age = 15.0;
        inputs.systolic_bp = 250.0;
        assert_eq!(rejected_field(inputs), "age");
    }
}
