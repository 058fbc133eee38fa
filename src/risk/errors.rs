// Risk calculation error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Demographic group not supported: {group}")]
    UnsupportedGroup { group: String },

    #[error("Risk calculation failed: {message}")]
    CalculationError { message: String },
}
