//! Error types for salary form validation.
//!
//! Every failure the counter can produce is detected at the input boundary.
//! The accrual model itself is total over a validated [`SalaryDeclaration`],
//! so this is the only error type in the crate.
//!
//! [`SalaryDeclaration`]: crate::accrual::SalaryDeclaration

use thiserror::Error;

/// A rejected form value. The `Display` text is shown directly under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be a valid number (got \"{input}\")")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Amount cannot exceed {max}")]
    AmountTooLarge { max: i64 },

    #[error("Working hours per day must be between 0.01 and 24, got {value}")]
    WorkingHoursOutOfRange { value: String },

    #[error("Unknown pay period: {0}")]
    UnknownPeriod(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown working-day policy: {0}")]
    UnknownHolidayPolicy(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::EmptyField { field: "Amount" };
        assert_eq!(err.to_string(), "Amount cannot be empty");

        let err = ValidationError::NotANumber {
            field: "Working hours",
            input: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Working hours must be a valid number (got \"abc\")"
        );
    }

    #[test]
    fn unknown_code_messages() {
        assert_eq!(
            ValidationError::UnknownCurrency("XYZ".into()).to_string(),
            "Unknown currency: XYZ"
        );
    }
}
