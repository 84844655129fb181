// ABOUTME: Input validation shared by the storage and API layers
// ABOUTME: Required-field checks that turn missing payload data into typed errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Require a non-blank text field
pub fn require_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Require a finite coordinate
pub fn require_finite(value: Option<f64>, field: &'static str) -> Result<f64, ValidationError> {
    let number = value.ok_or(ValidationError::MissingField(field))?;
    if !number.is_finite() {
        return Err(ValidationError::InvalidField {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(number)
}
