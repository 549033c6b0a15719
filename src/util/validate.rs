//! Input validation for identifiers and required fields.
//!
//! Violations are programmer errors on the caller's side and are raised before
//! any store access.

use crate::error::AppError;

/// Requires a Discord identifier to be present (non-zero).
///
/// # Arguments
/// - `field` - Name of the field, used in the error message
/// - `value` - Identifier to check
///
/// # Returns
/// - `Ok(u64)` - The identifier
/// - `Err(AppError::InvalidInput)` - Identifier is zero
pub fn require_id(field: &str, value: u64) -> Result<u64, AppError> {
    if value == 0 {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }

    Ok(value)
}

/// Requires a text field to contain at least one non-whitespace character.
///
/// # Returns
/// - `Ok(&str)` - The text
/// - `Err(AppError::InvalidInput)` - Text is empty or blank
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }

    Ok(value)
}
