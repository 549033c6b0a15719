use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional u64 value from an optional String
///
/// # Returns
/// - `Ok(None)` - No value was stored
/// - `Ok(Some(u64))` - Successfully parsed the stored value
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a u64
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Narrows a stored signed integer to `u32`.
///
/// # Returns
/// - `Ok(u32)` - Value fits
/// - `Err(AppError::InternalErr(OutOfRange))` - Value is negative or too large
pub fn narrow_to_u32(column: &'static str, value: i64) -> Result<u32, AppError> {
    u32::try_from(value).map_err(|_| InternalError::OutOfRange { column, value }.into())
}
