use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Stored numeric column holds a value outside the domain type's range
    ///
    /// Occurs for negative warning counts or durations, which the data layer never
    /// writes itself.
    #[error("Stored value {value} for column '{column}' is out of range")]
    OutOfRange {
        /// Name of the column holding the value
        column: &'static str,
        /// The stored value
        value: i64,
    },

    /// Stored account role is neither `user` nor `admin`
    #[error("Unknown account role '{0}'")]
    UnknownAccountRole(String),
}
