use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Invalid date/time: '{0}'")]
    Parse(String),

    #[error("Invalid timezone: '{0}'")]
    UnknownTimezone(String),

    #[error("Duration {field} value '{value}' is too large")]
    DurationOverflow { field: &'static str, value: String },

    #[error("Date/time out of range: {0}")]
    OutOfRange(String),
}
