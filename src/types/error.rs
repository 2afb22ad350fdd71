use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while interpreting user input, before any network access happens.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid date '{value}', expected format '{format}'")]
    InvalidDate {
        value: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Start date {start} is after end date {end}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Midnight of {date} does not exist in timezone {timezone}")]
    NonexistentMidnight { date: NaiveDate, timezone: String },

    #[error("Invalid URL '{0}'")]
    InvalidUrl(String, #[source] url::ParseError),
}
