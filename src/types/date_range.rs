//! Inclusive calendar date ranges used to plan requests.

use crate::types::error::ParseError;
use chrono::NaiveDate;

/// Date format used by the weather command line (`2018-01-01`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used by the surf archive (`01/31/16`).
pub const SHORT_US_DATE_FORMAT: &str = "%m/%d/%y";

/// An inclusive range of calendar days.
///
/// The start is never after the end; [`DateRange::new`] rejects reversed ranges.
///
/// # Examples
///
/// ```
/// use shorecast::{DateRange, ISO_DATE_FORMAT};
///
/// let range = DateRange::parse("2018-01-30", "2018-02-02", ISO_DATE_FORMAT).unwrap();
/// assert_eq!(range.days().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ReversedRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ParseError> {
        if start > end {
            return Err(ParseError::ReversedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends of the range with the given `chrono` format string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] for a malformed date and
    /// [`ParseError::ReversedRange`] if the dates are out of order.
    pub fn parse(start: &str, end: &str, format: &'static str) -> Result<Self, ParseError> {
        Self::new(parse_date(start, format)?, parse_date(end, format)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every day in the range, start and end included, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

fn parse_date(value: &str, format: &'static str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|source| ParseError::InvalidDate {
        value: value.to_string(),
        format,
        source,
    })
}
