//! Conversion of provider epoch timestamps into naive local timestamps.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;

/// How epoch-second timestamps from the weather provider are turned into the
/// naive timestamps stored in the output table.
///
/// The two historical behaviours disagree during daylight saving time, so both
/// are kept and the caller picks one.
///
/// # Examples
///
/// ```
/// use shorecast::TimestampPolicy;
///
/// // 2018-07-01T00:00:00Z
/// let summer = 1_530_403_200;
/// let localized = TimestampPolicy::Localize(chrono_tz::America::New_York);
/// let fixed = TimestampPolicy::FixedOffset { hours: 5 };
///
/// assert_eq!(localized.normalize(summer).unwrap().to_string(), "2018-06-30 20:00:00");
/// assert_eq!(fixed.normalize(summer).unwrap().to_string(), "2018-06-30 19:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Shift the UTC instant back by a constant number of hours, ignoring daylight saving.
    FixedOffset { hours: i64 },
    /// Interpret as UTC, convert to the zone, then drop the zone annotation.
    Localize(Tz),
}

impl Default for TimestampPolicy {
    fn default() -> Self {
        TimestampPolicy::Localize(chrono_tz::America::New_York)
    }
}

impl TimestampPolicy {
    /// Normalizes `epoch_seconds`. Returns `None` if the value is outside the
    /// representable range.
    pub fn normalize(&self, epoch_seconds: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::from_timestamp(epoch_seconds, 0)?;
        match self {
            TimestampPolicy::FixedOffset { hours } => utc
                .naive_utc()
                .checked_sub_signed(TimeDelta::try_hours(*hours)?),
            TimestampPolicy::Localize(tz) => Some(utc.with_timezone(tz).naive_local()),
        }
    }
}
