use crate::config::WeatherConfig;
use crate::types::date_range::DateRange;
use crate::types::error::ParseError;
use crate::types::fetch_target::FetchTarget;
use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use url::Url;

/// Data blocks the forecast endpoint should leave out; only `hourly` remains.
const EXCLUDED_BLOCKS: &str = "currently,minutely,daily,alerts,flags";

/// Builds one forecast request per day of `range`, in chronological order.
///
/// Each request is pinned to that day's midnight in `config.timezone`.
pub fn plan_weather(
    config: &WeatherConfig,
    range: &DateRange,
) -> Result<Vec<FetchTarget>, ParseError> {
    range
        .days()
        .map(|day| {
            let epoch = local_midnight_epoch(day, config.timezone)?;
            let raw = format!(
                "{}/forecast/{}/{},{}?exclude={}",
                config.base_url.trim_end_matches('/'),
                config.api_key,
                config.location,
                epoch,
                EXCLUDED_BLOCKS
            );
            let url = Url::parse(&raw)
                .map_err(|e| ParseError::InvalidUrl(redact(&raw, config), e))?;
            Ok(
                FetchTarget::new(url, format!("hourly weather for {day}"))
                    .with_epoch_seconds(epoch),
            )
        })
        .collect()
}

/// Unix seconds of `day` 00:00 in `tz`. Ambiguous midnights resolve to the earlier instant.
pub fn local_midnight_epoch(day: NaiveDate, tz: Tz) -> Result<i64, ParseError> {
    tz.from_local_datetime(&day.and_time(chrono::NaiveTime::MIN))
        .earliest()
        .map(|midnight| midnight.timestamp())
        .ok_or_else(|| ParseError::NonexistentMidnight {
            date: day,
            timezone: tz.name().to_string(),
        })
}

fn redact(raw: &str, config: &WeatherConfig) -> String {
    if config.api_key.is_empty() {
        raw.to_string()
    } else {
        raw.replace(&config.api_key, "***")
    }
}
