use crate::extraction::error::ExtractionError;
use crate::types::records::HourlyObservation;
use crate::types::timestamp_policy::TimestampPolicy;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Deserialize)]
struct HourlyBlock {
    data: Vec<RawHourly>,
}

#[derive(Deserialize)]
struct RawHourly {
    time: i64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Parses a forecast response body and returns its `hourly.data` records.
///
/// Records pass through unchanged except that `time` is normalized with `policy`.
/// `source_name` only labels errors.
pub fn extract_hourly(
    body: &str,
    policy: TimestampPolicy,
    source_name: &str,
) -> Result<Vec<HourlyObservation>, ExtractionError> {
    let response: ForecastResponse =
        serde_json::from_str(body).map_err(|source| ExtractionError::WeatherJson {
            source_name: source_name.to_string(),
            source,
        })?;

    response
        .hourly
        .data
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let time = policy
                .normalize(raw.time)
                .ok_or_else(|| ExtractionError::InvalidTimestamp {
                    source_name: source_name.to_string(),
                    index,
                    epoch_seconds: raw.time,
                })?;
            Ok(HourlyObservation {
                time,
                fields: raw.fields,
            })
        })
        .collect()
}
