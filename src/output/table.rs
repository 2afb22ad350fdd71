//! Aggregation of extracted rows into a single ordered table.

use crate::output::error::WriteError;
use crate::types::records::{HourlyObservation, SurfReport};
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde_json::Value;

pub const COL_TIME: &str = "time";
pub const COL_DATE: &str = "date";
pub const COL_RATING: &str = "rating";

/// Rows of one record type in emission order, with a fixed column order.
pub struct ResultTable {
    frame: DataFrame,
}

impl ResultTable {
    /// Weather table keyed on the normalized `time` column.
    ///
    /// Provider attributes follow `time` in the order they were first seen. An
    /// attribute missing from an hour is null in that row. Integer attributes stay
    /// integers, mixed numeric attributes become floats, anything else is text.
    pub fn from_observations(rows: &[HourlyObservation]) -> Result<Self, WriteError> {
        let mut attributes: Vec<&str> = Vec::new();
        for row in rows {
            for key in row.fields.keys() {
                if !attributes.contains(&key.as_str()) {
                    attributes.push(key);
                }
            }
        }

        let times: Vec<NaiveDateTime> = rows.iter().map(|row| row.time).collect();
        let mut columns = vec![Column::new(COL_TIME.into(), times)];
        columns.extend(attributes.into_iter().map(|name| {
            let values: Vec<Option<&Value>> = rows
                .iter()
                .map(|row| row.fields.get(name).filter(|v| !v.is_null()))
                .collect();
            json_column(name, &values)
        }));

        Self::from_columns(columns)
    }

    /// Surf table with columns `date, time, rating`.
    pub fn from_reports(rows: &[SurfReport]) -> Result<Self, WriteError> {
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        let times: Vec<&str> = rows.iter().map(|r| r.time.as_str()).collect();
        let ratings: Vec<f64> = rows.iter().map(|r| r.rating).collect();

        Self::from_columns(vec![
            Column::new(COL_DATE.into(), dates),
            Column::new(COL_TIME.into(), times),
            Column::new(COL_RATING.into(), ratings),
        ])
    }

    fn from_columns(columns: Vec<Column>) -> Result<Self, WriteError> {
        DataFrame::new(columns)
            .map(|frame| Self { frame })
            .map_err(WriteError::TableAssembly)
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub(crate) fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}

fn json_column(name: &str, values: &[Option<&Value>]) -> Column {
    let mut present = values.iter().flatten();
    if present.clone().all(|v| v.is_i64()) {
        let ints: Vec<Option<i64>> = values.iter().map(|v| v.and_then(Value::as_i64)).collect();
        Column::new(name.into(), ints)
    } else if present.all(|v| v.is_number()) {
        let floats: Vec<Option<f64>> = values.iter().map(|v| v.and_then(Value::as_f64)).collect();
        Column::new(name.into(), floats)
    } else {
        let texts: Vec<Option<String>> = values
            .iter()
            .map(|v| {
                v.map(|value| match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
            })
            .collect();
        Column::new(name.into(), texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Map};

    fn observation(hour: u32, fields: Value) -> HourlyObservation {
        let fields: Map<String, Value> = match fields {
            Value::Object(map) => map,
            _ => panic!("fields must be an object"),
        };
        HourlyObservation {
            time: NaiveDate::from_ymd_opt(2018, 1, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            fields,
        }
    }

    #[test]
    fn test_weather_columns_in_first_seen_order() {
        let rows = vec![
            observation(0, json!({"summary": "Clear", "temperature": 30.5})),
            observation(1, json!({"summary": "Rain", "precipType": "rain", "temperature": 31})),
        ];
        let table = ResultTable::from_observations(&rows).unwrap();

        assert_eq!(table.height(), 2);
        assert_eq!(
            table.column_names(),
            ["time", "summary", "temperature", "precipType"]
        );

        let frame = table.frame();
        assert_eq!(frame.column("temperature").unwrap().dtype(), &DataType::Float64);
        assert_eq!(frame.column("precipType").unwrap().null_count(), 1);
        assert!(matches!(
            frame.column("time").unwrap().dtype(),
            DataType::Datetime(_, None)
        ));
    }

    #[test]
    fn test_integer_attributes_stay_integers() {
        let rows = vec![
            observation(0, json!({"uvIndex": 0, "ozone": null})),
            observation(1, json!({"uvIndex": 2, "ozone": 290.1})),
        ];
        let frame = ResultTable::from_observations(&rows).unwrap().into_frame();
        assert_eq!(frame.column("uvIndex").unwrap().dtype(), &DataType::Int64);
        assert_eq!(frame.column("ozone").unwrap().dtype(), &DataType::Float64);
        assert_eq!(frame.column("ozone").unwrap().null_count(), 1);
    }

    #[test]
    fn test_empty_weather_table_keeps_time_column() {
        let table = ResultTable::from_observations(&[]).unwrap();
        assert_eq!(table.height(), 0);
        assert_eq!(table.column_names(), ["time"]);
    }

    #[test]
    fn test_surf_columns() {
        let rows = vec![
            SurfReport {
                date: "06/01/16".to_string(),
                time: "06:30 AM".to_string(),
                rating: 2.5,
            },
            SurfReport {
                date: "06/02/16".to_string(),
                time: "07:00 AM".to_string(),
                rating: 4.0,
            },
        ];
        let table = ResultTable::from_reports(&rows).unwrap();
        assert_eq!(table.column_names(), ["date", "time", "rating"]);
        let ratings: Vec<Option<f64>> = table
            .frame()
            .column("rating")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ratings, [Some(2.5), Some(4.0)]);
    }
}
