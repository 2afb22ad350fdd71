use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// One hour of provider data with its timestamp already normalized.
///
/// `fields` holds every attribute the provider sent except `time`, in the order
/// it sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyObservation {
    pub time: NaiveDateTime,
    pub fields: Map<String, Value>,
}

/// One report from the surf archive.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfReport {
    /// Date label as rendered, `mm/dd/yy`.
    pub date: String,
    /// First 8 characters of the rendered time label, e.g. `06:30 AM`.
    pub time: String,
    /// Star rating in steps of 0.5.
    pub rating: f64,
}
