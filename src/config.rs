//! Run configuration for the two pipelines.
//!
//! Both configs are built once (usually from command line arguments) and handed to
//! the planner, fetcher and writer. Nothing reads configuration from global state.

use crate::extraction::surf_extractor::SurfSelectors;
use crate::types::fetch_target::Credentials;
use crate::types::lat_lon::{LatLon, DEFAULT_LOCATION};
use crate::types::timestamp_policy::TimestampPolicy;
use bon::Builder;
use chrono_tz::Tz;
use std::path::PathBuf;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.darksky.net";
pub const DEFAULT_WEATHER_FILE_NAME: &str = "darksky.csv";

pub const DEFAULT_SURF_ARCHIVE_URL: &str = "http://www.wblivesurf.com/reports/";
pub const DEFAULT_SURF_DATA_DIR: &str = "./wblive_data";
pub const DEFAULT_SURF_FILE_NAME: &str = "wblive.csv";

/// The archive renders at most this many reports per page, so a shorter page is the last one.
pub const REPORTS_PER_PAGE: usize = 16;

/// Settings for the hourly weather pipeline.
///
/// # Examples
///
/// ```
/// use shorecast::{LatLon, TimestampPolicy, WeatherConfig};
///
/// let config = WeatherConfig::builder()
///     .api_key("secret")
///     .location(LatLon(34.2085, -77.7964))
///     .timestamp_policy(TimestampPolicy::FixedOffset { hours: 5 })
///     .build();
///
/// assert_eq!(config.file_name, "darksky.csv");
/// assert_eq!(config.timezone, chrono_tz::America::New_York);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct WeatherConfig {
    #[builder(into)]
    pub api_key: String,
    #[builder(default = DEFAULT_LOCATION)]
    pub location: LatLon,
    /// Zone whose midnights define the day boundaries of the requests.
    #[builder(default = chrono_tz::America::New_York)]
    pub timezone: Tz,
    #[builder(default)]
    pub timestamp_policy: TimestampPolicy,
    #[builder(into, default = String::from(DEFAULT_WEATHER_BASE_URL))]
    pub base_url: String,
    #[builder(into, default = PathBuf::from("."))]
    pub data_dir: PathBuf,
    #[builder(into, default = String::from(DEFAULT_WEATHER_FILE_NAME))]
    pub file_name: String,
}

/// Settings for the surf archive crawler.
#[derive(Debug, Clone, Builder)]
pub struct SurfConfig {
    #[builder(into, default = String::from(DEFAULT_SURF_ARCHIVE_URL))]
    pub archive_url: String,
    pub credentials: Option<Credentials>,
    #[builder(default = REPORTS_PER_PAGE)]
    pub page_size: usize,
    #[builder(default)]
    pub selectors: SurfSelectors,
    #[builder(into, default = PathBuf::from(DEFAULT_SURF_DATA_DIR))]
    pub data_dir: PathBuf,
    #[builder(into, default = String::from(DEFAULT_SURF_FILE_NAME))]
    pub file_name: String,
}

impl Default for SurfConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
