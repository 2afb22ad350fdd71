//! Provides the `WeatherClient` that collects hourly observations for a date range.

use crate::config::WeatherConfig;
use crate::error::ShorecastError;
use crate::extraction::weather_extractor::extract_hourly;
use crate::fetching::http_fetcher::HttpFetcher;
use crate::fetching::Fetch;
use crate::output::table::ResultTable;
use crate::output::writer::write_table;
use crate::planning::weather_planner::plan_weather;
use crate::types::date_range::DateRange;
use crate::types::records::HourlyObservation;
use log::{debug, info};
use std::path::PathBuf;

/// Fetches one forecast response per day and writes every hourly record to CSV.
///
/// # Examples
///
/// ```no_run
/// use shorecast::{DateRange, ShorecastError, WeatherClient, WeatherConfig, ISO_DATE_FORMAT};
///
/// # fn main() -> Result<(), ShorecastError> {
/// let config = WeatherConfig::builder()
///     .api_key("my-api-key")
///     .data_dir("data")
///     .build();
/// let range = DateRange::parse("2018-01-01", "2018-01-07", ISO_DATE_FORMAT)?;
///
/// let path = WeatherClient::new(config).run(&range)?;
/// println!("Saved to {}", path.display());
/// # Ok(())
/// # }
/// ```
pub struct WeatherClient<F = HttpFetcher> {
    config: WeatherConfig,
    fetcher: F,
}

impl WeatherClient<HttpFetcher> {
    pub fn new(config: WeatherConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetch> WeatherClient<F> {
    pub fn with_fetcher(config: WeatherConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Fetches every day of `range` in order and concatenates the hourly records.
    ///
    /// The first failing request or malformed response aborts the whole collection.
    pub fn collect(&self, range: &DateRange) -> Result<Vec<HourlyObservation>, ShorecastError> {
        let targets = plan_weather(&self.config, range)?;
        info!(
            "Requesting hourly weather for {} day(s) at {}",
            targets.len(),
            self.config.location
        );

        let mut observations = Vec::new();
        for target in &targets {
            let body = self.fetcher.fetch(target)?;
            let rows = extract_hourly(&body, self.config.timestamp_policy, target.label())?;
            debug!("{} returned {} hourly records", target, rows.len());
            observations.extend(rows);
        }
        Ok(observations)
    }

    /// Collects `range` and writes it to `data_dir/file_name`. Returns the written path.
    ///
    /// Nothing is written if any request fails.
    pub fn run(&self, range: &DateRange) -> Result<PathBuf, ShorecastError> {
        let observations = self.collect(range)?;
        let mut table = ResultTable::from_observations(&observations)?;
        let path = write_table(&mut table, &self.config.data_dir, &self.config.file_name)?;
        Ok(path)
    }
}
