mod clients;
mod config;
mod error;
mod extraction;
mod fetching;
mod output;
mod planning;
mod types;

pub use config::*;
pub use error::ShorecastError;

pub use clients::surf_client::SurfClient;
pub use clients::weather_client::WeatherClient;

pub use fetching::error::FetchError;
pub use fetching::http_fetcher::HttpFetcher;
pub use fetching::Fetch;

pub use extraction::error::ExtractionError;
pub use extraction::surf_extractor::{
    parse_page_title, PageCount, SurfExtractor, SurfPage, SurfSelectors,
};
pub use extraction::weather_extractor::extract_hourly;

pub use planning::surf_planner::{plan_surf, surf_page_target};
pub use planning::weather_planner::{local_midnight_epoch, plan_weather};

pub use output::error::WriteError;
pub use output::table::ResultTable;
pub use output::writer::{write_table, TIMESTAMP_FORMAT};

pub use types::date_range::{DateRange, ISO_DATE_FORMAT, SHORT_US_DATE_FORMAT};
pub use types::error::ParseError;
pub use types::fetch_target::{Credentials, FetchTarget};
pub use types::lat_lon::{LatLon, DEFAULT_LOCATION};
pub use types::records::{HourlyObservation, SurfReport};
pub use types::timestamp_policy::TimestampPolicy;
