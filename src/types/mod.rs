pub mod date_range;
pub mod error;
pub mod fetch_target;
pub mod lat_lon;
pub mod records;
pub mod timestamp_policy;
