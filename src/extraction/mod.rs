//! Pure functions turning raw response bodies into rows.

pub mod error;
pub mod surf_extractor;
pub mod weather_extractor;
