//! Turns a date range into the ordered list of requests to issue.

pub mod surf_planner;
pub mod weather_planner;
