pub mod surf_client;
pub mod weather_client;
