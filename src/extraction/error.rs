use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to parse hourly weather JSON from {source_name}")]
    WeatherJson {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Hourly record {index} from {source_name} has an out of range time {epoch_seconds}")]
    InvalidTimestamp {
        source_name: String,
        index: usize,
        epoch_seconds: i64,
    },

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Report {index} is missing its {element}")]
    MissingElement { index: usize, element: &'static str },

    #[error("Page has no title to read the page count from")]
    MissingTitle,

    #[error("Unrecognized page title '{0}'")]
    UnrecognizedTitle(String),
}
