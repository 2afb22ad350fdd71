use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {target} with status {status}")]
    HttpStatus {
        target: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read response body for {0}")]
    Body(String, #[source] reqwest::Error),
}
