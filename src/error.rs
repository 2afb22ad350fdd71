use crate::extraction::error::ExtractionError;
use crate::fetching::error::FetchError;
use crate::output::error::WriteError;
use crate::types::error::ParseError;
use thiserror::Error;

/// Any error that ends a run. None of them are retried.
#[derive(Debug, Error)]
pub enum ShorecastError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
