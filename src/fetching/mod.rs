//! Retrieval of raw response bodies for planned targets.

pub mod error;
pub mod http_fetcher;

use crate::fetching::error::FetchError;
use crate::types::fetch_target::FetchTarget;

/// Issues a single request for a target and returns the raw body.
///
/// Any failure is fatal for the run; implementations do not retry.
pub trait Fetch {
    fn fetch(&self, target: &FetchTarget) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, target: &FetchTarget) -> Result<String, FetchError> {
        (**self).fetch(target)
    }
}
