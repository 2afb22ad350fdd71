use crate::fetching::error::FetchError;
use crate::fetching::Fetch;
use crate::types::fetch_target::FetchTarget;
use log::{info, warn};
use reqwest::blocking::Client;

/// Blocking HTTP fetcher. One GET per target, no retries, transport default timeouts.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, target: &FetchTarget) -> Result<String, FetchError> {
        info!("Fetching {}", target);

        let mut request = self.client.get(target.url().clone());
        if let Some(credentials) = target.credentials() {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request
            .send()
            .map_err(|e| FetchError::NetworkRequest(target.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", target, status);
            return Err(FetchError::HttpStatus {
                target: target.to_string(),
                status,
            });
        }

        response
            .text()
            .map_err(|e| FetchError::Body(target.to_string(), e))
    }
}
