use std::fmt;
use url::Url;

/// Static HTTP basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A single request to issue: the URL plus what it stands for.
///
/// Targets are immutable once built. The `label` is a human readable name used in
/// logs and errors instead of the URL, which may embed an API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    url: Url,
    label: String,
    page: Option<u32>,
    epoch_seconds: Option<i64>,
    credentials: Option<Credentials>,
}

impl FetchTarget {
    pub fn new(url: Url, label: impl Into<String>) -> Self {
        Self {
            url,
            label: label.into(),
            page: None,
            epoch_seconds: None,
            credentials: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_epoch_seconds(mut self, epoch_seconds: i64) -> Self {
        self.epoch_seconds = Some(epoch_seconds);
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Explicit archive page index. `None` for the unnumbered first page.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn epoch_seconds(&self) -> Option<i64> {
        self.epoch_seconds
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
