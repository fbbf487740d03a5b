//! # quiz-fetch
//!
//! Loads a quiz site's published documents and checks the liveness of the
//! URLs its results sheets point at.
//!
//! - [`site`]: `questions.json`, `strings.json`, `results.json` from a base URL
//!   or a local directory
//! - [`urls`]: HEAD checks with optional production/live mirror comparison
//! - [`status_service`]: batched lookups against a remote status endpoint
//!
//! Fetch failures never abort a run. A document that cannot be loaded is
//! reported as unavailable and the batches depending on it are skipped.

pub mod site;
pub mod status_service;
pub mod urls;

mod error;
mod http;

pub use error::FetchError;
pub use site::SiteLocation;
pub use status_service::ServiceRecord;
pub use urls::{CacheStatus, UrlStatus, extract_urls};

use std::time::Duration;

use quiz_config::{HttpConfig, QuizConfig, UrlsConfig};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for quiz sites and the URLs they reference.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    concurrency: usize,
    urls: UrlsConfig,
}

impl SiteClient {
    /// Build a client from the `http` and `urls` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(http: &HttpConfig, urls: UrlsConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;
        Ok(Self {
            http: client,
            concurrency: http.concurrency.max(1),
            urls,
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &QuizConfig) -> Result<Self, FetchError> {
        Self::new(&config.http, config.urls.clone())
    }

    #[must_use]
    pub const fn urls_config(&self) -> &UrlsConfig {
        &self.urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let client = SiteClient::from_config(&QuizConfig::default()).unwrap();
        assert_eq!(client.concurrency, 8);
        assert_eq!(client.urls_config().batch_size, 20);
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let http = HttpConfig {
            concurrency: 0,
            ..HttpConfig::default()
        };
        let client = SiteClient::new(&http, UrlsConfig::default()).unwrap();
        assert_eq!(client.concurrency, 1);
    }
}
