//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while loading site documents or checking URLs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the remote.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// Body was not a usable document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local site failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Site is neither an `http(s)` URL nor an existing directory.
    #[error("invalid site '{0}': expected an http(s) URL or a local directory")]
    InvalidSite(String),

    /// `urls.status_service_url` is empty.
    #[error("status service is not configured (set urls.status_service_url)")]
    StatusServiceDisabled,
}

impl From<quiz_core::CoreError> for FetchError {
    fn from(error: quiz_core::CoreError) -> Self {
        Self::Parse(error.to_string())
    }
}
