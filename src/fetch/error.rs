//! Error types for the fetch module.
//!
//! Every variant carries the URL that failed so page-level failures can be
//! reported per set.

use thiserror::Error;

/// Errors that can occur while fetching a catalog page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body could not be read as text.
    #[error("failed to read body of {url}: {source}")]
    Body {
        /// The URL whose body failed.
        url: String,
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The provided URL is malformed or invalid.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The task fetching this URL ended without producing a result.
    #[error("fetch task for {url} failed: {reason}")]
    TaskFailed {
        /// The URL the task was fetching.
        url: String,
        /// Why the task ended (panic or cancellation).
        reason: String,
    },
}

impl FetchError {
    /// Creates a network error, promoting timeouts to [`FetchError::Timeout`].
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Self::timeout(url);
        }
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a body read error.
    pub fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Self::timeout(url);
        }
        Self::Body {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a task failure error.
    pub fn task_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns the URL this error is about.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::Timeout { url }
            | Self::HttpStatus { url, .. }
            | Self::Body { url, .. }
            | Self::InvalidUrl { url }
            | Self::TaskFailed { url, .. } => url,
        }
    }
}
