//! HTTP client wrapper for fetching catalog pages.
//!
//! This module provides the `PageClient` struct which issues one GET per
//! page with the browser User-Agent, explicit timeouts, and structured
//! errors carrying the URL.
//!
//! # Known risk: relaxed TLS
//!
//! By default the client accepts invalid TLS certificates. The catalog host
//! has served misconfigured certificates in the past and the harvester was
//! built to tolerate that. With relaxation on, a network attacker can serve
//! forged pages; set [`FetchConfig::accept_invalid_certs`] to `false` (CLI:
//! `--strict-tls`) wherever the host's certificate validates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use super::PageSource;
use super::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use super::error::FetchError;
use crate::user_agent;

/// Network settings shared by the index and set-page fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Total per-request timeout, body included.
    pub request_timeout: Duration,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: user_agent::default_catalog_user_agent(),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            accept_invalid_certs: true,
        }
    }
}

/// HTTP client for catalog pages.
///
/// Created once and shared across all fetches of a run so connections are
/// pooled. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] if the TLS backend or
    /// client builder cannot be initialised.
    #[instrument(level = "debug", skip(config), fields(accept_invalid_certs = config.accept_invalid_certs))]
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for catalog requests");
        }

        #[allow(deprecated)]
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the URL is invalid, the request fails or
    /// times out, the server answers with a non-2xx status, or the body
    /// cannot be read.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| FetchError::body(url, e))?;
        debug!(bytes = body.len(), "fetched page");
        Ok(body)
    }
}

#[async_trait]
impl PageSource for PageClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await
    }
}
