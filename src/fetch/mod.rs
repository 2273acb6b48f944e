//! Page fetching for the catalog index and set pages.
//!
//! # Features
//!
//! - Fixed browser User-Agent (the catalog rejects default client identifiers)
//! - Explicit connect and per-request timeouts
//! - Optional TLS relaxation, applied to every request of a run
//! - One error type, [`FetchError`], carrying the failed URL
//!
//! # Example
//!
//! ```no_run
//! use harvester_core::fetch::{FetchConfig, PageClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PageClient::new(&FetchConfig::default())?;
//! let html = client.get_text("https://fabtcg.com/collectors-centre/").await?;
//! println!("{} bytes", html.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;

pub use client::{FetchConfig, PageClient};
pub use constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
pub use error::FetchError;

use async_trait::async_trait;

/// Source of catalog page bodies.
///
/// [`PageClient`] is the network implementation; the harvester depends only
/// on this trait so it can run over fixtures.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieves the HTML body at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the page cannot be retrieved.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
