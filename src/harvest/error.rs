//! Error types for the harvest module.

use thiserror::Error;

use crate::fetch::FetchError;

/// The set index could not be retrieved.
///
/// This is the only error that ends a run: without the index there are no
/// set pages to harvest.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Fetching the index page failed.
    #[error("set index unavailable: {0}")]
    IndexFetch(#[from] FetchError),
}
