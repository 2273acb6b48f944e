//! Harvest engine: concurrent set-page fetching with partial-failure tolerance.
//!
//! This module provides the `Harvester`, which discovers set pages from the
//! catalog index, fetches every page concurrently, and turns the card tables
//! on each page into [`CardRecord`]s.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use harvester_core::catalog::{CardRecordBuilder, DEFAULT_INDEX_URL, SetCodeResolver, SetCodeTable};
//! use harvester_core::fetch::{FetchConfig, PageClient};
//! use harvester_core::harvest::Harvester;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PageClient::new(&FetchConfig::default())?;
//! let table = Arc::new(SetCodeTable::builtin()?);
//! let harvester = Harvester::new(
//!     Arc::new(client),
//!     CardRecordBuilder::new(SetCodeResolver::new(table)),
//! );
//!
//! let links = harvester.discover(DEFAULT_INDEX_URL).await?;
//! let report = harvester.harvest_all(&links).await;
//! println!("{} cards, {} pages failed", report.records.len(), report.pages_failed());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{debug, info, instrument, warn};

use super::error::DiscoveryError;
use crate::catalog::{CardRecord, CardRecordBuilder, RowError, SetLink, extract_rows, parse_set_index};
use crate::fetch::{FetchError, PageSource};

/// A set page that could not be fetched.
#[derive(Debug)]
pub struct PageFailure {
    /// URL of the set page.
    pub url: String,
    /// Why the fetch failed.
    pub error: FetchError,
}

/// A row that was skipped while building records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// URL of the page the row came from.
    pub url: String,
    /// Why the row was skipped.
    pub error: RowError,
}

/// Records and row failures from one set page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageHarvest {
    /// Records built from the page, in document order.
    pub records: Vec<CardRecord>,
    /// Rows that could not be built.
    pub row_failures: Vec<RowFailure>,
}

/// Outcome of a harvest run.
///
/// Records from all successful pages are concatenated in fetch-completion
/// order; record order within a page follows the document.
#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Successfully built records.
    pub records: Vec<CardRecord>,
    /// Set pages that could not be fetched.
    pub page_failures: Vec<PageFailure>,
    /// Rows skipped on successfully fetched pages.
    pub row_failures: Vec<RowFailure>,
    /// Number of set pages requested.
    pub pages_requested: usize,
}

impl HarvestReport {
    /// Returns the number of set pages fetched successfully.
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_requested - self.page_failures.len()
    }

    /// Returns the number of set pages that failed to fetch.
    #[must_use]
    pub fn pages_failed(&self) -> usize {
        self.page_failures.len()
    }

    /// Returns the number of rows skipped as malformed.
    #[must_use]
    pub fn rows_skipped(&self) -> usize {
        self.row_failures.len()
    }

    /// Returns `true` if every page was fetched and every row was built.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.page_failures.is_empty() && self.row_failures.is_empty()
    }

    fn absorb(&mut self, page: PageHarvest) {
        self.records.extend(page.records);
        self.row_failures.extend(page.row_failures);
    }
}

/// Fetches the catalog index and returns its set links.
///
/// # Errors
///
/// Returns [`DiscoveryError::IndexFetch`] if the index page cannot be fetched.
#[instrument(skip(source), fields(index_url = %index_url))]
pub async fn discover_sets(
    source: &dyn PageSource,
    index_url: &str,
) -> Result<Vec<SetLink>, DiscoveryError> {
    let body = source.fetch(index_url).await?;
    let links = parse_set_index(&body, index_url);
    if links.is_empty() {
        warn!("set index contains no set links");
    } else {
        info!(sets = links.len(), "discovered set pages");
    }
    Ok(links)
}

/// Harvests card records from catalog set pages.
///
/// # Concurrency Model
///
/// - One Tokio task per set link, all spawned before any is awaited
/// - No concurrency window: every URL is in flight at once (one page per
///   released set keeps the batch small)
/// - Tasks own their response bodies; parsing happens on the collecting task
///   as each body arrives, so no state is shared between tasks
/// - The batch waits for every task; a failed page never cancels the others
#[derive(Clone)]
pub struct Harvester {
    source: Arc<dyn PageSource>,
    builder: Arc<CardRecordBuilder>,
}

impl std::fmt::Debug for Harvester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harvester")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl Harvester {
    /// Creates a harvester fetching from `source` and building with `builder`.
    #[must_use]
    pub fn new(source: Arc<dyn PageSource>, builder: CardRecordBuilder) -> Self {
        Self {
            source,
            builder: Arc::new(builder),
        }
    }

    /// Fetches the index page and returns the set links it lists.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the index cannot be fetched; the run
    /// cannot continue without it.
    pub async fn discover(&self, index_url: &str) -> Result<Vec<SetLink>, DiscoveryError> {
        discover_sets(self.source.as_ref(), index_url).await
    }

    /// Fetches every set page concurrently and builds all records.
    ///
    /// Page fetch failures and malformed rows are collected in the report;
    /// they never abort the batch.
    #[instrument(skip(self, links), fields(sets = links.len()))]
    pub async fn harvest_all(&self, links: &[SetLink]) -> HarvestReport {
        let mut report = HarvestReport {
            pages_requested: links.len(),
            ..HarvestReport::default()
        };

        // Spawn everything first; the stream only awaits already-running tasks.
        let mut in_flight: FuturesUnordered<_> = links
            .iter()
            .map(|link| {
                let source = Arc::clone(&self.source);
                let url = link.url.clone();
                debug!(set = %link.display_text, url = %url, "spawning page fetch");
                let handle = tokio::spawn({
                    let url = url.clone();
                    async move { source.fetch(&url).await }
                });
                async move { (url, handle.await) }
            })
            .collect();

        while let Some((url, joined)) = in_flight.next().await {
            let fetched = joined
                .unwrap_or_else(|join_error| Err(FetchError::task_failed(&url, join_error.to_string())));

            match fetched {
                Ok(body) => {
                    let page = self.build_page(&url, &body);
                    debug!(
                        url = %url,
                        records = page.records.len(),
                        skipped = page.row_failures.len(),
                        "page harvested"
                    );
                    report.absorb(page);
                }
                Err(error) => {
                    warn!(url = %url, error = %error, "set page fetch failed; skipping page");
                    report.page_failures.push(PageFailure { url, error });
                }
            }
        }

        info!(
            records = report.records.len(),
            pages_fetched = report.pages_fetched(),
            pages_failed = report.pages_failed(),
            rows_skipped = report.rows_skipped(),
            "harvest complete"
        );
        report
    }

    /// Fetches a single set page and builds its records.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the page cannot be fetched. Malformed rows
    /// are reported in [`PageHarvest::row_failures`], not as errors.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn harvest_page(&self, url: &str) -> Result<PageHarvest, FetchError> {
        let body = self.source.fetch(url).await?;
        Ok(self.build_page(url, &body))
    }

    /// Builds records from a fetched page body.
    #[must_use]
    pub fn build_page(&self, url: &str, body: &str) -> PageHarvest {
        let mut page = PageHarvest::default();

        for row in extract_rows(body) {
            match row.and_then(|row| self.builder.build(&row)) {
                Ok(record) => page.records.push(record),
                Err(error) => {
                    warn!(url, error = %error, "skipping malformed row");
                    page.row_failures.push(RowFailure {
                        url: url.to_string(),
                        error,
                    });
                }
            }
        }

        page
    }
}
