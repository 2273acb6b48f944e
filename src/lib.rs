//! Card Harvester Core Library
//!
//! This library harvests trading-card records from the Flesh and Blood
//! collector-centre catalog: it discovers the set pages, fetches them
//! concurrently, and turns their HTML card tables into typed records.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - HTML parsing, name/pitch parsing, set-code resolution, records
//! - [`fetch`] - HTTP page fetching with structured errors
//! - [`harvest`] - Concurrent fan-out/fan-in over set pages
//! - [`db`] - Database connection and schema management
//! - [`store`] - Persisting card records
//! - [`logging`] - Tracing subscriber and log-file setup

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod db;
pub mod fetch;
pub mod harvest;
pub mod logging;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use catalog::{
    CardRecord, CardRecordBuilder, Color, RawRow, RowError, SetCodeResolver, SetCodeTable,
    SetLink,
};
pub use db::{Database, DbError};
pub use fetch::{FetchConfig, FetchError, PageClient, PageSource};
pub use harvest::{DiscoveryError, HarvestReport, Harvester};
pub use store::CardStore;
pub use user_agent::BROWSER_USER_AGENT;
