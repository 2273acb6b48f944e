//! Concurrent harvest of card records from the publisher's catalog.
//!
//! # Error boundaries
//!
//! - Index fetch failure: fatal, returned as [`DiscoveryError`]
//! - Set page fetch failure: recorded as a [`PageFailure`], run continues
//! - Malformed row: recorded as a [`RowFailure`], page continues
//! - Unknown set code or out-of-range pitch: logged, record still produced

mod engine;
mod error;

pub use engine::{
    HarvestReport, Harvester, PageFailure, PageHarvest, RowFailure, discover_sets,
};
pub use error::DiscoveryError;
