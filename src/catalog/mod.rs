//! Catalog parsing: turning publisher HTML into card records.
//!
//! # Pipeline
//!
//! - [`parse_set_index`] - set links from the collector-centre index page
//! - [`extract_rows`] - raw four-cell rows from a set page's card tables
//! - [`parse_name`] - display name, color and pitch from a card name
//! - [`SetCodeResolver`] - full set name from a collector number prefix
//! - [`CardRecordBuilder`] - one [`CardRecord`] per raw row
//!
//! Everything here is synchronous and free of I/O apart from loading a
//! set-code table file.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use harvester_core::catalog::{CardRecordBuilder, SetCodeResolver, SetCodeTable, extract_rows};
//!
//! let html = r"
//!     <table><tr><td>legend</td></tr></table>
//!     <table><tbody><tr><td>WTR001</td><td>Pummel (1)</td><td>Foil</td><td></td></tr></tbody></table>
//! ";
//! let table = Arc::new(SetCodeTable::from_entries([("wtr", "Welcome to Rathe")]));
//! let builder = CardRecordBuilder::new(SetCodeResolver::new(table));
//!
//! let records: Vec<_> = extract_rows(html)
//!     .into_iter()
//!     .filter_map(|row| row.and_then(|row| builder.build(&row)).ok())
//!     .collect();
//! assert_eq!(records[0].display_name, "Pummel");
//! ```

mod error;
mod index;
mod name;
mod record;
mod set_codes;
mod table;

pub use error::{ROW_CELL_COUNT, RowError, SET_CODE_LEN};
pub use index::{DEFAULT_INDEX_URL, SetLink, parse_set_index};
pub use name::{Color, ParsedName, has_pitch_marker, parse_name};
pub use record::{CardRecord, CardRecordBuilder};
pub use set_codes::{SetCodeError, SetCodeResolver, SetCodeTable};
pub use table::{RawRow, extract_rows};
