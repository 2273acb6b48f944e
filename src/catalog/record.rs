//! Card records and the builder that assembles them from raw rows.

use serde::{Deserialize, Serialize};

use super::error::RowError;
use super::name::{Color, parse_name};
use super::set_codes::SetCodeResolver;
use super::table::RawRow;

/// One card printing harvested from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    /// Raw identifier text, e.g. `WTR001`. Never empty.
    pub collector_number: String,
    /// Card name without its pitch annotation.
    pub display_name: String,
    /// Color derived from the pitch value.
    pub color: Color,
    /// Pitch value, `0` when none is encoded.
    pub pitch_value: i64,
    /// Printing technique (foiling, etc.).
    pub printing_technique: String,
    /// Free-text notes, may be empty.
    pub notes: String,
    /// Full set name, `None` when the set code is unknown.
    pub set_name: Option<String>,
}

/// Turns [`RawRow`]s into [`CardRecord`]s.
///
/// Building is pure: no I/O, and the same row always yields the same record.
#[derive(Debug, Clone)]
pub struct CardRecordBuilder {
    resolver: SetCodeResolver,
}

impl CardRecordBuilder {
    /// Creates a builder resolving set names with `resolver`.
    #[must_use]
    pub fn new(resolver: SetCodeResolver) -> Self {
        Self { resolver }
    }

    /// Builds a card record from one row.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] if the pitch marker does not parse or the
    /// collector number is too short to carry a set code.
    pub fn build(&self, row: &RawRow) -> Result<CardRecord, RowError> {
        let parsed = parse_name(&row.name)?;
        let set_name = self.resolver.resolve(&row.number)?.map(str::to_string);

        Ok(CardRecord {
            collector_number: row.number.clone(),
            display_name: parsed.display_name,
            color: parsed.color,
            pitch_value: parsed.pitch_value,
            printing_technique: row.technique.clone(),
            notes: row.notes.clone(),
            set_name,
        })
    }
}
