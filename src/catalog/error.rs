//! Error types for catalog row parsing.

use thiserror::Error;

/// Number of cells a catalog row must provide.
pub const ROW_CELL_COUNT: usize = 4;

/// Length of the set-code prefix at the start of a collector number.
pub const SET_CODE_LEN: usize = 3;

/// A table row that cannot be turned into a card record.
///
/// Row errors are recoverable: the caller skips the row and keeps
/// processing the rest of the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Row has fewer than the required number of `td` cells.
    #[error(
        "row {row} of table {table} has {found} cells, expected at least {ROW_CELL_COUNT}"
    )]
    TooFewCells {
        /// Index of the table among the data tables on the page (0-based).
        table: usize,
        /// Index of the row within its table body (0-based).
        row: usize,
        /// Number of cells actually found.
        found: usize,
    },

    /// Collector number is too short to carry a set-code prefix.
    #[error(
        "collector number '{collector_number}' is shorter than the {SET_CODE_LEN}-character set code"
    )]
    CollectorNumberTooShort {
        /// The offending collector number text.
        collector_number: String,
    },

    /// Card name carries a pitch marker whose value is not an integer.
    #[error("card name '{name}' has unparseable pitch marker '{marker}'")]
    InvalidPitch {
        /// The full card name cell text.
        name: String,
        /// The token that failed to parse.
        marker: String,
    },
}

impl RowError {
    /// Creates a `TooFewCells` error.
    #[must_use]
    pub fn too_few_cells(table: usize, row: usize, found: usize) -> Self {
        Self::TooFewCells { table, row, found }
    }

    /// Creates a `CollectorNumberTooShort` error.
    #[must_use]
    pub fn collector_number_too_short(collector_number: &str) -> Self {
        Self::CollectorNumberTooShort {
            collector_number: collector_number.to_string(),
        }
    }

    /// Creates an `InvalidPitch` error.
    #[must_use]
    pub fn invalid_pitch(name: &str, marker: &str) -> Self {
        Self::InvalidPitch {
            name: name.to_string(),
            marker: marker.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_cells_display_names_position() {
        let msg = RowError::too_few_cells(1, 7, 3).to_string();
        assert!(msg.contains("row 7"), "Expected row index in: {msg}");
        assert!(msg.contains("table 1"), "Expected table index in: {msg}");
        assert!(msg.contains("3 cells"), "Expected found count in: {msg}");
        assert!(msg.contains('4'), "Expected required count in: {msg}");
    }

    #[test]
    fn test_collector_number_too_short_display() {
        let msg = RowError::collector_number_too_short("AB").to_string();
        assert!(msg.contains("'AB'"), "Expected collector number in: {msg}");
    }

    #[test]
    fn test_invalid_pitch_display() {
        let msg = RowError::invalid_pitch("Odd (1) card(x)", "card(x)").to_string();
        assert!(msg.contains("card(x)"), "Expected marker in: {msg}");
        assert!(msg.contains("Odd (1)"), "Expected name in: {msg}");
    }
}
