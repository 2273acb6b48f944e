//! Card table extraction from set catalog pages.
//!
//! Catalog pages always open with an unrelated navigation/legend table, so
//! the first `table` element is discarded unconditionally. Every other table
//! contributes its `tbody > tr` rows in document order.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use super::error::{ROW_CELL_COUNT, RowError};

#[allow(clippy::expect_used)]
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("table selector is valid")); // Static pattern, safe to panic

#[allow(clippy::expect_used)]
static BODY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody > tr").expect("row selector is valid")); // Static pattern, safe to panic

#[allow(clippy::expect_used)]
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("cell selector is valid")); // Static pattern, safe to panic

/// The four cell texts of one catalog row, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Collector number, e.g. `WTR001`.
    pub number: String,
    /// Card name, possibly with a pitch marker.
    pub name: String,
    /// Printing technique.
    pub technique: String,
    /// Free-text notes, may be empty.
    pub notes: String,
}

impl RawRow {
    /// Builds a row from its four cell texts in column order.
    #[must_use]
    pub fn from_cells([number, name, technique, notes]: [String; ROW_CELL_COUNT]) -> Self {
        Self {
            number,
            name,
            technique,
            notes,
        }
    }
}

/// Extracts card rows from a set catalog page.
///
/// Returns one entry per body row of every table after the first, in
/// document order. A row with fewer than four cells yields
/// [`RowError::TooFewCells`] in its slot; extraction carries on with the
/// next row. Cells past the fourth are ignored.
#[must_use]
pub fn extract_rows(document_html: &str) -> Vec<Result<RawRow, RowError>> {
    let document = Html::parse_document(document_html);

    document
        .select(&TABLE)
        .skip(1)
        .enumerate()
        .flat_map(|(table_index, table)| {
            table
                .select(&BODY_ROW)
                .enumerate()
                .map(move |(row_index, row)| row_from_element(table_index, row_index, row))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn row_from_element(table: usize, row: usize, element: ElementRef<'_>) -> Result<RawRow, RowError> {
    let cells: Vec<String> = element
        .select(&CELL)
        .take(ROW_CELL_COUNT)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    let found = cells.len();
    let cells: [String; ROW_CELL_COUNT] = cells
        .try_into()
        .map_err(|_| RowError::too_few_cells(table, row, found))?;

    trace!(table, row, number = %cells[0], "extracted row");
    Ok(RawRow::from_cells(cells))
}
