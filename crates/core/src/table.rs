//! Table and sticker record data model.
//!
//! A [`Table`] is the boundary type handed over by whatever loaded the file:
//! ordered column names plus rows of cells, everything already coerced to
//! strings. A [`StickerRecord`] is one row's worth of resolved sticker
//! fields, ready for composition and code encoding.

use crate::columns::{ColumnMapping, ResolveError, resolve};
use crate::locparse::{LocationSlots, parse_location};

// ── Table ───────────────────────────────────────────────────────────────

/// An immutable tabular dataset: ordered named columns and rows aligned by
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from headers and rows. Every row is normalized to the
    /// header width: short rows are padded with empty cells, long rows
    /// truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// The ordered column names, with their original casing.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The cell at (`row`, `col`); empty string when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Iterate over the raw rows.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Resolve this table's headers to a [`ColumnMapping`].
    pub fn resolve(&self) -> Result<ColumnMapping, ResolveError> {
        resolve(&self.columns)
    }

    /// Iterate over the rows as resolved [`StickerRecord`]s.
    pub fn records<'a>(
        &'a self,
        mapping: &'a ColumnMapping,
    ) -> impl Iterator<Item = StickerRecord> + 'a {
        (0..self.row_count()).map(|row| StickerRecord::from_row(self, mapping, row))
    }
}

// ── Sticker record ──────────────────────────────────────────────────────

/// One row's resolved sticker fields.
///
/// The raw location strings are kept alongside their parsed slots because
/// the scannable code embeds the originals, not the decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerRecord {
    /// Part identifier.
    pub part_no: String,
    /// Human-readable description (untruncated; the composer truncates).
    pub description: String,
    /// Quantity-per-bin value; empty when the column is unmapped.
    pub quantity_per_bin: String,
    /// Raw line location string as it appeared in the table.
    pub raw_line_location: String,
    /// Raw store location string; empty when the column is unmapped.
    pub raw_store_location: String,
    /// Line location decomposed into display slots.
    pub line_location: LocationSlots,
    /// Store location decomposed into display slots.
    pub store_location: LocationSlots,
}

impl StickerRecord {
    /// Extract the record for `row` using a resolved mapping.
    pub fn from_row(table: &Table, mapping: &ColumnMapping, row: usize) -> Self {
        let cell = |col: Option<usize>| {
            col.map_or_else(String::new, |c| table.cell(row, c).to_string())
        };
        let raw_line_location = cell(Some(mapping.line_location));
        let raw_store_location = cell(mapping.store_location);
        Self {
            part_no: cell(Some(mapping.part_no)),
            description: cell(Some(mapping.description)),
            quantity_per_bin: cell(mapping.quantity_per_bin),
            line_location: parse_location(Some(&raw_line_location)),
            store_location: parse_location(Some(&raw_store_location)),
            raw_line_location,
            raw_store_location,
        }
    }

    /// The text serialized into the sticker's scannable code.
    pub fn code_text(&self) -> String {
        format!(
            "Part No: {}\nDescription: {}\nLocation: {}\nStore Location: {}\nQTY/BIN: {}",
            self.part_no,
            self.description,
            self.raw_line_location,
            self.raw_store_location,
            self.quantity_per_bin
        )
    }
}
