//! Spreadsheet loading via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tote_labels_core::Table;

use crate::IngestError;

/// Load the first worksheet of a spreadsheet: first row is the header row,
/// everything after is data.
pub fn load_spreadsheet(path: &Path) -> Result<Table, IngestError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)??;

    let mut rows_iter = range.rows();
    let columns: Vec<String> = rows_iter
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<String>> = rows_iter
        .map(|cells| cells.iter().map(cell_text).collect())
        .collect();
    Ok(Table::new(columns, rows))
}

/// String form of a spreadsheet cell. Integral floats print without the
/// trailing `.0` so numeric part numbers survive the Excel round-trip.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        other => other.to_string(),
    }
}
