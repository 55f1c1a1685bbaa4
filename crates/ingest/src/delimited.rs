//! CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use tote_labels_core::Table;

use crate::IngestError;

/// Load a CSV file: first record is the header row, everything after is
/// data. Rows with a deviating field count are accepted and normalized to
/// the header width by [`Table::new`].
pub fn load_csv(path: &Path) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table::new(columns, rows))
}
