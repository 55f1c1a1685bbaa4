//! Loaders that turn inventory exports into [`Table`]s.
//!
//! The rest of the pipeline only ever sees a [`Table`]: ordered header names
//! plus string cells. These loaders own the file-format concerns (CSV
//! dialects, spreadsheet cell types) and the string coercion at the
//! boundary.

#![warn(missing_docs)]

mod delimited;
mod spreadsheet;

pub use delimited::load_csv;
pub use spreadsheet::load_spreadsheet;

use std::ffi::OsStr;
use std::path::Path;

use thiserror::Error;
use tote_labels_core::Table;

/// Errors that can occur while loading a tabular file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension maps to no supported loader.
    #[error("cannot detect file format for '{name}' (expected csv, xlsx, xlsm, xlsb, xls, or ods)")]
    UnknownFormat {
        /// The offending path, for the error message.
        name: String,
    },

    /// The workbook contains no worksheets.
    #[error("spreadsheet contains no worksheets")]
    NoWorksheet,

    /// Delimited-text parsing failed.
    #[error("invalid delimited file: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet parsing failed.
    #[error("invalid spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Load a table from `path`, dispatching on the file extension
/// (case-insensitive).
pub fn load_table(path: &Path) -> Result<Table, IngestError> {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => load_csv(path),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods") => load_spreadsheet(path),
        _ => Err(IngestError::UnknownFormat {
            name: path.display().to_string(),
        }),
    }
}
