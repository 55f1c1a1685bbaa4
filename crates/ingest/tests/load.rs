//! Tests for the tabular loaders, using generated CSV and XLSX fixtures.

use std::fs;
use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tote_labels_ingest::{IngestError, load_table};

fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_path(dir, name);
    fs::write(&path, content).expect("write csv fixture");
    path
}

#[test]
fn csv_loads_headers_and_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "inventory.csv",
        "Part Number,Description,Location\nPN-1,Bolt,A_1\nPN-2,Nut,B_2\n",
    );
    let table = load_table(&path).expect("loadable csv");
    assert_eq!(table.columns(), ["Part Number", "Description", "Location"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), "PN-1");
    assert_eq!(table.cell(1, 2), "B_2");
}

#[test]
fn short_csv_rows_are_padded_to_the_header_width() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "ragged.csv", "A,B,C\nonly-one\nx,y,z\n");
    let table = load_table(&path).expect("flexible reader accepts ragged rows");
    assert_eq!(table.cell(0, 0), "only-one");
    assert_eq!(table.cell(0, 1), "");
    assert_eq!(table.cell(0, 2), "");
    assert_eq!(table.cell(1, 1), "y");
}

#[test]
fn xlsx_loads_like_the_equivalent_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let xlsx_path = temp_path(&dir, "inventory.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["Part Number", "Description", "Qty/Bin"].iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .expect("write header");
    }
    sheet.write_string(1, 0, "PN-9").expect("write cell");
    sheet.write_string(1, 1, "Washer").expect("write cell");
    sheet.write_number(1, 2, 12.0).expect("write cell");
    workbook.save(&xlsx_path).expect("save xlsx fixture");

    let table = load_table(&xlsx_path).expect("loadable xlsx");
    assert_eq!(table.columns(), ["Part Number", "Description", "Qty/Bin"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0), "PN-9");
    assert_eq!(
        table.cell(0, 2),
        "12",
        "integral floats coerce without a trailing .0"
    );
}

#[test]
fn fractional_numbers_keep_their_fraction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let xlsx_path = temp_path(&dir, "fractions.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Qty").expect("write header");
    sheet.write_number(1, 0, 2.5).expect("write cell");
    workbook.save(&xlsx_path).expect("save xlsx fixture");

    let table = load_table(&xlsx_path).expect("loadable xlsx");
    assert_eq!(table.cell(0, 0), "2.5");
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "inventory.txt", "A,B\n1,2\n");
    assert!(matches!(
        load_table(&path),
        Err(IngestError::UnknownFormat { .. })
    ));
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "INVENTORY.CSV", "A,B\n1,2\n");
    let table = load_table(&path).expect("upper-cased extension still loads");
    assert_eq!(table.row_count(), 1);
}
