mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tote_labels_core::{ColumnMapping, LabelGeometry, StickerRecord, Table};
use tote_labels_ingest::load_table;
use tote_labels_render::{NullProgress, ProgressSink, assemble};

use crate::report::Format;

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "tote",
    version,
    about = "Tote label generator - turn inventory exports into printable sticker PDFs"
)]
struct Cli {
    /// Output mode: "pretty" for human-readable terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Table inspection (progressive: preview → columns) ────────────
    /// Show row/column counts and the first rows of a table file.
    Preview {
        file: PathBuf,
        /// Number of data rows to show.
        #[arg(long, default_value_t = 10)]
        rows: usize,
    },

    /// Show which table columns feed which sticker fields.
    Columns { file: PathBuf },

    // ── Generation ───────────────────────────────────────────────────
    /// Generate the sticker PDF, one page per table row.
    Generate {
        file: PathBuf,
        /// Output path. Defaults to `<input stem>_sticker_labels.pdf` next
        /// to the input.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Preview { file, rows } => cmd_preview(&file, rows, format)?,
        Cmd::Columns { file } => cmd_columns(&file, format)?,
        Cmd::Generate { file, out } => cmd_generate(&file, out, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_preview(file: &Path, rows: usize, format: Format) -> Result<()> {
    let table = load(file)?;

    match format {
        Format::Json => {
            let preview: Vec<&[String]> = table.rows().take(rows).collect();
            let out = serde_json::json!({
                "rows": table.row_count(),
                "columns": table.columns(),
                "preview": preview,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!("rows: {}", table.row_count());
            println!("columns: {}", table.columns().join(", "));
            for row in table.rows().take(rows) {
                println!("{}", row.join(" | "));
            }
        }
    }

    Ok(())
}

fn cmd_columns(file: &Path, format: Format) -> Result<()> {
    let table = load(file)?;
    let mapping = table
        .resolve()
        .context("cannot resolve sticker columns from this table")?;
    let report = MappingReport::new(&table, &mapping);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Pretty => {
            let shown = |name: Option<&str>| name.unwrap_or("(none)").to_string();
            println!("using columns:");
            println!("  part_no:         {}", report.part_no);
            println!("  description:     {}", report.description);
            println!("  qty/bin:         {}", shown(report.quantity_per_bin));
            println!("  line_location:   {}", report.line_location);
            println!("  store_location:  {}", shown(report.store_location));
        }
    }

    Ok(())
}

fn cmd_generate(file: &Path, out: Option<PathBuf>, format: Format) -> Result<()> {
    let table = load(file)?;
    let mapping = table
        .resolve()
        .context("cannot resolve sticker columns from this table")?;
    let records: Vec<StickerRecord> = table.records(&mapping).collect();
    let geometry = LabelGeometry::default();

    let bytes = match format {
        // Progress lines go to stderr so stdout stays clean for data.
        Format::Pretty => assemble(&records, &geometry, &mut StderrProgress)?,
        Format::Json => assemble(&records, &geometry, &mut NullProgress)?,
    };

    let out_path = out.unwrap_or_else(|| default_output_path(file));
    fs::write(&out_path, &bytes)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "status": "generated",
                "file": out_path.display().to_string(),
                "pages": records.len(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            eprintln!("generated {} ({} pages)", out_path.display(), records.len());
        }
    }

    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Resolved column names for one table, in report form.
#[derive(Debug, Serialize)]
struct MappingReport<'a> {
    part_no: &'a str,
    description: &'a str,
    quantity_per_bin: Option<&'a str>,
    line_location: &'a str,
    store_location: Option<&'a str>,
}

impl<'a> MappingReport<'a> {
    fn new(table: &'a Table, mapping: &ColumnMapping) -> Self {
        let name = |i: usize| table.columns()[i].as_str();
        Self {
            part_no: name(mapping.part_no),
            description: name(mapping.description),
            quantity_per_bin: mapping.quantity_per_bin.map(name),
            line_location: name(mapping.line_location),
            store_location: mapping.store_location.map(name),
        }
    }
}

/// Reports assembly progress line-by-line on stderr.
struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn progress(&mut self, _done: usize, _total: usize, status: &str) {
        eprintln!("{status}");
    }
}

/// `<input stem>_sticker_labels.pdf`, next to the input file.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("labels");
    input.with_file_name(format!("{stem}_sticker_labels.pdf"))
}

fn load(file: &Path) -> Result<Table> {
    load_table(file).with_context(|| format!("failed to load '{}'", file.display()))
}
