//! Column resolution: map arbitrary table headers to sticker fields.
//!
//! Inventory exports name their columns however they like ("Part Number",
//! "PARTNO", "Item #"). Resolution runs an ordered rule list per field over
//! the upper-cased header names; the first rule with a matching column wins.
//! The rule lists are plain data so each rule can be exercised on its own.

use serde::Serialize;
use thiserror::Error;

// ── Errors ──────────────────────────────────────────────────────────────

/// Errors that can occur while resolving table headers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The table has no columns at all, so not even the positional
    /// fallbacks can apply.
    #[error("cannot resolve columns: the table has no header columns")]
    EmptyHeader,
}

// ── Rules ───────────────────────────────────────────────────────────────

/// One header-matching rule, evaluated against an upper-cased column name.
#[derive(Debug, Clone, Copy)]
pub enum NameRule {
    /// Matches when the name contains every needle in the first list and,
    /// if the second list is non-empty, at least one needle from it.
    Contains(&'static [&'static str], &'static [&'static str]),
    /// Matches when the whole name equals one of the listed names.
    Equals(&'static [&'static str]),
}

impl NameRule {
    /// Whether `name` (already upper-cased) satisfies this rule.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameRule::Contains(all, any) => {
                all.iter().all(|n| name.contains(n))
                    && (any.is_empty() || any.iter().any(|n| name.contains(n)))
            }
            NameRule::Equals(names) => names.iter().any(|n| *n == name),
        }
    }
}

/// Rules for the part-number column, in priority order.
pub const PART_NO_RULES: &[NameRule] = &[
    NameRule::Contains(&["PART"], &["NO", "NUM", "#"]),
    NameRule::Equals(&["PARTNO", "PART"]),
];

/// Rules for the description column.
pub const DESCRIPTION_RULES: &[NameRule] = &[
    NameRule::Contains(&["DESC"], &[]),
    NameRule::Contains(&["NAME"], &[]),
];

/// Rules for the quantity-per-bin column. The dedicated "QTY/BIN" spellings
/// outrank a generic quantity column.
pub const QUANTITY_PER_BIN_RULES: &[NameRule] = &[
    NameRule::Contains(&[], &["QTY/BIN", "QTY_BIN", "QTYBIN"]),
    NameRule::Contains(&["QTY", "BIN"], &[]),
    NameRule::Contains(&["QTY"], &[]),
    NameRule::Contains(&["QUANTITY"], &[]),
];

/// Rules for the line-location column.
pub const LINE_LOCATION_RULES: &[NameRule] =
    &[NameRule::Contains(&[], &["LOC", "POS", "LOCATION"])];

/// Rules for the store-location column.
pub const STORE_LOCATION_RULES: &[NameRule] = &[
    NameRule::Contains(&["STORE", "LOC"], &[]),
    NameRule::Contains(&["STORELOCATION"], &[]),
];

/// Index of the first column matched by the first applicable rule.
fn first_match(names: &[String], rules: &[NameRule]) -> Option<usize> {
    rules
        .iter()
        .find_map(|rule| names.iter().position(|name| rule.matches(name)))
}

// ── Mapping ─────────────────────────────────────────────────────────────

/// Resolved sticker fields, as indices into the table's column list.
///
/// `part_no`, `description`, and `line_location` always resolve (positional
/// fallbacks guarantee it); the two optional fields stay unmapped when no
/// header matches and render as empty values downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    /// Column holding the part identifier.
    pub part_no: usize,
    /// Column holding the human-readable description.
    pub description: usize,
    /// Column holding the quantity per bin, when present.
    pub quantity_per_bin: Option<usize>,
    /// Column holding the line location string.
    pub line_location: usize,
    /// Column holding the store location string, when present.
    pub store_location: Option<usize>,
}

/// Resolve `names` to a [`ColumnMapping`].
///
/// Matching is case-insensitive; the caller's names are not modified.
/// Fallbacks when no rule matches: column 0 for the part number, column 1
/// (or the part-number column) for the description, column 2 (or the
/// description column) for the line location.
///
/// The only failure is an empty header row; every non-empty table resolves.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<ColumnMapping, ResolveError> {
    if names.is_empty() {
        return Err(ResolveError::EmptyHeader);
    }
    let upper: Vec<String> = names.iter().map(|n| n.as_ref().to_uppercase()).collect();

    let part_no = first_match(&upper, PART_NO_RULES).unwrap_or(0);
    let description = first_match(&upper, DESCRIPTION_RULES)
        .unwrap_or(if upper.len() > 1 { 1 } else { part_no });
    let quantity_per_bin = first_match(&upper, QUANTITY_PER_BIN_RULES);
    let line_location = first_match(&upper, LINE_LOCATION_RULES)
        .unwrap_or(if upper.len() > 2 { 2 } else { description });
    let store_location = first_match(&upper, STORE_LOCATION_RULES);

    Ok(ColumnMapping {
        part_no,
        description,
        quantity_per_bin,
        line_location,
        store_location,
    })
}
