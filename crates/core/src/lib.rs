//! Tote label core library.
//!
//! Turns arbitrarily-named inventory tables into fully laid-out sticker
//! labels. The main entry points are [`resolve`] for mapping column names to
//! sticker fields, [`parse_location`] for decomposing location strings, and
//! [`compose`] for producing the fixed-geometry label for one row.
//!
//! Everything in this crate is pure: no I/O, no global state. Painting the
//! composed labels into a document is the renderer's job.

#![warn(missing_docs)]

/// Column-name heuristics: map table headers to sticker fields.
pub mod columns;
/// Fixed-geometry label composition.
pub mod layout;
/// Location string decomposition into fixed slots.
pub mod locparse;
/// Table and sticker record data model.
pub mod table;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Column resolver
pub use columns::{ColumnMapping, ResolveError, resolve};

// Location parser
pub use locparse::{LocationSlots, SLOT_COUNT, parse_location};

// Data model
pub use table::{StickerRecord, Table};

// Label composer
pub use layout::{Align, Cell, Font, Label, LabelGeometry, Rect, TextStyle, compose};
