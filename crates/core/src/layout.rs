//! Fixed-geometry label composition.
//!
//! [`compose`] turns one [`StickerRecord`] into a [`Label`]: a flat list of
//! positioned, styled, bordered cells plus the code region, with every
//! coordinate already absolute on the page. The painter that follows makes
//! no layout decisions of its own.
//!
//! All lengths are millimetres in PDF convention (origin at the bottom-left
//! of the page, y grows upward). Font sizes are points.

use crate::locparse::SLOT_COUNT;
use crate::table::StickerRecord;

// ── Geometry ────────────────────────────────────────────────────────────

/// Every design constant of the sticker, in one immutable bundle.
///
/// The layout is deliberately not configurable by end users; this struct
/// exists so the constants live in one place and tests can exercise the
/// composer against a known geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGeometry {
    /// Page width (one sticker per page).
    pub page_width: f32,
    /// Page height.
    pub page_height: f32,
    /// Content box width.
    pub box_width: f32,
    /// Content box height.
    pub box_height: f32,
    /// Left edge of the content box.
    pub box_left: f32,
    /// Distance from the top page edge down to the content box.
    pub box_top_offset: f32,
    /// Leading above the content box.
    pub top_spacer: f32,
    /// Side length of the square code region.
    pub code_side: f32,
    /// Height of the part-number row.
    pub header_row_height: f32,
    /// Height of the description row.
    pub desc_row_height: f32,
    /// Height of the quantity row.
    pub qty_row_height: f32,
    /// Height of each location row.
    pub location_row_height: f32,
    /// Label column share of the main-content width.
    pub header_col_ratio: f32,
    /// Value column share of the main-content width.
    pub value_col_ratio: f32,
    /// Relative widths of the seven location slot cells.
    pub slot_ratios: [f32; SLOT_COUNT],
    /// Stroke width of the decorative page border, in points.
    pub border_line_width: f32,
    /// Stroke width of cell borders, in points.
    pub grid_line_width: f32,
    /// Description length above which the text is cut and "..." appended.
    pub desc_max_chars: usize,
}

impl Default for LabelGeometry {
    fn default() -> Self {
        Self {
            page_width: 100.0,
            page_height: 150.0,
            box_width: 80.0,
            box_height: 30.0,
            box_left: 14.0,
            box_top_offset: 8.0,
            top_spacer: 3.0,
            code_side: 15.0,
            header_row_height: 6.0,
            desc_row_height: 8.0,
            qty_row_height: 5.0,
            location_row_height: 5.0,
            header_col_ratio: 0.22,
            value_col_ratio: 0.71,
            slot_ratios: [1.0, 1.9, 0.8, 0.8, 0.7, 0.7, 0.8],
            border_line_width: 1.5,
            grid_line_width: 1.0,
            desc_max_chars: 30,
        }
    }
}

impl LabelGeometry {
    /// Bottom edge of the content box.
    pub fn box_bottom(&self) -> f32 {
        self.page_height - self.box_height - self.box_top_offset
    }

    /// Top edge of the content box.
    pub fn box_top(&self) -> f32 {
        self.page_height - self.box_top_offset
    }

    /// Width of the main-content region (content box minus code region).
    pub fn main_width(&self) -> f32 {
        self.box_width - self.code_side
    }

    /// The rectangle of the decorative border drawn on every page.
    pub fn border_rect(&self) -> Rect {
        Rect {
            x: self.box_left,
            y: self.box_bottom(),
            width: self.box_width,
            height: self.box_height,
        }
    }
}

// ── Label model ─────────────────────────────────────────────────────────

/// An axis-aligned rectangle; `x`/`y` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// Typeface selector; the painter maps these to concrete font resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Body face.
    Regular,
    /// Emphasis face.
    Bold,
}

/// Horizontal text alignment within a cell. Vertical alignment is always
/// centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush against the cell's left padding.
    Left,
    /// Centered in the cell.
    Center,
}

/// How a cell's text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Typeface.
    pub font: Font,
    /// Size in points.
    pub size_pt: f32,
    /// Horizontal alignment.
    pub align: Align,
}

impl TextStyle {
    const fn bold(size_pt: f32) -> Self {
        Self {
            font: Font::Bold,
            size_pt,
            align: Align::Center,
        }
    }

    const fn regular(size_pt: f32, align: Align) -> Self {
        Self {
            font: Font::Regular,
            size_pt,
            align,
        }
    }
}

/// One positioned piece of text, optionally boxed by a border.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Absolute position on the page.
    pub rect: Rect,
    /// Text content; may be empty (borders still draw).
    pub text: String,
    /// How the text is drawn.
    pub style: TextStyle,
    /// Whether the cell outline is stroked.
    pub bordered: bool,
}

/// A fully laid-out sticker: cells to draw plus, when a code image exists,
/// the rectangle to place it in. When encoding failed the placeholder text
/// is already among the cells and `code_rect` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// All text/border cells, in paint order.
    pub cells: Vec<Cell>,
    /// Destination of the scannable code image, when one exists.
    pub code_rect: Option<Rect>,
}

// ── Composition ─────────────────────────────────────────────────────────

/// Lay out the label for one record.
///
/// Pure and total: `has_code == false` swaps the code region for a bold
/// "QR" placeholder instead of failing.
pub fn compose(record: &StickerRecord, has_code: bool, geo: &LabelGeometry) -> Label {
    let mut cells = Vec::new();

    let main_x = geo.box_left;
    let main_w = geo.main_width();
    let header_w = main_w * geo.header_col_ratio;
    let value_w = main_w * geo.value_col_ratio;
    let value_x = main_x + header_w;
    let mut top = geo.box_top();

    // Part number row.
    top -= geo.header_row_height;
    push_pair(
        &mut cells,
        Rect::row(main_x, top, header_w, geo.header_row_height),
        "Part No",
        Rect::row(value_x, top, value_w, geo.header_row_height),
        record.part_no.clone(),
        TextStyle::bold(9.0),
    );

    // Description row. Long descriptions are cut to fit the cell.
    top -= geo.desc_row_height;
    push_pair(
        &mut cells,
        Rect::row(main_x, top, header_w, geo.desc_row_height),
        "Desc",
        Rect::row(value_x, top, value_w, geo.desc_row_height),
        truncated(&record.description, geo.desc_max_chars),
        TextStyle::regular(7.0, Align::Left),
    );

    // Quantity row.
    top -= geo.qty_row_height;
    push_pair(
        &mut cells,
        Rect::row(main_x, top, header_w, geo.qty_row_height),
        "Q/B",
        Rect::row(value_x, top, value_w, geo.qty_row_height),
        record.quantity_per_bin.clone(),
        TextStyle::regular(8.0, Align::Center),
    );

    // Store and line location rows share one shape.
    top -= geo.location_row_height;
    push_location_row(&mut cells, geo, top, "S.LOC", &record.store_location);
    top -= geo.location_row_height;
    push_location_row(&mut cells, geo, top, "L.LOC", &record.line_location);

    // Code region: right edge of the content box, vertically centered.
    let code_rect = Rect {
        x: geo.box_left + main_w,
        y: geo.box_bottom() + (geo.box_height - geo.code_side) / 2.0,
        width: geo.code_side,
        height: geo.code_side,
    };
    let code_rect = if has_code {
        Some(code_rect)
    } else {
        cells.push(Cell {
            rect: code_rect,
            text: "QR".to_string(),
            style: TextStyle::bold(10.0),
            bordered: false,
        });
        None
    };

    Label { cells, code_rect }
}

impl Rect {
    /// A row-cell rectangle: bottom edge at `y`.
    fn row(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Push a bordered label/value cell pair.
fn push_pair(
    cells: &mut Vec<Cell>,
    label_rect: Rect,
    label: &str,
    value_rect: Rect,
    value: String,
    value_style: TextStyle,
) {
    cells.push(Cell {
        rect: label_rect,
        text: label.to_string(),
        style: TextStyle::bold(8.0),
        bordered: true,
    });
    cells.push(Cell {
        rect: value_rect,
        text: value,
        style: value_style,
        bordered: true,
    });
}

/// Push one labeled location row: the label cell plus the seven slot cells,
/// widths apportioned by the fixed ratios.
fn push_location_row(
    cells: &mut Vec<Cell>,
    geo: &LabelGeometry,
    y: f32,
    label: &str,
    slots: &[String; SLOT_COUNT],
) {
    let main_x = geo.box_left;
    let header_w = geo.main_width() * geo.header_col_ratio;
    let inner_w = geo.main_width() * geo.value_col_ratio;
    let height = geo.location_row_height;

    cells.push(Cell {
        rect: Rect::row(main_x, y, header_w, height),
        text: label.to_string(),
        style: TextStyle::bold(7.0),
        bordered: true,
    });

    let total: f32 = geo.slot_ratios.iter().sum();
    let mut x = main_x + header_w;
    for (ratio, slot) in geo.slot_ratios.iter().zip(slots) {
        let width = ratio * inner_w / total;
        cells.push(Cell {
            rect: Rect::row(x, y, width, height),
            text: slot.clone(),
            style: TextStyle::bold(8.0),
            bordered: true,
        });
        x += width;
    }
}

/// Cut `text` to `max_chars` characters, appending "..." only when it was
/// actually longer.
fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}
