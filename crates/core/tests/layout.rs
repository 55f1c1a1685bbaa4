//! Tests for label composition.
//!
//! The composer is pure, so these tests pin down the exact geometry the
//! painter receives: cell counts, positions, truncation, and the code
//! region fallback.

use tote_labels_core::{
    Align, Font, LabelGeometry, SLOT_COUNT, StickerRecord, compose, parse_location,
};

const EPS: f32 = 1e-4;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn sample_record() -> StickerRecord {
    StickerRecord {
        part_no: "PN-1044".to_string(),
        description: "M8 flange bolt, zinc".to_string(),
        quantity_per_bin: "24".to_string(),
        raw_line_location: "ZN1_A_07_3".to_string(),
        raw_store_location: "ST 4 B".to_string(),
        line_location: parse_location(Some("ZN1_A_07_3")),
        store_location: parse_location(Some("ST 4 B")),
    }
}

// ─── Structure ───────────────────────────────────────────────────────────────

#[test]
fn composed_label_has_the_fixed_cell_set() {
    let label = compose(&sample_record(), true, &LabelGeometry::default());
    // 3 label/value pairs + 2 location rows of (1 label + 7 slots).
    assert_eq!(label.cells.len(), 6 + 2 * (1 + SLOT_COUNT));
    assert!(label.code_rect.is_some());
    assert!(label.cells.iter().all(|c| c.bordered));
}

#[test]
fn missing_code_becomes_a_placeholder_cell() {
    let label = compose(&sample_record(), false, &LabelGeometry::default());
    assert!(label.code_rect.is_none());
    let placeholder = label.cells.last().expect("placeholder appended last");
    assert_eq!(placeholder.text, "QR");
    assert_eq!(placeholder.style.font, Font::Bold);
    assert!(!placeholder.bordered, "the code region has no grid border");
    assert_eq!(label.cells.len(), 6 + 2 * (1 + SLOT_COUNT) + 1);
}

#[test]
fn slot_cells_carry_the_parsed_slots_in_order() {
    let record = sample_record();
    let label = compose(&record, true, &LabelGeometry::default());
    let after = |tag: &str| {
        let at = label
            .cells
            .iter()
            .position(|c| c.text == tag)
            .unwrap_or_else(|| panic!("{tag} cell present"));
        label.cells[at + 1..at + 1 + SLOT_COUNT]
            .iter()
            .map(|c| c.text.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(after("S.LOC"), record.store_location);
    assert_eq!(after("L.LOC"), record.line_location);
}

// ─── Truncation ──────────────────────────────────────────────────────────────

#[test]
fn long_description_is_cut_with_ellipsis() {
    let mut record = sample_record();
    record.description = "X".repeat(31);
    let label = compose(&record, true, &LabelGeometry::default());
    let desc_value = &label.cells[3];
    assert_eq!(desc_value.style.align, Align::Left);
    assert_eq!(desc_value.text, format!("{}...", "X".repeat(30)));
}

#[test]
fn thirty_character_description_is_untouched() {
    let mut record = sample_record();
    record.description = "Y".repeat(30);
    let label = compose(&record, true, &LabelGeometry::default());
    assert_eq!(label.cells[3].text, record.description);
}

// ─── Geometry ────────────────────────────────────────────────────────────────

#[test]
fn border_rect_matches_the_content_box() {
    let geo = LabelGeometry::default();
    let border = geo.border_rect();
    assert!(close(border.x, 14.0));
    assert!(close(border.y, 112.0));
    assert!(close(border.width, 80.0));
    assert!(close(border.height, 30.0));
}

#[test]
fn rows_stack_downward_from_the_box_top() {
    let geo = LabelGeometry::default();
    let label = compose(&sample_record(), true, &geo);

    // Part row label: directly under the box top, label-column wide.
    let part_label = &label.cells[0];
    assert_eq!(part_label.text, "Part No");
    assert!(close(part_label.rect.x, geo.box_left));
    assert!(close(part_label.rect.y, geo.box_top() - geo.header_row_height));
    assert!(close(part_label.rect.width, geo.main_width() * geo.header_col_ratio));

    // The two location rows fill the remainder of the grid.
    let sloc = label.cells.iter().find(|c| c.text == "S.LOC").unwrap();
    let lloc = label.cells.iter().find(|c| c.text == "L.LOC").unwrap();
    let grid_top = geo.header_row_height + geo.desc_row_height + geo.qty_row_height;
    assert!(close(
        sloc.rect.y,
        geo.box_top() - grid_top - geo.location_row_height
    ));
    assert!(close(lloc.rect.y, sloc.rect.y - geo.location_row_height));
}

#[test]
fn code_region_is_vertically_centered_on_the_right() {
    let geo = LabelGeometry::default();
    let label = compose(&sample_record(), true, &geo);
    let code = label.code_rect.expect("code present");
    assert!(close(code.x, geo.box_left + geo.main_width()));
    assert!(close(
        code.y,
        geo.box_bottom() + (geo.box_height - geo.code_side) / 2.0
    ));
    assert!(close(code.width, geo.code_side));
    assert!(close(code.height, geo.code_side));
}

#[test]
fn slot_widths_follow_the_fixed_ratios() {
    let geo = LabelGeometry::default();
    let label = compose(&sample_record(), true, &geo);
    let at = label
        .cells
        .iter()
        .position(|c| c.text == "S.LOC")
        .expect("S.LOC cell");
    let slot_cells = &label.cells[at + 1..at + 1 + SLOT_COUNT];

    let inner_w = geo.main_width() * geo.value_col_ratio;
    let total: f32 = geo.slot_ratios.iter().sum();
    for (cell, ratio) in slot_cells.iter().zip(geo.slot_ratios) {
        assert!(close(cell.rect.width, ratio * inner_w / total));
    }
    let sum: f32 = slot_cells.iter().map(|c| c.rect.width).sum();
    assert!(close(sum, inner_w));

    // Widest slot is the second one (ratio 1.9).
    let widest = slot_cells
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.rect.width.total_cmp(&b.1.rect.width))
        .map(|(i, _)| i);
    assert_eq!(widest, Some(1));
}
