//! Low-level painting of composed labels onto a printpdf layer.

use printpdf::{
    Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfLayerReference, Point, Px, Rgb,
};
use tote_labels_codec::CodeImage;
use tote_labels_core::{Align, Cell, Font, Label, LabelGeometry, Rect};

const PT_TO_MM: f32 = 0.352_778;

/// Average Helvetica glyph advance as a fraction of the font size. Builtin
/// fonts expose no metrics at this layer, so centering works from this
/// approximation.
const AVG_GLYPH_EM: f32 = 0.52;

/// Inset from the left cell edge for left-aligned text.
const LEFT_PAD_MM: f32 = 1.0;

/// Draw the decorative rectangle around the content-box area. Identical on
/// every page.
pub(crate) fn draw_border(layer: &PdfLayerReference, geo: &LabelGeometry) {
    stroke_rect(layer, &geo.border_rect(), geo.border_line_width);
}

/// Paint every cell of a composed label: borders first, then text.
pub(crate) fn paint_label(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    geo: &LabelGeometry,
    label: &Label,
) {
    for cell in &label.cells {
        if cell.bordered {
            stroke_rect(layer, &cell.rect, geo.grid_line_width);
        }
        let font = match cell.style.font {
            Font::Regular => regular,
            Font::Bold => bold,
        };
        draw_cell_text(layer, font, cell);
    }
}

/// Place a code image into its region, scaled to the region's physical size.
pub(crate) fn embed_code(layer: &PdfLayerReference, code: &CodeImage, rect: &Rect) {
    let image = Image::from(ImageXObject {
        width: Px(code.width() as usize),
        height: Px(code.height() as usize),
        color_space: ColorSpace::Greyscale,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: code.pixels().to_vec(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // DPI such that `width` pixels span exactly `rect.width` millimetres.
    let dpi = code.width() as f32 / (rect.width / 25.4);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(rect.x)),
            translate_y: Some(Mm(rect.y)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

fn draw_cell_text(layer: &PdfLayerReference, font: &IndirectFontRef, cell: &Cell) {
    if cell.text.is_empty() {
        return;
    }
    let size = cell.style.size_pt;
    let size_mm = size * PT_TO_MM;

    // Baseline sits half a cap height below the vertical center.
    let baseline = cell.rect.y + cell.rect.height / 2.0 - 0.35 * size_mm;
    let x = match cell.style.align {
        Align::Left => cell.rect.x + LEFT_PAD_MM,
        Align::Center => {
            let text_w = cell.text.chars().count() as f32 * size_mm * AVG_GLYPH_EM;
            cell.rect.x + ((cell.rect.width - text_w) / 2.0).max(LEFT_PAD_MM / 2.0)
        }
    };

    layer.use_text(&cell.text, size, Mm(x), Mm(baseline), font);
}

fn stroke_rect(layer: &PdfLayerReference, rect: &Rect, width_pt: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(width_pt);

    let points = vec![
        (Point::new(Mm(rect.x), Mm(rect.y)), false),
        (Point::new(Mm(rect.x + rect.width), Mm(rect.y)), false),
        (
            Point::new(Mm(rect.x + rect.width), Mm(rect.y + rect.height)),
            false,
        ),
        (Point::new(Mm(rect.x), Mm(rect.y + rect.height)), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: true,
    });
}
