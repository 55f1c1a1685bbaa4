//! Document assembly: paint composed labels into a paginated PDF.
//!
//! [`assemble`] is the batch entry point: one page per sticker record, the
//! same decorative border on every page, and a progress callback after each
//! row. A row whose code image cannot be produced degrades to the "QR"
//! placeholder; only document-level failures abort the run.

#![warn(missing_docs)]

mod paint;
mod progress;

pub use progress::{NullProgress, ProgressSink};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tote_labels_codec::encode;
use tote_labels_core::{LabelGeometry, StickerRecord, compose};

/// Errors that abort document assembly.
///
/// Per-row code failures are not represented here: they degrade to the
/// placeholder inside the batch loop.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PDF construction or serialization failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Assemble the sticker document for `records`.
///
/// Each record gets its own page. Progress is reported to `progress` after
/// each row; the sink must never influence the outcome. Zero records yield
/// a valid zero-page document, not an error.
///
/// On success the finished PDF is returned as bytes, ready for delivery;
/// on failure nothing is emitted.
pub fn assemble(
    records: &[StickerRecord],
    geometry: &LabelGeometry,
    progress: &mut dyn ProgressSink,
) -> Result<Vec<u8>, RenderError> {
    let doc = PdfDocument::empty("Tote Sticker Labels");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    let total = records.len();
    for (index, record) in records.iter().enumerate() {
        let (page, layer) = doc.add_page(
            Mm(geometry.page_width),
            Mm(geometry.page_height),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        // Row-local fallback: a record whose payload exceeds QR capacity
        // still gets its sticker, with the placeholder in the code region.
        let code = encode(&record.code_text()).ok();
        let label = compose(record, code.is_some(), geometry);

        paint::draw_border(&layer, geometry);
        paint::paint_label(&layer, &regular, &bold, geometry, &label);
        if let (Some(rect), Some(code)) = (label.code_rect, code.as_ref()) {
            paint::embed_code(&layer, code, &rect);
        }

        let done = index + 1;
        progress.progress(done, total, &format!("creating sticker {done} of {total}"));
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
