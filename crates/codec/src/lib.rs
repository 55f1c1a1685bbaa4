//! Scannable code generation for tote stickers.
//!
//! Encodes a sticker's serialized field text as a QR symbol rendered to an
//! 8-bit greyscale pixel buffer. The buffer is exposed raw (plus a PNG
//! serialization) so consumers can embed it without depending on an image
//! library themselves.

#![warn(missing_docs)]

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Pixels per QR module. At this density a version-1 symbol prints crisply
/// at the sticker's 1.5 cm code region.
pub const MODULE_PIXELS: u32 = 10;

/// Errors that can occur while producing a code image.
#[derive(Debug, Error)]
pub enum CodeError {
    /// The payload could not be encoded as a QR symbol (typically: too
    /// large for the highest symbol version).
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// PNG serialization failed.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// A rendered code symbol: square 8-bit greyscale pixels, black modules on
/// white, including the quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CodeImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major 8-bit greyscale pixel data, `width * height` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Serialize as a PNG byte stream.
    pub fn to_png(&self) -> Result<Vec<u8>, CodeError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            &self.pixels,
            self.width,
            self.height,
            ExtendedColorType::L8,
        )?;
        Ok(out)
    }
}

/// Encode `text` as a QR code image.
///
/// Error-correction level M, [`MODULE_PIXELS`] per module, and the
/// standard 4-module quiet zone on all sides. Fails only when the payload
/// exceeds QR capacity; callers are expected to fall back to a textual
/// placeholder rather than abort a batch.
pub fn encode(text: &str) -> Result<CodeImage, CodeError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();
    let (width, height) = image.dimensions();
    Ok(CodeImage {
        width,
        height,
        pixels: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_renders_a_square_symbol() {
        let img = encode("PN-1").expect("encodable");
        assert_eq!(img.width(), img.height());
        // Version 1 symbol: 21 modules + 2 * 4 quiet-zone modules.
        assert_eq!(img.width(), (21 + 8) * MODULE_PIXELS);
        assert_eq!(img.pixels().len(), (img.width() * img.height()) as usize);
    }

    #[test]
    fn pixels_are_black_and_white_only() {
        let img = encode("ZN1_A_07_3").expect("encodable");
        assert!(img.pixels().iter().all(|&p| p == 0 || p == 255));
        assert!(img.pixels().iter().any(|&p| p == 0), "has dark modules");
    }

    #[test]
    fn png_serialization_carries_the_magic_header() {
        let png = encode("hello").expect("encodable").to_png().expect("png");
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let huge = "X".repeat(5000);
        assert!(matches!(encode(&huge), Err(CodeError::Qr(_))));
    }
}
