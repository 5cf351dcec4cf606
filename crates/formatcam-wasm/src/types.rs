//! WASM-compatible wrapper types and argument parsing.

use formatcam_core::decode::DecodedImage;
use formatcam_core::grid::GridVariant;
use formatcam_core::ratio::AspectRatio;
use wasm_bindgen::prelude::*;

/// A decoded RGB image held in WASM memory.
///
/// `pixels()` copies the buffer out to a `Uint8Array`; keep images on the
/// WASM side when chaining several operations.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// RGB data, 3 bytes per pixel, row-major.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Checked conversion; the buffer may have come from JavaScript.
    pub(crate) fn to_decoded(&self) -> Result<DecodedImage, String> {
        DecodedImage::from_raw(self.width, self.height, self.pixels.clone()).map_err(|e| e.to_string())
    }
}

/// Parse a format label such as `"6x9"`.
pub(crate) fn parse_ratio(label: &str) -> Result<AspectRatio, String> {
    label.parse().map_err(|e: formatcam_core::ratio::UnknownRatio| e.to_string())
}

/// Parse a grid label such as `"Thirds+"`.
pub(crate) fn parse_grid(label: &str) -> Result<GridVariant, String> {
    GridVariant::from_label(label).ok_or_else(|| format!("Unknown grid: {label}"))
}

pub(crate) fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_decoded_image_accessors() {
        let img = JsDecodedImage::new(4, 2, vec![7u8; 4 * 2 * 3]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.byte_length(), 24);
    }

    #[test]
    fn test_to_decoded_checks_buffer() {
        assert!(JsDecodedImage::new(2, 2, vec![0; 12]).to_decoded().is_ok());
        assert!(JsDecodedImage::new(2, 2, vec![0; 5]).to_decoded().is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_ratio("6x12"), Ok(AspectRatio::Wide));
        assert!(parse_ratio("16:9").is_err());
        assert_eq!(parse_grid("Thirds+"), Ok(GridVariant::ThirdsIntersections));
        assert_eq!(parse_grid("nope"), Err("Unknown grid: nope".to_string()));
    }
}
