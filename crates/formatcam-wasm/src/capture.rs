//! Capture pipeline binding.

use formatcam_core::capture::{self, ProcessedCapture};
use wasm_bindgen::prelude::*;

use crate::types::{parse_ratio, to_js_error};

/// A cropped capture plus the exposure read from the original file.
#[wasm_bindgen]
pub struct JsCapture {
    inner: ProcessedCapture,
}

#[wasm_bindgen]
impl JsCapture {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// EXIF orientation value that was applied (1-8).
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.inner.orientation as u8
    }

    #[wasm_bindgen(getter)]
    pub fn iso(&self) -> Option<u32> {
        self.inner.exposure.iso
    }

    #[wasm_bindgen(getter)]
    pub fn aperture(&self) -> Option<f32> {
        self.inner.exposure.aperture
    }

    /// Exposure time in seconds.
    #[wasm_bindgen(getter)]
    pub fn exposure_time(&self) -> Option<f64> {
        self.inner.exposure.exposure_time
    }

    /// Encoded JPEG bytes (copied to a `Uint8Array`).
    pub fn jpeg(&self) -> Vec<u8> {
        self.inner.jpeg.clone()
    }
}

fn run(bytes: &[u8], ratio_label: &str, quality: u8) -> Result<JsCapture, String> {
    let ratio = parse_ratio(ratio_label)?;
    capture::process_capture(bytes, ratio, quality)
        .map(|inner| JsCapture { inner })
        .map_err(|e| e.to_string())
}

/// Crop captured JPEG bytes to a format and re-encode them.
///
/// ```typescript
/// const shot = process_capture(new Uint8Array(await blob.arrayBuffer()), "6x6", 100);
/// await save(shot.jpeg());
/// ```
#[wasm_bindgen]
pub fn process_capture(bytes: &[u8], ratio_label: &str, quality: u8) -> Result<JsCapture, JsValue> {
    run(bytes, ratio_label, quality).map_err(to_js_error)
}
