//! Crop and orientation bindings for in-browser previews.

use formatcam_core::decode::Orientation;
use formatcam_core::transform;
use wasm_bindgen::prelude::*;

use crate::types::{parse_ratio, to_js_error, JsDecodedImage};

fn crop_bounds(width: u32, height: u32, ratio_label: &str) -> Result<Vec<u32>, String> {
    let ratio = parse_ratio(ratio_label)?;
    let crop = transform::compute_crop(width, height, ratio.ratio()).map_err(|e| e.to_string())?;
    Ok(crop.rect.bounds().to_vec())
}

fn cropped(image: &JsDecodedImage, ratio_label: &str) -> Result<JsDecodedImage, String> {
    let ratio = parse_ratio(ratio_label)?;
    let src = image.to_decoded()?;
    transform::crop_to_ratio(&src, ratio.ratio())
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| e.to_string())
}

/// Centered crop of a `width x height` image as `[left, top, right, bottom]`.
///
/// ```typescript
/// compute_crop(1080, 1920, "6x9"); // [0, 600, 1080, 1320]
/// ```
#[wasm_bindgen]
pub fn compute_crop(width: u32, height: u32, ratio_label: &str) -> Result<Vec<u32>, JsValue> {
    crop_bounds(width, height, ratio_label).map_err(to_js_error)
}

/// Crop an upright image to a format.
#[wasm_bindgen]
pub fn crop_to_ratio(image: &JsDecodedImage, ratio_label: &str) -> Result<JsDecodedImage, JsValue> {
    cropped(image, ratio_label).map_err(to_js_error)
}

/// Apply an EXIF orientation value (1-8). Unknown values leave the image
/// unchanged.
#[wasm_bindgen]
pub fn apply_orientation(image: &JsDecodedImage, orientation: u32) -> Result<JsDecodedImage, JsValue> {
    let src = image.to_decoded().map_err(to_js_error)?;
    let upright = transform::apply_orientation(src, Orientation::from(orientation));
    Ok(JsDecodedImage::from_decoded(upright))
}
