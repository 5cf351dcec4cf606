//! Aspect-ratio cropping of captured frames.
//!
//! A capture is cut down to the largest centered region matching the
//! selected film format, so the saved photo matches what the viewfinder
//! frame showed. The crop never upsamples or pads.
//!
//! # Example
//!
//! ```ignore
//! // 1000x800 capture, square format: keep the middle 800x800
//! let crop = compute_crop(1000, 800, 1.0)?;
//! assert_eq!(crop.rect.bounds(), [100, 0, 900, 800]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode::{DecodedImage, Orientation};
use crate::geometry::{fit_centered_pixels, GeometryError, PixelRect};

use super::apply_orientation;

/// Where to cut a source image and how large the result will be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropResult {
    /// Region of the source to keep.
    pub rect: PixelRect,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl CropResult {
    /// True when the crop keeps the whole `width x height` source.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        self.rect == PixelRect::new(0, 0, width, height)
    }
}

/// Compute the centered crop of `ratio` (width / height) for a
/// `width x height` source.
///
/// # Errors
///
/// Returns `GeometryError` for a zero dimension or a non-positive ratio.
pub fn compute_crop(width: u32, height: u32, ratio: f64) -> Result<CropResult, GeometryError> {
    let rect = fit_centered_pixels(width, height, ratio)?;
    debug!(width, height, ratio, ?rect, "computed centered crop");
    Ok(CropResult {
        rect,
        width: rect.width,
        height: rect.height,
    })
}

/// Copy a pixel region out of an image.
///
/// The region is clamped to the image bounds; a region that lies entirely
/// outside produces an empty image.
pub fn apply_crop(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    if rect == PixelRect::new(0, 0, image.width, image.height) {
        return image.clone();
    }

    let left = rect.x.min(image.width);
    let top = rect.y.min(image.height);
    let right = rect.right().min(image.width);
    let bottom = rect.bottom().min(image.height);
    let out_width = right - left;
    let out_height = bottom - top;

    let src_stride = image.width as usize * 3;
    let row_len = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Crop an upright image to the centered region of `ratio`.
pub fn crop_to_ratio(image: &DecodedImage, ratio: f64) -> Result<DecodedImage, GeometryError> {
    let crop = compute_crop(image.width, image.height, ratio)?;
    Ok(apply_crop(image, crop.rect))
}

/// Rotate a sensor-order capture upright, then crop it to `ratio`.
///
/// Portrait and landscape framing are decided in upright space, so the
/// orientation must be applied first.
pub fn crop_oriented(
    image: DecodedImage,
    orientation: Orientation,
    ratio: f64,
) -> Result<DecodedImage, GeometryError> {
    let upright = apply_orientation(image, orientation);
    crop_to_ratio(&upright, ratio)
}
