//! Capture transforms: orientation correction and format cropping.
//!
//! # Transform Order
//!
//! A capture goes through these steps before it is saved:
//! 1. Orientation (EXIF rotation/mirroring, so the buffer is upright)
//! 2. Crop to the selected aspect ratio
//!
//! # Coordinate System
//!
//! - Crop rectangles are in whole pixels of the upright image
//! - Origin is top-left corner

mod crop;
mod orientation;

pub use crop::{apply_crop, compute_crop, crop_oriented, crop_to_ratio, CropResult};
pub use orientation::apply_orientation;
