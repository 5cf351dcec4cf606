//! Capture decoding for FormatCam.
//!
//! This module provides functionality for:
//! - Decoding JPEG captures, with or without applying EXIF orientation
//! - Reading the exposure settings recorded by the camera
//! - Downscaling images for thumbnails and contact sheets
//!
//! All operations are synchronous and allocate fresh buffers; inputs are
//! never modified.

mod jpeg;
mod resize;
mod types;

pub use jpeg::{decode_jpeg, decode_jpeg_no_orientation, get_orientation, read_exposure};
pub use resize::{generate_thumbnail, resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, ExposureInfo, FilterType, Orientation};
