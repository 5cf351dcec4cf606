//! Turning a raw camera capture into the saved, format-cropped photo.
//!
//! Pipeline:
//! 1. Read exposure EXIF from the original bytes (the re-encoded crop has none)
//! 2. Decode in sensor order and apply the EXIF orientation
//! 3. Crop to the selected format
//! 4. Re-encode as JPEG

use thiserror::Error;
use tracing::debug;

use crate::decode::{
    decode_jpeg_no_orientation, get_orientation, read_exposure, DecodeError, ExposureInfo,
    Orientation,
};
use crate::encode::{encode_image, EncodeError};
use crate::geometry::GeometryError;
use crate::ratio::AspectRatio;
use crate::transform::{apply_crop, apply_orientation, compute_crop, CropResult};

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A capture ready to be written over the original file.
#[derive(Debug, Clone)]
pub struct ProcessedCapture {
    /// Encoded JPEG of the cropped photo.
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Orientation that was applied before cropping.
    pub orientation: Orientation,
    /// Crop in upright pixel space.
    pub crop: CropResult,
    pub exposure: ExposureInfo,
}

/// Crop captured JPEG bytes to `ratio` and re-encode them at `quality`.
pub fn process_capture(
    bytes: &[u8],
    ratio: AspectRatio,
    quality: u8,
) -> Result<ProcessedCapture, CaptureError> {
    let exposure = read_exposure(bytes);
    let orientation = get_orientation(bytes);

    let sensor = decode_jpeg_no_orientation(bytes)?;
    debug!(
        width = sensor.width,
        height = sensor.height,
        ?orientation,
        "decoded capture"
    );

    let upright = apply_orientation(sensor, orientation);
    let crop = compute_crop(upright.width, upright.height, ratio.ratio())?;
    let cropped = apply_crop(&upright, crop.rect);
    drop(upright);

    let jpeg = encode_image(&cropped, quality)?;
    debug!(
        format = ratio.label(),
        width = cropped.width,
        height = cropped.height,
        bytes = jpeg.len(),
        "capture cropped"
    );

    Ok(ProcessedCapture {
        jpeg,
        width: cropped.width,
        height: cropped.height,
        orientation,
        crop,
        exposure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_jpeg;
    use crate::test_support::{gradient_image, jpeg_bytes, with_exif, ExifFields};

    #[test]
    fn test_square_crop_of_landscape_capture() {
        let bytes = jpeg_bytes(&gradient_image(100, 80));
        let out = process_capture(&bytes, AspectRatio::Square, 100).unwrap();

        assert_eq!((out.width, out.height), (80, 80));
        assert_eq!(out.crop.rect.bounds(), [10, 0, 90, 80]);
        assert_eq!(out.orientation, Orientation::Normal);

        let saved = decode_jpeg(&out.jpeg).unwrap();
        assert_eq!((saved.width, saved.height), (80, 80));
    }

    #[test]
    fn test_portrait_capture_is_rotated_before_crop() {
        // Landscape sensor buffer held in portrait.
        let bytes = with_exif(
            &jpeg_bytes(&gradient_image(120, 60)),
            ExifFields {
                orientation: 6,
                ..Default::default()
            },
        );
        let out = process_capture(&bytes, AspectRatio::FourByFive, 100).unwrap();

        // Upright is 60x120; 4x5 constrains by width: 60 x 75.
        assert_eq!(out.orientation, Orientation::Rotate90CW);
        assert_eq!((out.width, out.height), (60, 75));
        assert_eq!(out.crop.rect.y, 22);
    }

    #[test]
    fn test_exposure_comes_from_original() {
        let bytes = with_exif(
            &jpeg_bytes(&gradient_image(40, 40)),
            ExifFields {
                orientation: 1,
                iso: 400,
                exposure: (1, 60),
                f_number: (4, 1),
            },
        );
        let out = process_capture(&bytes, AspectRatio::Wide, 90).unwrap();
        assert_eq!(out.exposure.iso, Some(400));
        assert_eq!(out.exposure.aperture, Some(4.0));
        assert_eq!((out.width, out.height), (40, 20));
    }

    #[test]
    fn test_garbage_input_is_decode_error() {
        assert!(matches!(
            process_capture(b"not a jpeg", AspectRatio::Square, 100),
            Err(CaptureError::Decode(_))
        ));
    }
}
