//! JPEG capture decoding and EXIF reading.

use std::io::Cursor;

use exif::{Exif, In, Reader, Tag, Value};
use image::ImageReader;
use tracing::{debug, warn};

use super::{DecodeError, DecodedImage, ExposureInfo, Orientation};
use crate::transform::apply_orientation;

/// Decode a JPEG image from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes are not a decodable JPEG.
pub fn decode_jpeg(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = get_orientation(bytes);
    let image = decode_jpeg_no_orientation(bytes)?;
    Ok(apply_orientation(image, orientation))
}

/// Decode a JPEG image from bytes without applying EXIF orientation.
///
/// The returned buffer is in sensor order. Pair it with
/// [`get_orientation`] when the rotation has to be applied later.
pub fn decode_jpeg_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

fn read_exif(bytes: &[u8]) -> Option<Exif> {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => Some(exif),
        Err(exif::Error::NotFound(_)) => {
            debug!("no EXIF block");
            None
        }
        Err(e) => {
            warn!("ignoring malformed EXIF block: {e}");
            None
        }
    }
}

/// Extract the EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    read_exif(bytes)
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

fn first_rational(exif: &Exif, tag: Tag) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    let value = match field.value {
        Value::Rational(ref values) => values.first()?.to_f64(),
        Value::SRational(ref values) => values.first()?.to_f64(),
        _ => return None,
    };
    // A zero denominator yields inf/NaN; treat it as missing.
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Read ISO, aperture and exposure time from JPEG bytes.
///
/// Missing or malformed tags come back as `None`.
pub fn read_exposure(bytes: &[u8]) -> ExposureInfo {
    let Some(exif) = read_exif(bytes) else {
        return ExposureInfo::default();
    };

    let iso = exif
        .get_field(Tag::PhotographicSensitivity, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .filter(|iso| *iso > 0);

    ExposureInfo {
        iso,
        aperture: first_rational(&exif, Tag::FNumber).map(|f| f as f32),
        exposure_time: first_rational(&exif, Tag::ExposureTime),
    }
}
