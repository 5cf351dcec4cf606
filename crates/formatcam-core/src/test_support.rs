//! Fixtures shared by unit tests.

use crate::decode::DecodedImage;
use crate::encode::encode_image;

/// Smooth RGB gradient; survives JPEG encoding without odd artifacts.
pub(crate) fn gradient_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(128);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// Every channel of pixel (x, y) holds `(y * width + x) % 256`, so moved
/// pixels can be traced back to their source position.
pub(crate) fn indexed_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((y * width + x) % 256) as u8;
            pixels.extend_from_slice(&[v, v, v]);
        }
    }
    DecodedImage::new(width, height, pixels)
}

pub(crate) fn jpeg_bytes(image: &DecodedImage) -> Vec<u8> {
    encode_image(image, 95).expect("fixture encodes")
}

/// Values written into a synthetic EXIF block. Zero values read back as
/// missing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExifFields {
    pub orientation: u16,
    pub iso: u16,
    /// Exposure time as numerator / denominator.
    pub exposure: (u32, u32),
    pub f_number: (u32, u32),
}

impl Default for ExifFields {
    fn default() -> Self {
        Self {
            orientation: 1,
            iso: 0,
            exposure: (0, 0),
            f_number: (0, 0),
        }
    }
}

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

fn ifd_entry(out: &mut Vec<u8>, tag: u16, kind: u16, value: u32) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    if kind == TYPE_SHORT {
        // SHORT values sit left-justified in the 4-byte slot.
        out.extend_from_slice(&(value as u16).to_le_bytes());
        out.extend_from_slice(&[0, 0]);
    } else {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Little-endian TIFF structure with IFD0 and an Exif sub-IFD.
///
/// Offsets: IFD0 at 8 (2 entries), Exif IFD at 38 (3 entries), rational
/// payloads at 80 and 88.
fn tiff_block(fields: ExifFields) -> Vec<u8> {
    const IFD0: u32 = 8;
    const EXIF_IFD: u32 = 38;
    const EXPOSURE_AT: u32 = 80;
    const F_NUMBER_AT: u32 = 88;

    let mut tiff = Vec::with_capacity(96);
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&IFD0.to_le_bytes());

    tiff.extend_from_slice(&2u16.to_le_bytes());
    ifd_entry(&mut tiff, 0x0112, TYPE_SHORT, fields.orientation.into());
    ifd_entry(&mut tiff, 0x8769, TYPE_LONG, EXIF_IFD);
    tiff.extend_from_slice(&0u32.to_le_bytes());
    debug_assert_eq!(tiff.len() as u32, EXIF_IFD);

    tiff.extend_from_slice(&3u16.to_le_bytes());
    ifd_entry(&mut tiff, 0x829A, TYPE_RATIONAL, EXPOSURE_AT);
    ifd_entry(&mut tiff, 0x829D, TYPE_RATIONAL, F_NUMBER_AT);
    ifd_entry(&mut tiff, 0x8827, TYPE_SHORT, fields.iso.into());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    debug_assert_eq!(tiff.len() as u32, EXPOSURE_AT);

    for (num, den) in [fields.exposure, fields.f_number] {
        tiff.extend_from_slice(&num.to_le_bytes());
        tiff.extend_from_slice(&den.to_le_bytes());
    }
    tiff
}

/// Insert an APP1 EXIF segment right after the SOI marker of `jpeg`.
pub(crate) fn with_exif(jpeg: &[u8], fields: ExifFields) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");

    let tiff = tiff_block(fields);
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}
