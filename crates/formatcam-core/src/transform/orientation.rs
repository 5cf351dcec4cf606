//! Bringing sensor-order pixel buffers upright.

use image::imageops;

use crate::decode::{DecodedImage, Orientation};

/// Apply an EXIF orientation to a pixel buffer.
///
/// Consumes the image so the common `Normal` case costs nothing. The
/// result is the image as the photographer saw it in the viewfinder.
pub fn apply_orientation(image: DecodedImage, orientation: Orientation) -> DecodedImage {
    if orientation == Orientation::Normal || image.is_empty() {
        return image;
    }

    let Some(rgb) = image.to_rgb_image() else {
        // Inconsistent buffer; leave it for the caller's validation to reject.
        return image;
    };

    let oriented = match orientation {
        Orientation::Normal => rgb,
        Orientation::FlipHorizontal => imageops::flip_horizontal(&rgb),
        Orientation::Rotate180 => imageops::rotate180(&rgb),
        Orientation::FlipVertical => imageops::flip_vertical(&rgb),
        Orientation::Transpose => imageops::flip_horizontal(&imageops::rotate90(&rgb)),
        Orientation::Rotate90CW => imageops::rotate90(&rgb),
        Orientation::Transverse => imageops::flip_horizontal(&imageops::rotate270(&rgb)),
        Orientation::Rotate270CW => imageops::rotate270(&rgb),
    };

    DecodedImage::from_rgb_image(oriented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::indexed_image;

    /// Value of the pixel at (x, y), using the red channel.
    fn at(image: &DecodedImage, x: u32, y: u32) -> u8 {
        image.pixels[((y * image.width + x) * 3) as usize]
    }

    #[test]
    fn test_normal_is_untouched() {
        let img = indexed_image(3, 2);
        assert_eq!(apply_orientation(img.clone(), Orientation::Normal), img);
    }

    #[test]
    fn test_rotate_90_cw() {
        // Source (value = y * 3 + x):
        //   0 1 2
        //   3 4 5
        let out = apply_orientation(indexed_image(3, 2), Orientation::Rotate90CW);
        assert_eq!((out.width, out.height), (2, 3));
        // Bottom-left of the source becomes top-left.
        assert_eq!(at(&out, 0, 0), 3);
        assert_eq!(at(&out, 1, 0), 0);
        assert_eq!(at(&out, 0, 2), 5);
    }

    #[test]
    fn test_rotate_270_cw() {
        let out = apply_orientation(indexed_image(3, 2), Orientation::Rotate270CW);
        assert_eq!((out.width, out.height), (2, 3));
        // Top-right of the source becomes top-left.
        assert_eq!(at(&out, 0, 0), 2);
        assert_eq!(at(&out, 1, 2), 3);
    }

    #[test]
    fn test_rotate_180() {
        let out = apply_orientation(indexed_image(3, 2), Orientation::Rotate180);
        assert_eq!((out.width, out.height), (3, 2));
        assert_eq!(at(&out, 0, 0), 5);
        assert_eq!(at(&out, 2, 1), 0);
    }

    #[test]
    fn test_mirrors() {
        let flipped = apply_orientation(indexed_image(3, 2), Orientation::FlipHorizontal);
        assert_eq!(at(&flipped, 0, 0), 2);

        let flipped = apply_orientation(indexed_image(3, 2), Orientation::FlipVertical);
        assert_eq!(at(&flipped, 0, 0), 3);
    }

    #[test]
    fn test_transpose_and_transverse() {
        // Transpose mirrors along the main diagonal: (x, y) -> (y, x).
        let out = apply_orientation(indexed_image(3, 2), Orientation::Transpose);
        assert_eq!((out.width, out.height), (2, 3));
        assert_eq!(at(&out, 0, 0), 0);
        assert_eq!(at(&out, 1, 0), 3);
        assert_eq!(at(&out, 0, 2), 2);

        // Transverse mirrors along the anti-diagonal.
        let out = apply_orientation(indexed_image(3, 2), Orientation::Transverse);
        assert_eq!((out.width, out.height), (2, 3));
        assert_eq!(at(&out, 0, 0), 5);
        assert_eq!(at(&out, 1, 2), 0);
    }
}
