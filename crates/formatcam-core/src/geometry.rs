//! Rectangles and the centered aspect-ratio fit shared by cropping and the
//! viewfinder overlay.
//!
//! # Centering rule
//!
//! Given a source of `W x H` and a target ratio `r = width / height`:
//!
//! ```text
//! if W / H > r   targetH = H,  targetW = H * r      (source wider: constrain by height)
//! else           targetW = W,  targetH = W / r      (constrain by width)
//! x = (W - targetW) / 2,  y = (H - targetH) / 2
//! ```
//!
//! [`fit_centered_pixels`] rounds the target size to whole pixels and floors
//! the offsets. [`fit_centered`] keeps everything in `f32` for drawing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inputs outside the valid domain of the centering rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Viewport is empty, negative or not finite.
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Ratio is not a finite positive number.
    #[error("Invalid aspect ratio: {0}")]
    InvalidRatio(f64),
}

/// A rectangle in floating-point pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// True for zero-area rectangles.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive containment: points on the edge count as inside.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// A rectangle in whole-pixel space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Bounds as `[left, top, right, bottom]`.
    pub fn bounds(&self) -> [u32; 4] {
        [self.x, self.y, self.right(), self.bottom()]
    }
}

fn check_ratio(ratio: f64) -> Result<(), GeometryError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRatio(ratio))
    }
}

/// Largest centered rectangle of `ratio` that fits in `width x height`,
/// rounded to whole pixels.
///
/// The result never exceeds the source bounds and is at least 1x1.
pub fn fit_centered_pixels(width: u32, height: u32, ratio: f64) -> Result<PixelRect, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::InvalidDimensions { width, height });
    }
    check_ratio(ratio)?;

    let (w, h) = (width as f64, height as f64);

    let (target_w, target_h) = if w / h > ratio {
        let target_w = (h * ratio).round() as u32;
        (target_w.clamp(1, width), height)
    } else {
        let target_h = (w / ratio).round() as u32;
        (width, target_h.clamp(1, height))
    };

    Ok(PixelRect {
        x: (width - target_w) / 2,
        y: (height - target_h) / 2,
        width: target_w,
        height: target_h,
    })
}

/// Largest centered rectangle of `ratio` that fits in a `width x height`
/// viewport, without rounding.
pub fn fit_centered(width: f32, height: f32, ratio: f64) -> Result<Rect, GeometryError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GeometryError::InvalidViewport { width, height });
    }
    check_ratio(ratio)?;

    // Work in f64 so extreme ratios do not collapse to 0 or inf, and keep
    // at least one pixel like `fit_centered_pixels`.
    let (w, h) = (f64::from(width), f64::from(height));
    let (target_w, target_h) = if w / h > ratio {
        ((h * ratio).clamp(w.min(1.0), w), h)
    } else {
        (w, (w / ratio).clamp(h.min(1.0), h))
    };

    let left = (w - target_w) / 2.0;
    let top = (h - target_h) / 2.0;
    Ok(Rect::new(
        left as f32,
        top as f32,
        (left + target_w) as f32,
        (top + target_h) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_wider_source_constrains_height() {
        let rect = fit_centered_pixels(1000, 800, 1.0).unwrap();
        assert_eq!(rect.bounds(), [100, 0, 900, 800]);
    }

    #[test]
    fn test_pixels_taller_source_constrains_width() {
        let rect = fit_centered_pixels(1080, 1920, 1.5).unwrap();
        assert_eq!(rect.bounds(), [0, 600, 1080, 1320]);
    }

    #[test]
    fn test_pixels_equal_ratio_keeps_full_bounds() {
        let rect = fit_centered_pixels(1500, 1000, 1.5).unwrap();
        assert_eq!(rect, PixelRect::new(0, 0, 1500, 1000));

        let rect = fit_centered_pixels(800, 1000, 4.0 / 5.0).unwrap();
        assert_eq!(rect, PixelRect::new(0, 0, 800, 1000));
    }

    #[test]
    fn test_pixels_rounds_to_nearest() {
        // 999 / 2.0 = 499.5 rounds up to 500, offset floors (999 - 500) / 2 = 249
        let rect = fit_centered_pixels(999, 999, 2.0).unwrap();
        assert_eq!(rect, PixelRect::new(0, 249, 999, 500));
    }

    #[test]
    fn test_pixels_minimum_one_pixel() {
        let rect = fit_centered_pixels(1, 1, 100.0).unwrap();
        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn test_pixels_rejects_invalid_input() {
        assert_eq!(
            fit_centered_pixels(0, 10, 1.0),
            Err(GeometryError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(matches!(
            fit_centered_pixels(10, 10, 0.0),
            Err(GeometryError::InvalidRatio(_))
        ));
        assert!(matches!(
            fit_centered_pixels(10, 10, f64::NAN),
            Err(GeometryError::InvalidRatio(_))
        ));
    }

    #[test]
    fn test_float_frame_portrait_viewport() {
        let rect = fit_centered(1080.0, 1920.0, 1.5).unwrap();
        assert_eq!(rect, Rect::new(0.0, 600.0, 1080.0, 1320.0));
        assert_eq!(rect.center_x(), 540.0);
        assert_eq!(rect.center_y(), 960.0);
    }

    #[test]
    fn test_float_frame_landscape_viewport() {
        let rect = fit_centered(1920.0, 1080.0, 1.0).unwrap();
        assert_eq!(rect, Rect::new(420.0, 0.0, 1500.0, 1080.0));
    }

    #[test]
    fn test_float_frame_rejects_empty_viewport() {
        assert!(matches!(
            fit_centered(0.0, 100.0, 1.0),
            Err(GeometryError::InvalidViewport { .. })
        ));
        assert!(matches!(
            fit_centered(100.0, f32::INFINITY, 1.0),
            Err(GeometryError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_float_frame_extreme_ratios_stay_non_empty() {
        let narrow = fit_centered(1000.0, 800.0, 1e-50).unwrap();
        assert_eq!(narrow, Rect::new(499.5, 0.0, 500.5, 800.0));
        assert!(!narrow.is_empty());

        let wide = fit_centered(1000.0, 800.0, 1e50).unwrap();
        assert_eq!(wide, Rect::new(0.0, 399.5, 1000.0, 400.5));
        assert!(!wide.is_empty());
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(0.0, 10.0));
        assert!(!rect.contains_point(10.1, 5.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn ratio_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(1.0),
            Just(1.5),
            Just(2.0),
            Just(0.8),
            0.05f64..20.0,
        ]
    }

    proptest! {
        /// Property: the crop never exceeds the source.
        #[test]
        fn prop_fits_inside_source(
            width in 1u32..=4000,
            height in 1u32..=4000,
            ratio in ratio_strategy(),
        ) {
            let rect = fit_centered_pixels(width, height, ratio).unwrap();
            prop_assert!(rect.width >= 1 && rect.width <= width);
            prop_assert!(rect.height >= 1 && rect.height <= height);
            prop_assert!(rect.right() <= width);
            prop_assert!(rect.bottom() <= height);
        }

        /// Property: one side always spans the full source.
        #[test]
        fn prop_one_side_is_full(
            width in 1u32..=4000,
            height in 1u32..=4000,
            ratio in ratio_strategy(),
        ) {
            let rect = fit_centered_pixels(width, height, ratio).unwrap();
            prop_assert!(rect.width == width || rect.height == height);
        }

        /// Property: the crop ratio is within one pixel of the target.
        #[test]
        fn prop_ratio_within_one_pixel(
            width in 16u32..=4000,
            height in 16u32..=4000,
            ratio in prop_oneof![Just(1.0), Just(1.5), Just(2.0), Just(0.8)],
        ) {
            let rect = fit_centered_pixels(width, height, ratio).unwrap();
            let (w, h) = (rect.width as f64, rect.height as f64);
            // Rounding either side by at most half a pixel.
            let ideal_w = h * ratio;
            let ideal_h = w / ratio;
            prop_assert!(
                (w - ideal_w).abs() <= 1.0 || (h - ideal_h).abs() <= 1.0,
                "{}x{} is not ~{}", rect.width, rect.height, ratio
            );
        }

        /// Property: the crop is centered within integer rounding.
        #[test]
        fn prop_centered(
            width in 1u32..=4000,
            height in 1u32..=4000,
            ratio in ratio_strategy(),
        ) {
            let rect = fit_centered_pixels(width, height, ratio).unwrap();
            let right_margin = width - rect.width - rect.x;
            let bottom_margin = height - rect.height - rect.y;
            prop_assert!(right_margin.abs_diff(rect.x) <= 1);
            prop_assert!(bottom_margin.abs_diff(rect.y) <= 1);
        }

        /// Property: float and pixel fits agree within a pixel.
        #[test]
        fn prop_float_matches_pixels(
            width in 1u32..=4000,
            height in 1u32..=4000,
            ratio in prop_oneof![Just(1.0), Just(1.5), Just(2.0), Just(0.8)],
        ) {
            let px = fit_centered_pixels(width, height, ratio).unwrap();
            let fl = fit_centered(width as f32, height as f32, ratio).unwrap();
            prop_assert!((fl.width() - px.width as f32).abs() <= 1.0);
            prop_assert!((fl.height() - px.height as f32).abs() <= 1.0);
        }
    }
}
