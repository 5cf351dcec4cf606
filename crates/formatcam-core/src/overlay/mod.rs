//! Viewfinder overlay geometry.
//!
//! Every redraw recomputes the overlay from the viewport size, the selected
//! aspect ratio and the selected grid. Nothing is cached: the computation
//! is pure, so identical inputs always give bit-identical output.
//!
//! ## Draw order
//!
//! 1. Dim regions: the parts of the viewport outside the frame
//! 2. Frame border
//! 3. Grid primitives, clipped to the frame by construction

mod grid;
mod primitive;

pub use grid::grid_primitives;
pub use primitive::{Fill, OverlayStyle, Primitive, Role, Stroke};

use serde::{Deserialize, Serialize};

use crate::geometry::{fit_centered, GeometryError, Rect};
use crate::grid::GridVariant;

/// Centered frame rectangle for a viewport, using the same rule as capture
/// cropping but without rounding.
pub fn frame_rect(viewport_width: f32, viewport_height: f32, ratio: f64) -> Result<Rect, GeometryError> {
    fit_centered(viewport_width, viewport_height, ratio)
}

/// Rectangles covering the viewport outside `frame`: top and bottom bands
/// across the full width, then left and right bands beside the frame.
/// Zero-area bands are omitted.
pub fn dim_regions(viewport_width: f32, viewport_height: f32, frame: &Rect) -> Vec<Rect> {
    [
        Rect::new(0.0, 0.0, viewport_width, frame.top),
        Rect::new(0.0, frame.bottom, viewport_width, viewport_height),
        Rect::new(0.0, frame.top, frame.left, frame.bottom),
        Rect::new(frame.right, frame.top, viewport_width, frame.bottom),
    ]
    .into_iter()
    .filter(|r| !r.is_empty())
    .collect()
}

/// Everything needed to draw one viewfinder frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Clear area matching the selected aspect ratio.
    pub frame: Rect,
    /// Dimmed areas outside the frame.
    pub dim_regions: Vec<Rect>,
    /// Stroke for the frame border.
    pub border: Stroke,
    /// Grid guides inside the frame.
    pub grid: Vec<Primitive>,
}

impl OverlayLayout {
    /// Compute the overlay for a viewport.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` for an empty viewport (for example before the
    /// view has been laid out) or an invalid ratio.
    pub fn compute(
        viewport_width: f32,
        viewport_height: f32,
        ratio: f64,
        variant: GridVariant,
        style: &OverlayStyle,
    ) -> Result<Self, GeometryError> {
        let frame = frame_rect(viewport_width, viewport_height, ratio)?;
        Ok(Self {
            viewport_width,
            viewport_height,
            frame,
            dim_regions: dim_regions(viewport_width, viewport_height, &frame),
            border: style.frame_stroke(),
            grid: grid_primitives(&frame, variant, style),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::AspectRatio;

    #[test]
    fn test_portrait_viewport_standard_format() {
        let layout = OverlayLayout::compute(
            1080.0,
            1920.0,
            AspectRatio::Standard.ratio(),
            GridVariant::Thirds,
            &OverlayStyle::default(),
        )
        .unwrap();

        assert_eq!(layout.frame, Rect::new(0.0, 600.0, 1080.0, 1320.0));
        // Only top and bottom bands: the frame spans the full width.
        assert_eq!(
            layout.dim_regions,
            vec![
                Rect::new(0.0, 0.0, 1080.0, 600.0),
                Rect::new(0.0, 1320.0, 1080.0, 1920.0),
            ]
        );
        assert_eq!(layout.grid.len(), 4);
        assert_eq!(layout.border.role, Role::Frame);
    }

    #[test]
    fn test_landscape_viewport_square_format() {
        let layout = OverlayLayout::compute(
            1920.0,
            1080.0,
            AspectRatio::Square.ratio(),
            GridVariant::None,
            &OverlayStyle::default(),
        )
        .unwrap();

        assert_eq!(layout.frame, Rect::new(420.0, 0.0, 1500.0, 1080.0));
        assert_eq!(
            layout.dim_regions,
            vec![
                Rect::new(0.0, 0.0, 420.0, 1080.0),
                Rect::new(1500.0, 0.0, 1920.0, 1080.0),
            ]
        );
        assert!(layout.grid.is_empty());
    }

    #[test]
    fn test_matching_viewport_has_no_dim_regions() {
        let layout = OverlayLayout::compute(
            1000.0,
            1000.0,
            1.0,
            GridVariant::CenterCross,
            &OverlayStyle::default(),
        )
        .unwrap();
        assert!(layout.dim_regions.is_empty());
    }

    #[test]
    fn test_unlaid_out_view_is_rejected() {
        assert!(OverlayLayout::compute(
            0.0,
            0.0,
            1.0,
            GridVariant::Thirds,
            &OverlayStyle::default()
        )
        .is_err());
    }
}
