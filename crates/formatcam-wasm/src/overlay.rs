//! Viewfinder overlay bindings.
//!
//! The web viewfinder calls [`compute_overlay`] on every resize or
//! format/grid change and draws the result onto a canvas above the video.
//!
//! ```typescript
//! const overlay = compute_overlay(canvas.width, canvas.height, "6x9", "Thirds+");
//! const lines = overlay.grid_lines();   // Float32Array, 4 floats per segment
//! const [l, t, r, b] = overlay.frame();
//! ```

use formatcam_core::overlay::{OverlayLayout, OverlayStyle, Primitive, Role};
use wasm_bindgen::prelude::*;

use crate::types::{parse_grid, parse_ratio, to_js_error};

/// A computed overlay, one per redraw.
#[wasm_bindgen]
pub struct JsOverlay {
    layout: OverlayLayout,
}

#[wasm_bindgen]
impl JsOverlay {
    /// Frame rectangle as `[left, top, right, bottom]`.
    pub fn frame(&self) -> Vec<f32> {
        let f = &self.layout.frame;
        vec![f.left, f.top, f.right, f.bottom]
    }

    /// Dim regions flattened, 4 floats per rectangle.
    pub fn dim_regions(&self) -> Vec<f32> {
        self.layout
            .dim_regions
            .iter()
            .flat_map(|r| [r.left, r.top, r.right, r.bottom])
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn border_width(&self) -> f32 {
        self.layout.border.width
    }

    /// Solid grid lines as `x1, y1, x2, y2` quadruples.
    pub fn grid_lines(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.line_coords(false).as_slice())
    }

    /// Dashed teaching guides as `x1, y1, x2, y2` quadruples.
    pub fn guide_lines(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.line_coords(true).as_slice())
    }

    /// Highlight markers as `cx, cy, radius` triples.
    pub fn markers(&self) -> Vec<f32> {
        self.layout
            .grid
            .iter()
            .filter_map(|p| match *p {
                Primitive::Circle { cx, cy, radius, .. } => Some([cx, cy, radius]),
                Primitive::Line { .. } => None,
            })
            .flatten()
            .collect()
    }

    /// The whole layout as a plain JS object.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.layout)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize overlay: {}", e)))
    }
}

impl JsOverlay {
    fn line_coords(&self, guides: bool) -> Vec<f32> {
        self.layout
            .grid
            .iter()
            .filter_map(|p| match *p {
                Primitive::Line { x1, y1, x2, y2, stroke } if (stroke.role == Role::Guide) == guides => {
                    Some([x1, y1, x2, y2])
                }
                _ => None,
            })
            .flatten()
            .collect()
    }
}

pub(crate) fn layout_for(
    viewport_width: f32,
    viewport_height: f32,
    ratio_label: &str,
    grid_label: &str,
) -> Result<JsOverlay, String> {
    let ratio = parse_ratio(ratio_label)?;
    let grid = parse_grid(grid_label)?;
    let layout = OverlayLayout::compute(
        viewport_width,
        viewport_height,
        ratio.ratio(),
        grid,
        &OverlayStyle::default(),
    )
    .map_err(|e| e.to_string())?;
    Ok(JsOverlay { layout })
}

/// Compute the overlay for a viewport with the default style.
///
/// Fails for an unknown format or grid label and for an empty viewport.
#[wasm_bindgen]
pub fn compute_overlay(
    viewport_width: f32,
    viewport_height: f32,
    ratio_label: &str,
    grid_label: &str,
) -> Result<JsOverlay, JsValue> {
    layout_for(viewport_width, viewport_height, ratio_label, grid_label).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_frame_in_landscape_viewport() {
        let overlay = layout_for(1000.0, 800.0, "6x6", "Thirds").unwrap();
        assert_eq!(overlay.frame(), vec![100.0, 0.0, 900.0, 800.0]);
        // Left and right bands only.
        assert_eq!(overlay.dim_regions().len(), 8);
        assert_eq!(overlay.border_width(), 5.0);
    }

    #[test]
    fn test_thirds_lines_are_solid() {
        let overlay = layout_for(900.0, 600.0, "6x9", "Thirds").unwrap();
        assert_eq!(overlay.line_coords(false).len(), 16);
        assert!(overlay.line_coords(true).is_empty());
        assert!(overlay.markers().is_empty());
    }

    #[test]
    fn test_intersections_have_four_markers() {
        let overlay = layout_for(900.0, 900.0, "6x6", "Thirds+").unwrap();
        assert_eq!(overlay.markers().len(), 4 * 3);
    }

    #[test]
    fn test_headroom_is_a_guide() {
        let overlay = layout_for(600.0, 600.0, "6x6", "Headroom").unwrap();
        assert_eq!(overlay.line_coords(true).len(), 4);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(layout_for(0.0, 600.0, "6x6", "Thirds").is_err());
        assert!(layout_for(600.0, 600.0, "7x7", "Thirds").is_err());
        assert!(layout_for(600.0, 600.0, "6x6", "Spiral").is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_grid_lines_array() {
        let overlay = compute_overlay(900.0, 600.0, "6x9", "Cross").unwrap();
        assert_eq!(overlay.grid_lines().length(), 8);
    }

    #[wasm_bindgen_test]
    fn test_to_object() {
        let overlay = compute_overlay(900.0, 600.0, "6x6", "Grid Off").unwrap();
        assert!(overlay.to_object().unwrap().is_object());
    }
}
