//! Drawing primitives handed to the rendering surface.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Which paint a primitive is drawn with.
///
/// Colors and blend modes belong to the rendering surface; the role only
/// says what the primitive is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Border around the viewfinder frame.
    Frame,
    /// Regular grid lines.
    Grid,
    /// Filled markers drawn on top of grid lines.
    Highlight,
    /// Dashed teaching guides.
    Guide,
}

/// Stroke parameters for a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub role: Role,
    pub width: f32,
    /// `[on, off]` dash lengths; `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
}

/// Fill parameters for a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub role: Role,
}

/// A single shape to draw, in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Fill,
    },
}

impl Primitive {
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke) -> Self {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    pub fn circle(cx: f32, cy: f32, radius: f32, fill: Fill) -> Self {
        Primitive::Circle {
            cx,
            cy,
            radius,
            fill,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { stroke, .. } => stroke.role,
            Primitive::Circle { fill, .. } => fill.role,
        }
    }

    /// Every coordinate this primitive touches, for bounds checks.
    ///
    /// Circles report their axis-aligned extremes.
    pub fn extent_points(&self) -> Vec<(f32, f32)> {
        match *self {
            Primitive::Line { x1, y1, x2, y2, .. } => vec![(x1, y1), (x2, y2)],
            Primitive::Circle { cx, cy, radius, .. } => vec![
                (cx - radius, cy),
                (cx + radius, cy),
                (cx, cy - radius),
                (cx, cy + radius),
            ],
        }
    }
}

/// Stroke widths and marker sizes for the overlay, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub frame_width: f32,
    pub grid_width: f32,
    pub guide_width: f32,
    pub guide_dash: [f32; 2],
    /// Radius of the thirds-intersection markers.
    pub marker_radius: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            frame_width: defaults::FRAME_STROKE_WIDTH,
            grid_width: defaults::GRID_STROKE_WIDTH,
            guide_width: defaults::GUIDE_STROKE_WIDTH,
            guide_dash: defaults::GUIDE_DASH,
            marker_radius: defaults::MARKER_RADIUS,
        }
    }
}

impl OverlayStyle {
    pub fn frame_stroke(&self) -> Stroke {
        Stroke {
            role: Role::Frame,
            width: self.frame_width,
            dash: None,
        }
    }

    pub fn grid_stroke(&self) -> Stroke {
        Stroke {
            role: Role::Grid,
            width: self.grid_width,
            dash: None,
        }
    }

    pub fn guide_stroke(&self) -> Stroke {
        Stroke {
            role: Role::Guide,
            width: self.guide_width,
            dash: Some(self.guide_dash),
        }
    }

    pub fn highlight_fill(&self) -> Fill {
        Fill {
            role: Role::Highlight,
        }
    }
}
