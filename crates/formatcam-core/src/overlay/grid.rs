//! Grid guides drawn inside the viewfinder frame.
//!
//! | Variant                | Primitives                                          |
//! |------------------------|-----------------------------------------------------|
//! | `None`                 | none                                                |
//! | `Thirds`               | 2 vertical + 2 horizontal lines at the thirds       |
//! | `CenterCross`          | 1 vertical + 1 horizontal line through the center   |
//! | `ThirdsIntersections`  | thirds lines + 4 filled markers at the intersections|
//! | `HeadroomGuide`        | 1 dashed horizontal line a third from the top       |
//! | `LeadingLines`, `NaturalFrame` | none yet                                    |

use crate::geometry::Rect;
use crate::grid::GridVariant;

use super::primitive::{OverlayStyle, Primitive, Stroke};

/// The four rule-of-thirds lines, verticals first.
fn thirds_lines(frame: &Rect, stroke: Stroke) -> [Primitive; 4] {
    let third_w = frame.width() / 3.0;
    let third_h = frame.height() / 3.0;
    let x1 = frame.left + third_w;
    let x2 = frame.left + third_w * 2.0;
    let y1 = frame.top + third_h;
    let y2 = frame.top + third_h * 2.0;

    [
        Primitive::line(x1, frame.top, x1, frame.bottom, stroke),
        Primitive::line(x2, frame.top, x2, frame.bottom, stroke),
        Primitive::line(frame.left, y1, frame.right, y1, stroke),
        Primitive::line(frame.left, y2, frame.right, y2, stroke),
    ]
}

/// Primitives for `variant` inside `frame`, in draw order.
///
/// Pure: identical input always yields an identical list.
pub fn grid_primitives(frame: &Rect, variant: GridVariant, style: &OverlayStyle) -> Vec<Primitive> {
    if frame.is_empty() {
        return Vec::new();
    }

    match variant {
        GridVariant::None | GridVariant::LeadingLines | GridVariant::NaturalFrame => Vec::new(),
        GridVariant::Thirds => thirds_lines(frame, style.grid_stroke()).to_vec(),
        GridVariant::CenterCross => {
            let stroke = style.grid_stroke();
            let (cx, cy) = (frame.center_x(), frame.center_y());
            vec![
                Primitive::line(cx, frame.top, cx, frame.bottom, stroke),
                Primitive::line(frame.left, cy, frame.right, cy, stroke),
            ]
        }
        GridVariant::ThirdsIntersections => {
            let mut primitives = thirds_lines(frame, style.grid_stroke()).to_vec();

            let third_w = frame.width() / 3.0;
            let third_h = frame.height() / 3.0;
            // Markers sit a third in from each edge; cap the radius there so
            // a tiny frame never paints into the dimmed area.
            let radius = style.marker_radius.min(third_w).min(third_h);
            let fill = style.highlight_fill();

            for (col, row) in [(1.0, 1.0), (2.0, 1.0), (1.0, 2.0), (2.0, 2.0)] {
                primitives.push(Primitive::circle(
                    frame.left + third_w * col,
                    frame.top + third_h * row,
                    radius,
                    fill,
                ));
            }
            primitives
        }
        GridVariant::HeadroomGuide => {
            let y = frame.top + frame.height() / 3.0;
            vec![Primitive::line(frame.left, y, frame.right, y, style.guide_stroke())]
        }
    }
}
