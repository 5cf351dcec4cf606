//! Compositional grid overlays.

use serde::{Deserialize, Serialize};

/// A named guide drawn inside the viewfinder frame.
///
/// Variants carry no data. What each one draws is decided in
/// [`crate::overlay::grid_primitives`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridVariant {
    None,
    /// Rule-of-thirds lines.
    #[default]
    Thirds,
    CenterCross,
    /// Thirds lines with markers at the four power points.
    ThirdsIntersections,
    /// Single dashed line a third of the way down, for placing eyes.
    HeadroomGuide,
    LeadingLines,
    NaturalFrame,
}

impl GridVariant {
    /// All variants in cycle order.
    pub const ALL: [GridVariant; 7] = [
        GridVariant::None,
        GridVariant::Thirds,
        GridVariant::CenterCross,
        GridVariant::ThirdsIntersections,
        GridVariant::HeadroomGuide,
        GridVariant::LeadingLines,
        GridVariant::NaturalFrame,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GridVariant::None => "Grid Off",
            GridVariant::Thirds => "Thirds",
            GridVariant::CenterCross => "Cross",
            GridVariant::ThirdsIntersections => "Thirds+",
            GridVariant::HeadroomGuide => "Headroom",
            GridVariant::LeadingLines => "Lines",
            GridVariant::NaturalFrame => "Frame",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default()
    }

    /// Look up a variant by index. Out-of-range values wrap around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}
