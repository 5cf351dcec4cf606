//! Film-format aspect ratios offered by the viewfinder.
//!
//! Ratios are expressed as width / height of the *framed* picture, the way
//! medium-format film backs are named (6x6, 6x9, ...). A ratio above 1.0 is
//! wider than tall.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a label does not name a known aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown aspect ratio: {0}")]
pub struct UnknownRatio(pub String);

/// A selectable framing format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    /// 6x6, square.
    #[default]
    Square,
    /// 6x9, the classic 3:2 frame.
    Standard,
    /// 6x12 panoramic.
    Wide,
    /// 4x5 large-format, slightly taller than wide.
    FourByFive,
}

impl AspectRatio {
    /// All ratios in cycle order.
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Wide,
        AspectRatio::FourByFive,
    ];

    /// Display label, also used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "6x6",
            AspectRatio::Standard => "6x9",
            AspectRatio::Wide => "6x12",
            AspectRatio::FourByFive => "4x5",
        }
    }

    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Standard => 1.5,
            AspectRatio::Wide => 2.0,
            AspectRatio::FourByFive => 4.0 / 5.0,
        }
    }

    /// Position in [`AspectRatio::ALL`].
    pub fn index(self) -> usize {
        match self {
            AspectRatio::Square => 0,
            AspectRatio::Standard => 1,
            AspectRatio::Wide => 2,
            AspectRatio::FourByFive => 3,
        }
    }

    /// Look up a ratio by index. Out-of-range values wrap around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The next ratio in cycle order, wrapping back to the first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Look up a ratio by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownRatio(s.to_string()))
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = UnknownRatio;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.label().to_string()
    }
}
