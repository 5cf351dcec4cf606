//! Per-photo metadata: format, exposure and the photographer's notes.
//!
//! Stored as JSON keyed by image path. Exposure values come from the
//! uncropped capture, since re-encoding the crop drops its EXIF block.

use serde::{Deserialize, Serialize};

use crate::decode::ExposureInfo;
use crate::ratio::AspectRatio;

/// Text shown for values the camera did not record.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetadata {
    pub image_path: String,
    /// Format label, or `N/A` when unknown.
    pub aspect_ratio: String,
    /// 0 when unknown.
    pub iso: u32,
    /// f-number, 0.0 when unknown.
    pub aperture: f32,
    /// Exposure time in nanoseconds, 0 when unknown.
    pub shutter_speed: i64,
    #[serde(default)]
    pub notes: String,
}

impl PhotoMetadata {
    pub fn from_exposure(image_path: impl Into<String>, ratio: AspectRatio, exposure: &ExposureInfo) -> Self {
        Self {
            image_path: image_path.into(),
            aspect_ratio: ratio.label().to_string(),
            iso: exposure.iso.unwrap_or(0),
            aperture: exposure.aperture.unwrap_or(0.0),
            shutter_speed: exposure.exposure_nanos().unwrap_or(0),
            notes: String::new(),
        }
    }

    /// Blank record so notes can be attached to a photo with no metadata.
    pub fn placeholder(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            aspect_ratio: NOT_AVAILABLE.to_string(),
            iso: 0,
            aperture: 0.0,
            shutter_speed: 0,
            notes: String::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// One-line summary, e.g. `Format: 6x9 • ISO: 200 • f/2.8 • 1/250`.
    pub fn summary(&self) -> String {
        let iso = if self.iso > 0 {
            format!("ISO: {}", self.iso)
        } else {
            format!("ISO: {NOT_AVAILABLE}")
        };
        let aperture = if self.aperture > 0.0 {
            format!("f/{}", self.aperture)
        } else {
            format!("f/{NOT_AVAILABLE}")
        };
        format!(
            "Format: {} \u{2022} {} \u{2022} {} \u{2022} {}",
            self.aspect_ratio,
            iso,
            aperture,
            format_shutter_speed(self.shutter_speed)
        )
    }
}

/// Human-readable shutter speed.
///
/// Fractions of a second print as `1/N`; one second or longer prints as
/// seconds with a `"` suffix.
pub fn format_shutter_speed(nanos: i64) -> String {
    if nanos <= 0 {
        return NOT_AVAILABLE.to_string();
    }
    let seconds = nanos as f64 / 1_000_000_000.0;
    if seconds >= 1.0 {
        format!("{seconds}\"")
    } else {
        format!("1/{}", (1.0 / seconds).round() as u64)
    }
}
