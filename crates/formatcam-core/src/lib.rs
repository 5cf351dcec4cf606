//! FormatCam Core - medium-format framing for phone cameras
//!
//! This crate holds everything about a FormatCam photo that is not camera
//! or UI plumbing: the centered-crop geometry shared by the viewfinder
//! overlay and the saved file, EXIF-aware decoding, the film-roll session
//! model and contact sheets.

pub mod capture;
pub mod config;
pub mod contact_sheet;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod grid;
pub mod library;
pub mod metadata;
pub mod overlay;
pub mod ratio;
pub mod session;
pub mod transform;
pub mod tutorial;

#[cfg(test)]
mod test_support;

pub use capture::{process_capture, CaptureError, ProcessedCapture};
pub use config::AppConfig;
pub use geometry::{fit_centered, fit_centered_pixels, GeometryError, PixelRect, Rect};
pub use grid::GridVariant;
pub use overlay::{OverlayLayout, OverlayStyle, Primitive};
pub use ratio::AspectRatio;
pub use session::{Session, SessionError, ShootingMode};
pub use transform::{apply_crop, compute_crop, crop_to_ratio, CropResult};
