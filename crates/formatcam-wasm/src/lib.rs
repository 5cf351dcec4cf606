//! FormatCam WASM - WebAssembly bindings for FormatCam
//!
//! Exposes the formatcam-core viewfinder geometry, capture pipeline and
//! session model to a browser front end.
//!
//! # Module Structure
//!
//! - `overlay` - Frame, dim regions and grid guides for the viewfinder canvas
//! - `capture` - Crop a captured JPEG to the selected format
//! - `transform` - Crop/orientation helpers for previews
//! - `session` - Film roll and format/grid selection state
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { compute_overlay, process_capture, JsSession } from '@formatcam/wasm';
//!
//! await init();
//! const session = new JsSession(12);
//! const overlay = compute_overlay(width, height, session.ratio, session.grid);
//! ```

use wasm_bindgen::prelude::*;

mod capture;
mod overlay;
mod session;
mod transform;
mod types;

pub use capture::{process_capture, JsCapture};
pub use overlay::{compute_overlay, JsOverlay};
pub use session::JsSession;
pub use transform::{apply_orientation, compute_crop, crop_to_ratio};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format labels in cycle order.
#[wasm_bindgen]
pub fn ratio_labels() -> Vec<String> {
    formatcam_core::AspectRatio::ALL
        .iter()
        .map(|r| r.label().to_string())
        .collect()
}

/// Grid labels in cycle order.
#[wasm_bindgen]
pub fn grid_labels() -> Vec<String> {
    formatcam_core::GridVariant::ALL
        .iter()
        .map(|g| g.label().to_string())
        .collect()
}
