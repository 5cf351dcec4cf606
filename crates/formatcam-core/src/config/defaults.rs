//! Default values for all configuration constants.

// ==========================================================================
// Film roll
// ==========================================================================

/// Exposures on a simulated roll of 120 film shot 6x6.
pub const ROLL_CAPACITY: u32 = 12;

/// Quality used when a cropped capture is written back.
pub const CAPTURE_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Overlay
// ==========================================================================

pub const FRAME_STROKE_WIDTH: f32 = 5.0;

pub const GRID_STROKE_WIDTH: f32 = 2.6;

pub const GUIDE_STROKE_WIDTH: f32 = 8.0;

/// `[on, off]` dash lengths of teaching guides.
pub const GUIDE_DASH: [f32; 2] = [30.0, 20.0];

/// Radius of the markers at the thirds intersections.
pub const MARKER_RADIUS: f32 = 25.0;

// ==========================================================================
// Contact sheet
// ==========================================================================

pub const SHEET_THUMB_WIDTH: u32 = 200;

pub const SHEET_THUMB_HEIGHT: u32 = 200;

/// Gap between thumbnails and around the sheet edge.
pub const SHEET_PADDING: u32 = 20;

/// Height of the title band above the thumbnails.
pub const SHEET_HEADER_HEIGHT: u32 = 100;

pub const SHEET_JPEG_QUALITY: u8 = 90;
