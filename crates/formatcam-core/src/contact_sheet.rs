//! Contact sheets: a developed roll laid out as one shareable JPEG.
//!
//! ```text
//! +--------------------------------+
//! |  header (title drawn by caller)|
//! |  pad [thumb] pad [thumb] pad   |
//! |  pad [thumb] pad [thumb] pad   |
//! +--------------------------------+
//! ```

use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{defaults, ConfigError};
use crate::decode::{resize_to_fit, DecodeError, DecodedImage, FilterType};
use crate::encode::{encode_image, EncodeError};

#[derive(Debug, Error)]
pub enum ContactSheetError {
    #[error("A contact sheet needs at least one photo")]
    NoPhotos,

    #[error("A contact sheet needs at least one column")]
    NoColumns,

    #[error("Contact sheet for {count} photos in {columns} columns is too large")]
    TooLarge { count: usize, columns: u32 },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Cell sizes and output quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSheetConfig {
    pub thumb_width: u32,
    pub thumb_height: u32,
    pub padding: u32,
    pub header_height: u32,
    pub quality: u8,
}

impl Default for ContactSheetConfig {
    fn default() -> Self {
        Self {
            thumb_width: defaults::SHEET_THUMB_WIDTH,
            thumb_height: defaults::SHEET_THUMB_HEIGHT,
            padding: defaults::SHEET_PADDING,
            header_height: defaults::SHEET_HEADER_HEIGHT,
            quality: defaults::SHEET_JPEG_QUALITY,
        }
    }
}

impl ContactSheetConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.thumb_width == 0 || self.thumb_height == 0 {
            return Err(ConfigError::Invalid {
                field: "contact_sheet",
                reason: "thumbnail size must be non-zero".to_string(),
            });
        }
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Invalid {
                field: "contact_sheet.quality",
                reason: format!("{} is outside 1-100", self.quality),
            });
        }
        Ok(())
    }
}

/// `thumb * n + pad * (n + 1) + extra`, or `None` on overflow.
fn span(thumb: u32, pad: u32, n: u32, extra: u32) -> Option<u32> {
    thumb
        .checked_mul(n)?
        .checked_add(pad.checked_mul(n.checked_add(1)?)?)?
        .checked_add(extra)
}

/// Pixel layout of a sheet holding `count` thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSheetLayout {
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
    config: ContactSheetConfig,
}

impl ContactSheetLayout {
    pub fn new(
        count: usize,
        columns: u32,
        config: &ContactSheetConfig,
    ) -> Result<Self, ContactSheetError> {
        if count == 0 {
            return Err(ContactSheetError::NoPhotos);
        }
        if columns == 0 {
            return Err(ContactSheetError::NoColumns);
        }

        let too_large = || ContactSheetError::TooLarge { count, columns };
        let rows = u32::try_from(count).map_err(|_| too_large())?.div_ceil(columns);
        let width = span(config.thumb_width, config.padding, columns, 0).ok_or_else(too_large)?;
        let height = span(config.thumb_height, config.padding, rows, config.header_height)
            .ok_or_else(too_large)?;

        Ok(Self {
            columns,
            rows,
            width,
            height,
            config: *config,
        })
    }

    /// Top-left corner of the `index`th cell, filled row by row.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        let (col, row) = (index % self.columns, index / self.columns);
        let c = &self.config;
        (
            c.padding + col * (c.thumb_width + c.padding),
            c.header_height + c.padding + row * (c.thumb_height + c.padding),
        )
    }
}

/// Lay `images` out on a black sheet and encode it.
///
/// Each photo is scaled to fit its cell and centered in it. The header band
/// stays empty.
pub fn render_contact_sheet(
    images: &[DecodedImage],
    columns: u32,
    config: &ContactSheetConfig,
) -> Result<Vec<u8>, ContactSheetError> {
    let layout = ContactSheetLayout::new(images.len(), columns, config)?;
    debug!(
        photos = images.len(),
        columns = layout.columns,
        rows = layout.rows,
        width = layout.width,
        height = layout.height,
        "rendering contact sheet"
    );

    let mut canvas = RgbImage::new(layout.width, layout.height);
    for (index, image) in images.iter().enumerate() {
        let thumb = resize_to_fit(
            image,
            config.thumb_width,
            config.thumb_height,
            FilterType::Bilinear,
        )?;
        let (left, top) = layout.cell(index);
        let x = left + (config.thumb_width - thumb.width.min(config.thumb_width)) / 2;
        let y = top + (config.thumb_height - thumb.height.min(config.thumb_height)) / 2;

        let expected = (thumb.width as usize) * (thumb.height as usize) * 3;
        let actual = thumb.pixels.len();
        let thumb = thumb
            .into_rgb_image()
            .ok_or(DecodeError::BufferMismatch { expected, actual })?;
        image::imageops::replace(&mut canvas, &thumb, x.into(), y.into());
    }

    let sheet = DecodedImage::from_rgb_image(canvas);
    Ok(encode_image(&sheet, config.quality)?)
}
