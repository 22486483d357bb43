//! Image crop exporter.
//!
//! Decodes an uploaded image, extracts the pixels inside a crop rectangle
//! (source-pixel coordinates) and re-encodes them at the rectangle's own
//! dimensions. Rectangles that reach outside the image are rejected, never
//! clamped.

use std::fmt;
use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// JPEG quality used for cropped exports.
pub const JPEG_QUALITY: u8 = 92;

/// Pixel-space crop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Encoding of the exported crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Result of [`crop_image`].
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Crop area must have a non-zero width and height")]
    EmptyRect,

    #[error("Crop area {rect} lies outside the {width}x{height} image")]
    OutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },

    #[error("Could not encode cropped image: {0}")]
    Encode(String),
}

impl From<CropError> for CoreError {
    fn from(err: CropError) -> Self {
        match err {
            CropError::Encode(_) => CoreError::Internal(err.to_string()),
            other => CoreError::Validation(other.to_string()),
        }
    }
}

/// Crop `source` (any decodable image) to `rect` and encode it as `format`.
pub fn crop_image(
    source: &[u8],
    rect: CropRect,
    format: OutputFormat,
) -> Result<CroppedImage, CropError> {
    if rect.width == 0 || rect.height == 0 {
        return Err(CropError::EmptyRect);
    }

    let img = image::load_from_memory(source).map_err(|e| CropError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();

    let fits_x = rect.x.checked_add(rect.width).is_some_and(|r| r <= width);
    let fits_y = rect.y.checked_add(rect.height).is_some_and(|b| b <= height);
    if !fits_x || !fits_y {
        return Err(CropError::OutOfBounds {
            rect,
            width,
            height,
        });
    }

    let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);
    let bytes = encode(cropped, format)?;

    Ok(CroppedImage {
        bytes,
        width: rect.width,
        height: rect.height,
        format,
    })
}

fn encode(img: DynamicImage, format: OutputFormat) -> Result<Vec<u8>, CropError> {
    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);
    match format {
        // JPEG has no alpha channel.
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY)),
        OutputFormat::Png => img.write_to(&mut cursor, ImageFormat::Png),
    }
    .map_err(|e| CropError::Encode(e.to_string()))?;
    Ok(buf)
}
