//! End-to-end helpers from `image::GrayImage` buffers.

use std::path::Path;

use image::ImageReader;
use log::debug;
use moravec_core::{CornerPoint, GrayImageView, MoravecParams, WindowError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level detection helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Errors raised while loading an image from disk.
///
/// Deliberately separate from [`DetectError`]: a missing or unreadable file
/// is an I/O failure of the surrounding program, not a detector
/// configuration problem.
#[derive(thiserror::Error, Debug)]
pub enum LoadImageError {
    #[error("cannot open image file: {0}")]
    Open(#[from] std::io::Error),

    #[error("cannot decode image file: {0}")]
    Decode(#[from] image::ImageError),
}

/// Load an image from disk and convert it to 8-bit grayscale.
pub fn load_gray(path: impl AsRef<Path>) -> Result<image::GrayImage, LoadImageError> {
    let img = ImageReader::open(path)?.decode()?;
    Ok(img.to_luma8())
}

/// Convert an `image::GrayImage` into the lightweight `moravec-core` view type.
pub fn gray_view(img: &image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Detect Moravec interest points on a grayscale image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_points(
    img: &image::GrayImage,
    params: &MoravecParams,
) -> Result<Vec<CornerPoint>, DetectError> {
    let points = moravec_core::find_points(&gray_view(img), params)?;
    debug!(
        "{} interest points on {}x{} image",
        points.len(),
        img.width(),
        img.height()
    );
    Ok(points)
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<image::GrayImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidGrayDimensions { width, height })
}

/// Detect interest points on a raw grayscale buffer.
pub fn detect_points_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: &MoravecParams,
) -> Result<Vec<CornerPoint>, DetectError> {
    let img = gray_image_from_slice(width, height, pixels)?;
    detect_points(&img, params)
}
