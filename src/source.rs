//! Image decoding and normalization ahead of quantization.
//!
//! Produces the flat grayscale intensity buffer the quantizer consumes:
//! decode, resize to the target character grid, optionally gamma-correct,
//! and flatten to luminance using ITU-R BT.601.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::debug;
use thiserror::Error;

/// Standard display gamma (sRGB).
pub const GAMMA: f32 = 2.2;

/// Errors that can occur while preparing an image for quantization.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input file could not be opened or decoded.
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A flat grayscale buffer plus the row width needed to reassemble it.
#[derive(Debug, Clone)]
pub struct IntensityGrid {
    /// Grayscale values (0-255), row-major.
    pub pixels: Vec<u8>,
    /// Number of pixels per row.
    pub width: usize,
}

/// Decode an image from disk and normalize it to an intensity grid.
///
/// # Arguments
/// * `path` - Input image file (any format the `image` crate decodes)
/// * `width` - Target grid width in pixels/characters
/// * `height` - Target grid height in pixels/rows
/// * `gamma` - Apply gamma correction to the luminance values
///
/// # Errors
/// [`SourceError::Decode`] if the file cannot be opened or decoded.
pub fn load(
    path: &Path,
    width: u32,
    height: u32,
    gamma: bool,
) -> Result<IntensityGrid, SourceError> {
    let img = image::open(path).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (src_w, src_h) = img.dimensions();
    debug!(
        "decoded {} ({}x{}), resizing to {}x{}",
        path.display(),
        src_w,
        src_h,
        width,
        height
    );
    Ok(normalize(&img, width, height, gamma))
}

/// Normalize an already-decoded image to an intensity grid.
///
/// Resizes to exactly `width` x `height` with Lanczos3, converts each pixel
/// to luminance with the ITU-R BT.601 formula `Y = 0.299*R + 0.587*G +
/// 0.114*B` (integer math, coefficients scaled by 1000), and optionally
/// applies gamma correction.
pub fn normalize(img: &DynamicImage, width: u32, height: u32, gamma: bool) -> IntensityGrid {
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    let rgb = resized.to_rgb8();

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for px in rgb.as_raw().chunks_exact(3) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let luminance = ((299 * r + 587 * g + 114 * b) / 1000) as u8;
        pixels.push(if gamma {
            gamma_correct(luminance)
        } else {
            luminance
        });
    }

    IntensityGrid {
        pixels,
        width: width as usize,
    }
}

/// Apply gamma correction to a brightness value.
/// Converts linear brightness to perceptually-correct brightness:
/// `output = (input/255)^(1/2.2) * 255`.
#[inline]
pub fn gamma_correct(linear: u8) -> u8 {
    ((linear as f32 / 255.0).powf(1.0 / GAMMA) * 255.0).round() as u8
}
