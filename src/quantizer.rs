//! Intensity to glyph-grid quantization.

use thiserror::Error;

/// Errors reported by [`render`].
///
/// Both conditions are checked up front; no partial grid is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Row width must be at least 1.
    #[error("invalid row width {0}: must be at least 1")]
    InvalidDimension(usize),
    /// The palette must contain at least one glyph.
    #[error("palette is empty: at least one glyph is required")]
    InvalidPalette,
}

/// Quantize one intensity to a palette index.
///
/// Computes `round(v / 255 * (levels - 1))` with ties rounding away from
/// zero, in integer arithmetic: `(2*v*(levels-1) + 255) / 510`. The result
/// is exact for every `u8` input, with no floating-point involved.
///
/// `levels` must be at least 1.
#[inline]
pub fn quantize(v: u8, levels: usize) -> usize {
    (2 * v as usize * (levels - 1) + 255) / 510
}

/// Map a grayscale intensity buffer to a character grid.
///
/// Each intensity (0-255, row-major) is replaced by a glyph from `palette`
/// followed by a single space. Lower intensities map to earlier glyphs
/// (darker), higher intensities to later glyphs (brighter), via a linear
/// quantization of the 0-255 range into `palette.len()` buckets (see
/// [`quantize`]).
///
/// A line break is emitted after every `row_width`-th element, never before
/// the first. Every row is terminated, including a partial final row when
/// the buffer length is not a multiple of `row_width`.
///
/// The function is pure: identical inputs always produce byte-identical
/// output.
///
/// # Arguments
/// * `intensities` - Grayscale values (0-255), one per pixel, row-major
/// * `row_width` - Number of intensities per output line (image width)
/// * `palette` - Glyphs ordered from darkest to brightest
///
/// # Errors
/// * [`RenderError::InvalidDimension`] if `row_width` is zero
/// * [`RenderError::InvalidPalette`] if `palette` is empty
///
/// Malformed intensity values cannot occur: the `u8` element type carries
/// the upstream collaborator's unsigned-8-bit clamping.
///
/// # Example
/// ```
/// use imgscii::palette::DEFAULT_PALETTE;
/// use imgscii::quantizer::render;
///
/// let grid = render(&[0, 128, 255], 3, DEFAULT_PALETTE).unwrap();
/// assert_eq!(grid, ". * @ \n");
/// ```
pub fn render(
    intensities: &[u8],
    row_width: usize,
    palette: &[char],
) -> Result<String, RenderError> {
    if row_width == 0 {
        return Err(RenderError::InvalidDimension(row_width));
    }
    if palette.is_empty() {
        return Err(RenderError::InvalidPalette);
    }

    let levels = palette.len();
    let rows = intensities.len().div_ceil(row_width);
    // glyph + space per pixel, one line break per row
    let mut grid = String::with_capacity(2 * intensities.len() + rows);

    for (i, &v) in intensities.iter().enumerate() {
        grid.push(palette[quantize(v, levels)]);
        grid.push(' ');
        if (i + 1) % row_width == 0 {
            grid.push('\n');
        }
    }

    // Terminate a partial final row; complete rows were closed in the loop.
    if intensities.len() % row_width != 0 {
        grid.push('\n');
    }

    Ok(grid)
}
