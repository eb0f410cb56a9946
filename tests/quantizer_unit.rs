//! Unit tests for the quantizer core.
//!
//! These tests pin down the contract of `quantizer::render`:
//! - Linear quantization with round-half-up
//! - Boundary mapping (0 -> darkest, 255 -> brightest)
//! - Row wrapping and partial-row termination
//! - Error cases (zero width, empty palette)
//! - Determinism

use imgscii::palette::DEFAULT_PALETTE;
use imgscii::quantizer::{quantize, render, RenderError};

// ==================== Quantization Index Tests ====================

#[test]
fn test_quantize_boundaries() {
    for levels in [1, 2, 3, 11, 70] {
        assert_eq!(quantize(0, levels), 0, "levels={}", levels);
        assert_eq!(quantize(255, levels), levels - 1, "levels={}", levels);
    }
}

#[test]
fn test_quantize_matches_rounding() {
    // round(v / 255 * (levels - 1)), ties away from zero
    assert_eq!(quantize(64, 11), 3); // 64/255*10 = 2.51
    assert_eq!(quantize(127, 11), 5); // 127/255*10 = 4.98
    assert_eq!(quantize(128, 11), 5); // 128/255*10 = 5.02
    assert_eq!(quantize(12, 11), 0); // 12/255*10 = 0.47
    assert_eq!(quantize(13, 11), 1); // 13/255*10 = 0.51
    assert_eq!(quantize(128, 3), 1); // 128/255*2 = 1.004
}

#[test]
fn test_quantize_agrees_with_float_reference() {
    for levels in 1..=16usize {
        for v in 0..=255u8 {
            let expected = (v as f64 / 255.0 * (levels - 1) as f64).round() as usize;
            assert_eq!(quantize(v, levels), expected, "v={} levels={}", v, levels);
        }
    }
}

#[test]
fn test_quantize_monotonic_in_intensity() {
    for levels in [1, 2, 5, 11, 16] {
        for v in 0..255u8 {
            assert!(
                quantize(v, levels) <= quantize(v + 1, levels),
                "index must not decrease: v={} levels={}",
                v,
                levels
            );
        }
    }
}

// ==================== Row Wrapping Tests ====================

#[test]
fn test_single_row_default_palette() {
    let grid = render(&[0, 128, 255], 3, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, ". * @ \n");
}

#[test]
fn test_single_row_custom_palette() {
    let grid = render(&[0, 128, 255], 3, &['a', 'b', 'c']).unwrap();
    assert_eq!(grid, "a b c \n");
}

#[test]
fn test_two_rows() {
    // 64 -> round(64/255*10) = 3 -> ';', 128 -> 5 -> '*'
    let grid = render(&[0, 64, 128, 255], 2, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, ". ; \n* @ \n");
}

#[test]
fn test_edge_intensities_only() {
    let grid = render(&[0, 255], 2, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, ". @ \n");
}

#[test]
fn test_partial_final_row_is_terminated() {
    let grid = render(&[0, 255, 0], 2, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, ". @ \n. \n");
}

#[test]
fn test_no_line_break_before_first_element() {
    let grid = render(&[255], 1, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, "@ \n");
}

#[test]
fn test_width_one_gives_one_element_per_line() {
    let grid = render(&[0, 128, 255], 1, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid, ". \n* \n@ \n");
}

#[test]
fn test_line_count_and_length() {
    // 6 pixels at width 3: 2 lines, glyph + space per pixel, break per row
    let pixels = [0, 10, 20, 30, 40, 50];
    let grid = render(&pixels, 3, DEFAULT_PALETTE).unwrap();
    assert_eq!(grid.lines().count(), 2);
    assert_eq!(grid.len(), 2 * pixels.len() + 2);
    for line in grid.lines() {
        assert_eq!(line.len(), 2 * 3);
    }
}

#[test]
fn test_empty_input_gives_empty_output() {
    let grid = render(&[], 5, DEFAULT_PALETTE).unwrap();
    assert!(grid.is_empty());
}

// ==================== Palette Tests ====================

#[test]
fn test_single_glyph_palette_maps_everything() {
    let grid = render(&[0, 100, 255], 3, &['x']).unwrap();
    assert_eq!(grid, "x x x \n");
}

#[test]
fn test_unicode_palette() {
    let grid = render(&[0, 255], 2, &['░', '█']).unwrap();
    assert_eq!(grid, "░ █ \n");
}

#[test]
fn test_non_empty_output_for_non_empty_input() {
    for width in 1..=4usize {
        let grid = render(&[7, 42, 99], width, DEFAULT_PALETTE).unwrap();
        assert!(!grid.is_empty());
    }
}

// ==================== Error Tests ====================

#[test]
fn test_zero_row_width_rejected() {
    let result = render(&[0, 1, 2], 0, DEFAULT_PALETTE);
    assert_eq!(result.unwrap_err(), RenderError::InvalidDimension(0));
}

#[test]
fn test_empty_palette_rejected() {
    let result = render(&[0, 1, 2], 3, &[]);
    assert_eq!(result.unwrap_err(), RenderError::InvalidPalette);
}

#[test]
fn test_errors_checked_before_processing() {
    // Both invalid: dimension check comes first, nothing partial leaks out
    let result = render(&[0], 0, &[]);
    assert_eq!(result.unwrap_err(), RenderError::InvalidDimension(0));
}

// ==================== Determinism Tests ====================

#[test]
fn test_repeated_calls_are_byte_identical() {
    let pixels: Vec<u8> = (0..=255).collect();
    let a = render(&pixels, 16, DEFAULT_PALETTE).unwrap();
    let b = render(&pixels, 16, DEFAULT_PALETTE).unwrap();
    assert_eq!(a, b);
}
