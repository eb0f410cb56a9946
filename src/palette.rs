//! Palette definitions for glyph-grid rendering.

/// Default palette (11 levels).
/// Glyphs ordered from darkest (.) to brightest (@).
pub const DEFAULT_PALETTE: &[char] = &['.', ',', ':', ';', '+', '*', '?', '%', 'S', '#', '@'];

/// Parse a caller-supplied palette string into an ordered glyph list.
///
/// Whitespace is ignored, so palettes may be written packed (`".,:;"`) or
/// spaced (`". , : ;"`). An empty result means "no custom palette"; callers
/// fall back to [`DEFAULT_PALETTE`].
pub fn parse(s: &str) -> Vec<char> {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
