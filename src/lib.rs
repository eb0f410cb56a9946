//! imgscii library crate.
//!
//! Converts images to ASCII character grids in three stages:
//!
//! 1. **Source** - decode, resize, gamma-correct, and flatten to grayscale
//! 2. **Quantizer** - map each intensity to a palette glyph, row by row
//! 3. **Sink** - print the finished grid or write it to a file
//!
//! The quantizer is the heart of the crate and is a pure function; the
//! source and sink are thin collaborators around it.

pub mod cli;
pub mod config;
pub mod palette;
pub mod quantizer;
pub mod sink;
pub mod source;
