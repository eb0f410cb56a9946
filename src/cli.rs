//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert an image to an ASCII character grid
#[derive(Parser, Debug)]
#[command(name = "imgscii")]
#[command(version, about = "Render images as ASCII art", long_about = None)]
pub struct Args {
    /// Input image path
    pub input: PathBuf,

    /// Output width in characters (default: 150, or config value)
    #[arg(long, value_parser = parse_dimension)]
    pub width: Option<u32>,

    /// Output height in rows (default: 256, or config value)
    #[arg(long, value_parser = parse_dimension)]
    pub height: Option<u32>,

    /// Custom palette glyphs, darkest to brightest (overrides the default 11-glyph ramp)
    #[arg(long, short)]
    pub palette: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip gamma correction
    #[arg(long)]
    pub no_gamma: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Parse and validate a grid dimension (must be at least 1).
fn parse_dimension(s: &str) -> Result<u32, String> {
    let dim: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if dim == 0 {
        return Err("dimension must be at least 1".to_string());
    }
    Ok(dim)
}
