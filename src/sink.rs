//! Output writing for finished character grids.
//!
//! The sink has no opinion about the grid contents; it only decides where
//! the string goes.

use std::io::Write;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

/// Errors that can occur when writing a character grid.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to the destination failed.
    #[error("failed to write output to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing to stdout failed.
    #[error("failed to write output to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Destination for a rendered character grid.
#[derive(Debug, Clone, Default)]
pub enum Target {
    /// Print to standard output.
    #[default]
    Stdout,
    /// Write to a file, replacing any existing contents.
    File(PathBuf),
}

/// Write a character grid to the chosen target.
pub fn write(grid: &str, target: &Target) -> Result<(), SinkError> {
    match target {
        Target::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(grid.as_bytes())
                .map_err(SinkError::Stdout)?;
            stdout.flush().map_err(SinkError::Stdout)
        }
        Target::File(path) => {
            std::fs::write(path, grid).map_err(|source| SinkError::Write {
                path: path.clone(),
                source,
            })?;
            info!("wrote {} bytes to {}", grid.len(), path.display());
            Ok(())
        }
    }
}
