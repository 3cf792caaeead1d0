//! Error types for mockup generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::palette::PaletteError;

/// Errors that can occur while writing mockups
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The output directory could not be created
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A mockup file could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The palette file could not be loaded
    #[error("failed to load palette: {0}")]
    Palette(#[from] PaletteError),
}
