//! Crate-wide error type for palette loading and swatch rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorParseError;

#[derive(Debug, Error)]
pub enum Error {
    /// A palette entry's color could not be parsed
    #[error("palette entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: ColorParseError,
    },

    /// Palette is structurally valid TOML but semantically wrong
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("swatch too large: {0} rows")]
    SwatchTooLarge(usize),

    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("palette parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

impl Error {
    pub fn entry(name: impl Into<String>, source: ColorParseError) -> Self {
        Self::Entry {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
