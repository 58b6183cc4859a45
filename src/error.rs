use std::io;
use std::path::PathBuf;

use eink_photo::{GeometryError, PaletteError};
use thiserror::Error;

use crate::models::ConfigError;

/// Fatal conversion errors. Each names the stage that failed and the file
/// it was working on.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input image not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to decode input image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to decode palette {}: {source}", .path.display())]
    PaletteDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid palette {}: {source}", .path.display())]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Geometry stage failed for {}: {source}", .path.display())]
    Geometry {
        path: PathBuf,
        #[source]
        source: GeometryError,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Pipeline stage the error belongs to, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::InputNotFound { .. } | ConvertError::Decode { .. } => "load",
            ConvertError::PaletteDecode { .. } | ConvertError::Palette { .. } => "palette",
            ConvertError::Geometry { .. } => "geometry",
            ConvertError::OutputDir { .. } | ConvertError::Encode { .. } => "write",
            ConvertError::Config(_) => "config",
        }
    }
}
