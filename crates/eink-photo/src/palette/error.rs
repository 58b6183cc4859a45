//! Error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// More colors than the display can show
    #[error("palette has more than {max} colors")]
    TooManyColors {
        /// Maximum number of palette entries
        max: usize,
    },

    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },

    /// Invalid hex color string
    #[error("invalid color '{input}': {source}")]
    ParseColor {
        input: String,
        #[source]
        source: ParseColorError,
    },
}
