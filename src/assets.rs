//! Reading input photos and palette assets from disk
//!
//! Input photos are required: a missing or undecodable file aborts the run.
//! The palette asset is optional: when the file is missing the conversion
//! still runs, it just skips quantization. A palette file that exists but
//! is unreadable or not a valid 7-color palette is an error.

use std::path::Path;

use eink_photo::Palette;
use image::RgbImage;

use crate::error::ConvertError;
use crate::models::PaletteSource;

/// Decode an input photo into 8-bit RGB.
pub fn read_image(path: &Path) -> Result<RgbImage, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(path = %path.display(), color = ?image.color(), "Decoded input image");
    Ok(image.into_rgb8())
}

/// Resolve the palette to quantize with.
///
/// Returns `Ok(None)` when the palette file does not exist.
pub fn read_palette(source: &PaletteSource) -> Result<Option<Palette>, ConvertError> {
    match source {
        PaletteSource::Inline(palette) => {
            tracing::debug!(colors = palette.len(), "Using palette from configuration");
            Ok(Some(palette.clone()))
        }
        PaletteSource::File(path) => read_palette_file(path),
    }
}

fn read_palette_file(path: &Path) -> Result<Option<Palette>, ConvertError> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Palette file not found, skipping dithering"
        );
        return Ok(None);
    }

    // GIF palettes decode to RGBA; alpha is irrelevant for swatches
    let swatch = image::open(path)
        .map_err(|source| ConvertError::PaletteDecode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();

    let palette = Palette::from_image(&swatch).map_err(|source| ConvertError::Palette {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), colors = palette.len(), "Loaded palette");
    Ok(Some(palette))
}
