//! Fixed display palette with nearest-color lookup.

use std::collections::HashSet;

use image::RgbImage;

use super::error::PaletteError;
use crate::color::Rgb;

/// An ordered set of at most [`Palette::MAX_COLORS`] distinct colors.
///
/// The palette is what the e-ink panel can physically show. It is built
/// once per run and never changes while a frame is being quantized.
///
/// # Example
///
/// ```
/// use eink_photo::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.find_nearest(Rgb::new(200, 30, 40)), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Largest palette a 7-color panel supports.
    pub const MAX_COLORS: usize = 7;

    /// Create a palette from distinct colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] for an empty slice
    /// - [`PaletteError::TooManyColors`] for more than [`Self::MAX_COLORS`]
    /// - [`PaletteError::DuplicateColor`] when a color repeats
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                max: Self::MAX_COLORS,
            });
        }

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex strings such as `"#FF8000"` or `"f80"`.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| {
                s.as_ref()
                    .parse::<Rgb>()
                    .map_err(|source| PaletteError::ParseColor {
                        input: s.as_ref().to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Collect the distinct colors of a palette image.
    ///
    /// Colors are taken in raster order of first appearance, so a swatch
    /// image painted left to right yields its colors left to right.
    pub fn from_image(image: &RgbImage) -> Result<Self, PaletteError> {
        let mut seen = HashSet::new();
        let mut colors = Vec::new();
        for pixel in image.pixels() {
            let color = Rgb::from_bytes(pixel.0);
            if seen.insert(color) {
                if colors.len() == Self::MAX_COLORS {
                    return Err(PaletteError::TooManyColors {
                        max: Self::MAX_COLORS,
                    });
                }
                colors.push(color);
            }
        }
        Self::new(&colors)
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// True when `color` is a palette entry.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Index of the palette color closest to `pixel` (squared Euclidean
    /// distance in RGB). Ties resolve to the lower index.
    pub fn find_nearest(&self, pixel: Rgb) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &color) in self.colors.iter().enumerate() {
            let dist = pixel.distance_sq(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx as u8
    }
}
