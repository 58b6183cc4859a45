//! Indexed image produced by the quantizer.

use crate::color::Rgb;
use crate::frame::FrameBuffer;
use crate::palette::Palette;

/// One palette index per pixel in row-major order, plus the palette the
/// indices refer to.
///
/// # Example
///
/// ```
/// use eink_photo::{DitheredImage, Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let image = DitheredImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// let frame = image.to_frame();
/// assert_eq!(frame.get(1, 0), Rgb::new(255, 255, 255));
/// assert_eq!(frame.get(1, 1), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl DitheredImage {
    /// Wrap quantizer output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of pixels using each palette entry, indexed like the palette.
    pub fn color_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }

    /// Expand the indices into an RGB frame.
    pub fn to_frame(&self) -> FrameBuffer {
        let pixels: Vec<Rgb> = self
            .indices
            .iter()
            .map(|&idx| self.palette.color(idx as usize))
            .collect();
        FrameBuffer::new(pixels, self.width, self.height)
    }
}
