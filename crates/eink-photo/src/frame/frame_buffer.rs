//! Row-major RGB frame buffer.

use image::RgbImage;
use rayon::prelude::*;

use crate::color::Rgb;

/// Frames with at least this many pixels are processed in parallel.
const PARALLEL_THRESHOLD: usize = 100_000;

/// A 2D grid of [`Rgb`] pixels in row-major order.
///
/// # Example
///
/// ```
/// use eink_photo::{FrameBuffer, Rgb};
///
/// let frame = FrameBuffer::filled(4, 2, Rgb::new(255, 0, 0));
/// assert_eq!(frame.width(), 4);
/// assert_eq!(frame.height(), 2);
/// assert_eq!(frame.get(3, 1), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    /// Wrap existing pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// A frame where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
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
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Replace every pixel with `f(pixel)`.
    ///
    /// `f` must not depend on any other pixel: large frames are split into
    /// rows and processed in parallel, small frames sequentially. Both
    /// paths produce identical output.
    pub fn par_map_pixels<F>(mut self, f: F) -> Self
    where
        F: Fn(Rgb) -> Rgb + Sync,
    {
        if self.pixels.len() >= PARALLEL_THRESHOLD && self.width > 0 {
            self.pixels.par_chunks_mut(self.width).for_each(|row| {
                for pixel in row.iter_mut() {
                    *pixel = f(*pixel);
                }
            });
        } else {
            for pixel in self.pixels.iter_mut() {
                *pixel = f(*pixel);
            }
        }
        self
    }

    /// Sequential variant of [`par_map_pixels`](Self::par_map_pixels).
    pub fn map_pixels<F>(mut self, f: F) -> Self
    where
        F: Fn(Rgb) -> Rgb,
    {
        for pixel in self.pixels.iter_mut() {
            *pixel = f(*pixel);
        }
        self
    }

    /// Convert from a decoded `image` buffer.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let pixels = image.pixels().map(|p| Rgb::from_bytes(p.0)).collect();
        Self::new(pixels, image.width() as usize, image.height() as usize)
    }

    /// Convert into an `image` buffer for encoding.
    pub fn into_rgb_image(self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Rgb(self.get(x as usize, y as usize).to_bytes())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> FrameBuffer {
        let pixels = (0..width * height)
            .map(|i| Rgb::new((i % 256) as u8, ((i / 7) % 256) as u8, ((i * 3) % 256) as u8))
            .collect();
        FrameBuffer::new(pixels, width, height)
    }

    #[test]
    fn test_get_is_row_major() {
        let frame = gradient(5, 3);
        assert_eq!(frame.get(2, 1), frame.pixels()[5 + 2]);
    }

    #[test]
    #[should_panic(expected = "pixel count")]
    fn test_new_rejects_wrong_length() {
        let _ = FrameBuffer::new(vec![Rgb::default(); 5], 2, 2);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        // Above the parallel threshold
        let frame = gradient(500, 250);
        let f = |p: Rgb| Rgb::new(p.b, p.r, p.g);
        let par = frame.clone().par_map_pixels(f);
        let seq = frame.map_pixels(f);
        assert_eq!(par, seq);
    }

    #[test]
    fn test_rgb_image_conversion_preserves_pixels() {
        let frame = gradient(7, 4);
        let image = frame.clone().into_rgb_image();
        assert_eq!(image.dimensions(), (7, 4));
        assert_eq!(image.get_pixel(3, 2).0, frame.get(3, 2).to_bytes());
        assert_eq!(FrameBuffer::from_rgb_image(&image), frame);
    }

    #[test]
    fn test_empty_frame_maps_without_panicking() {
        let frame = FrameBuffer::filled(0, 0, Rgb::default());
        let out = frame.par_map_pixels(|p| p);
        assert!(out.is_empty());
    }
}
