//! Assertion helpers for tests.

use std::path::Path;

use eink_photo::{Palette, Rgb};
use image::{ImageFormat, RgbImage};
use pretty_assertions::assert_eq;

/// Assert `path` is a BMP of the given size and return its pixels
pub fn assert_bmp(path: &Path, width: u32, height: u32) -> RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert_eq!(&bytes[..2], b"BM", "Expected BMP signature");

    let image = image::load_from_memory_with_format(&bytes, ImageFormat::Bmp)
        .expect("Output should decode as BMP")
        .into_rgb8();
    assert_eq!(image.dimensions(), (width, height));
    image
}

/// Assert every pixel is a palette color
pub fn assert_palette_only(image: &RgbImage, palette: &Palette) {
    for (x, y, pixel) in image.enumerate_pixels() {
        let color = Rgb::from_bytes(pixel.0);
        assert!(
            palette.contains(color),
            "Pixel ({x}, {y}) = {color:?} is not a palette color"
        );
    }
}

/// Assert every pixel has the same color
pub fn assert_uniform(image: &RgbImage, expected: Rgb) {
    for (x, y, pixel) in image.enumerate_pixels() {
        assert_eq!(
            Rgb::from_bytes(pixel.0),
            expected,
            "Pixel ({x}, {y}) differs"
        );
    }
}
