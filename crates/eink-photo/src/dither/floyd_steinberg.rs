//! Floyd-Steinberg error diffusion.

use crate::frame::FrameBuffer;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// Pixels are visited in strict raster order. Each pixel, plus the error
/// pushed onto it by earlier pixels, is snapped to the nearest palette
/// color, and the difference is spread over the unvisited neighbors:
///
/// ```text
///        X   7
///    3   5   1      (sixteenths)
/// ```
///
/// Because all of the error is passed on, the average color of a region
/// is preserved even though every output pixel is a palette color.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, frame: &FrameBuffer, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(frame, palette, &FLOYD_STEINBERG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn black_white() -> Palette {
        Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_mid_grey_mixes_black_and_white() {
        let frame = FrameBuffer::filled(4, 4, Rgb::new(128, 128, 128));
        let result = FloydSteinberg.dither(&frame, &black_white());
        assert_eq!(result.len(), 16);
        let white = result.iter().filter(|&&i| i == 1).count();
        assert!((6..=10).contains(&white), "got {white} white pixels");
    }

    #[test]
    fn test_exact_colors_pass_through() {
        let frame = FrameBuffer::filled(5, 3, Rgb::new(0, 0, 0));
        assert!(FloydSteinberg.dither(&frame, &black_white()).iter().all(|&i| i == 0));
        let frame = FrameBuffer::filled(5, 3, Rgb::new(255, 255, 255));
        assert!(FloydSteinberg.dither(&frame, &black_white()).iter().all(|&i| i == 1));
    }

    #[test]
    fn test_brightness_is_preserved() {
        let (width, height) = (32, 32);
        let level = 77u8; // ~30%
        let frame = FrameBuffer::filled(width, height, Rgb::new(level, level, level));
        let result = FloydSteinberg.dither(&frame, &black_white());
        let white_ratio =
            result.iter().filter(|&&i| i == 1).count() as f32 / (width * height) as f32;
        assert!(
            (white_ratio - level as f32 / 255.0).abs() < 0.05,
            "white ratio {white_ratio}"
        );
    }

    #[test]
    fn test_first_row_diffuses_to_the_right() {
        // 100 -> black (+100), 143.75 -> white (-111.25), 51.33 -> black
        let frame = FrameBuffer::filled(3, 1, Rgb::new(100, 100, 100));
        assert_eq!(FloydSteinberg.dither(&frame, &black_white()), vec![0, 1, 0]);
    }
}
