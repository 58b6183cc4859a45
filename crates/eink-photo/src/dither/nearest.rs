//! Plain nearest-color mapping.

use rayon::prelude::*;

use crate::frame::FrameBuffer;
use crate::palette::Palette;

use super::Dither;

/// Maps each pixel to its nearest palette color without error diffusion.
///
/// Every pixel is independent, so the frame is mapped in parallel.
pub struct NearestColor;

impl Dither for NearestColor {
    fn dither(&self, frame: &FrameBuffer, palette: &Palette) -> Vec<u8> {
        frame
            .pixels()
            .par_iter()
            .map(|&pixel| palette.find_nearest(pixel))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_flat_field_maps_to_one_color() {
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
        let frame = FrameBuffer::filled(8, 8, Rgb::new(100, 100, 100));
        assert!(NearestColor.dither(&frame, &palette).iter().all(|&i| i == 0));
    }

    #[test]
    fn test_preserves_pixel_order() {
        let palette = Palette::from_hex(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        let frame = FrameBuffer::new(
            vec![Rgb::new(0, 0, 200), Rgb::new(200, 0, 0), Rgb::new(0, 200, 10)],
            3,
            1,
        );
        assert_eq!(NearestColor.dither(&frame, &palette), vec![2, 0, 1]);
    }
}
