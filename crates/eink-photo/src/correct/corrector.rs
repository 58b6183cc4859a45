//! Per-pixel blue correction and its whole-frame application.

use crate::color::{truncate_channel, Rgb};
use crate::frame::FrameBuffer;

use super::curve::{blue_multiplier, blue_ratio};
use super::options::CurveParams;

/// Scales the darkness term so `dark_strength` values around 1..10 are
/// usable.
const DARK_REDUCTION_SCALE: f64 = 0.1;

/// Correct the blue channel of one pixel.
///
/// The reduction factor starts at 1 and is multiplied by
///
/// 1. `1 - dark_strength * (1 - luminance / threshold) * 0.1` when
///    `dark_strength > 0` and the pixel's luminance is below the threshold;
/// 2. [`blue_multiplier`] when `strength > 0`.
///
/// The new blue value is `b * factor`, clamped to `0..=255` and truncated.
/// Red and green are returned unchanged, and with both strengths at zero
/// the pixel is returned as-is.
///
/// ```
/// use eink_photo::{correct_pixel, CurveParams, Rgb};
///
/// let params = CurveParams::new().strength(1.0);
/// let out = correct_pixel(Rgb::new(200, 180, 160), &params);
/// assert_eq!((out.r, out.g), (200, 180));
/// assert!(out.b < 160);
/// ```
pub fn correct_pixel(pixel: Rgb, params: &CurveParams) -> Rgb {
    if params.is_identity() {
        return pixel;
    }

    let normalized = pixel.normalized();
    let [r, g, b] = normalized;
    let luminance = 0.299 * r + 0.587 * g + 0.114 * b;

    let mut factor = 1.0;

    if params.dark_strength > 0.0 && luminance < params.luminance_threshold {
        let darkness = 1.0 - luminance / params.luminance_threshold;
        factor *= 1.0 - params.dark_strength * darkness * DARK_REDUCTION_SCALE;
    }

    if params.strength > 0.0 {
        factor *= blue_multiplier(blue_ratio(normalized), params.strength);
    }

    Rgb::new(pixel.r, pixel.g, truncate_channel(b * factor * 255.0))
}

/// Apply [`correct_pixel`] to every pixel of a frame.
///
/// Pixels are independent, so large frames are processed in parallel.
/// The output always has the input's dimensions.
pub fn colorize(frame: FrameBuffer, params: &CurveParams) -> FrameBuffer {
    if params.is_identity() {
        return frame;
    }
    frame.par_map_pixels(|pixel| correct_pixel(pixel, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_over_rgb_cube() {
        let params = CurveParams::default();
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let pixel = Rgb::new(r, g, b);
                    assert_eq!(correct_pixel(pixel, &params), pixel);
                }
            }
        }
    }

    #[test]
    fn test_zero_blue_is_never_changed() {
        for strength in [0.5, 1.0, 10.0, 100.0] {
            let params = CurveParams::new().strength(strength).dark_strength(5.0);
            for pixel in [Rgb::new(0, 0, 0), Rgb::new(255, 0, 0), Rgb::new(12, 200, 0)] {
                assert_eq!(correct_pixel(pixel, &params), pixel, "strength {strength}");
            }
        }
    }

    #[test]
    fn test_red_and_green_untouched() {
        let params = CurveParams::new().strength(3.0).dark_strength(4.0);
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                let out = correct_pixel(Rgb::new(r, g, 128), &params);
                assert_eq!((out.r, out.g), (r, g));
            }
        }
    }

    #[test]
    fn test_neutral_grey_reduction_truncates() {
        // blue ratio 1/3 -> multiplier 0.7105..., 128 * 0.7105 = 90.9
        let params = CurveParams::new().strength(1.0);
        let out = correct_pixel(Rgb::new(128, 128, 128), &params);
        assert_eq!(out.b, 90);
    }

    #[test]
    fn test_dark_reduction_only_below_threshold() {
        let params = CurveParams::new().dark_strength(5.0);

        // Luminance 0.8: above the threshold, untouched
        let bright = Rgb::new(204, 204, 204);
        assert_eq!(correct_pixel(bright, &params), bright);

        // Luminance ~0.1: darkness ~0.714, factor ~0.643
        let dark = Rgb::new(26, 26, 26);
        let out = correct_pixel(dark, &params);
        assert!(out.b < 26);
        assert!(out.b >= 15, "got {}", out.b);
    }

    #[test]
    fn test_custom_threshold_widens_dark_range() {
        let pixel = Rgb::new(128, 128, 128); // luminance ~0.5
        let default = CurveParams::new().dark_strength(5.0);
        let wide = default.luminance_threshold(0.9);
        assert_eq!(correct_pixel(pixel, &default), pixel);
        assert!(correct_pixel(pixel, &wide).b < 128);
    }

    #[test]
    fn test_extreme_parameters_stay_in_range() {
        let params = CurveParams::new().strength(1e6).dark_strength(1e6);
        for pixel in [
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(10, 10, 10),
            Rgb::new(0, 0, 1),
        ] {
            // u8 output; this exercises the clamp instead of wrapping
            let out = correct_pixel(pixel, &params);
            assert_eq!((out.r, out.g), (pixel.r, pixel.g));
        }
        // Strongly negative factor clamps to zero
        let grey = correct_pixel(Rgb::new(200, 200, 200), &CurveParams::new().strength(10.0));
        assert_eq!(grey.b, 0);
    }

    #[test]
    fn test_colorize_preserves_dimensions() {
        let frame = FrameBuffer::filled(13, 7, Rgb::new(90, 100, 200));
        let out = colorize(frame, &CurveParams::new().strength(2.0));
        assert_eq!((out.width(), out.height()), (13, 7));
    }

    #[test]
    fn test_colorize_matches_per_pixel() {
        let pixels: Vec<Rgb> = (0..64)
            .map(|i| Rgb::new((i * 4) as u8, (255 - i * 3) as u8, (i * 2 + 60) as u8))
            .collect();
        let params = CurveParams::new().strength(1.2).dark_strength(3.0);
        let expected: Vec<Rgb> = pixels.iter().map(|&p| correct_pixel(p, &params)).collect();
        let out = colorize(FrameBuffer::new(pixels, 8, 8), &params);
        assert_eq!(out.pixels(), expected.as_slice());
    }
}
