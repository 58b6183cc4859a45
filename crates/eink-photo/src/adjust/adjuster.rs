//! Adjustment steps and their fixed composition.

use crate::color::{truncate_channel, Rgb};
use crate::frame::FrameBuffer;

use super::options::{AdjustOptions, DEFAULT_SATURATION_PCT};

/// Contrast factor per unit of positive contrast.
const CONTRAST_BOOST_STEP: f64 = 0.2;
/// Contrast factor per unit of negative contrast.
const CONTRAST_CUT_STEP: f64 = 0.1;
/// Shadow lift per unit of `shadows` at full darkness, in 8-bit steps.
const SHADOW_LIFT_STEP: f64 = 5.0;

/// Run saturation, black level, contrast and shadow lift, in that order.
pub fn adjust(frame: FrameBuffer, options: &AdjustOptions) -> FrameBuffer {
    let frame = apply_saturation(frame, options.saturation_pct);
    let frame = apply_black_level(frame, options.black_level_pct);
    let frame = apply_contrast(frame, options.contrast);
    apply_shadow_lift(frame, options.shadows)
}

/// Scale each pixel's distance from its own grey value by
/// `saturation_pct / 100`.
///
/// The grey value is the pixel's integer [`luma`](Rgb::luma). 100 returns
/// the frame untouched.
pub fn apply_saturation(frame: FrameBuffer, saturation_pct: f64) -> FrameBuffer {
    if saturation_pct == DEFAULT_SATURATION_PCT {
        return frame;
    }
    let factor = saturation_pct / 100.0;
    frame.par_map_pixels(|pixel| {
        let grey = pixel.luma() as f64;
        pixel.map_channels(|c| grey + factor * (c - grey))
    })
}

/// Add `black_level_pct * 255 / 100` to every channel.
///
/// Values <= 0 return the frame untouched; the black point is only ever
/// raised.
pub fn apply_black_level(frame: FrameBuffer, black_level_pct: f64) -> FrameBuffer {
    if black_level_pct <= 0.0 {
        return frame;
    }
    let offset = black_level_pct * 255.0 / 100.0;
    frame.par_map_pixels(|pixel| pixel.map_channels(|c| c + offset))
}

/// Enhancement factor for a signed contrast value.
///
/// ```
/// use eink_photo::contrast_factor;
/// assert!((contrast_factor(1.0) - 1.2).abs() < 1e-12);
/// assert!((contrast_factor(-2.0) - 0.8).abs() < 1e-12);
/// assert_eq!(contrast_factor(0.0), 1.0);
/// ```
#[inline]
pub fn contrast_factor(contrast: f64) -> f64 {
    if contrast > 0.0 {
        1.0 + contrast * CONTRAST_BOOST_STEP
    } else {
        1.0 + contrast * CONTRAST_CUT_STEP
    }
}

/// Stretch every channel linearly around the frame's mean grey.
///
/// The pivot is the mean [`luma`](Rgb::luma) of the whole frame, rounded
/// to the nearest integer, so a frame of uniform grey keeps its grey level.
/// Contrast 0 and empty frames return the input untouched.
pub fn apply_contrast(frame: FrameBuffer, contrast: f64) -> FrameBuffer {
    if contrast == 0.0 || frame.is_empty() {
        return frame;
    }
    let factor = contrast_factor(contrast);
    let pivot = mean_luma(&frame);
    frame.par_map_pixels(|pixel| pixel.map_channels(|c| pivot + factor * (c - pivot)))
}

/// Brighten pixels in proportion to their darkness.
///
/// Each channel gains `(255 - luminance) / 255 * shadows * 5`, so black
/// pixels get the full lift and white pixels none. `shadows <= 0` returns
/// the frame untouched.
pub fn apply_shadow_lift(frame: FrameBuffer, shadows: f64) -> FrameBuffer {
    if shadows <= 0.0 {
        return frame;
    }
    frame.par_map_pixels(|pixel| {
        let mask = (255.0 - pixel.luminance()) / 255.0;
        let lift = mask * shadows * SHADOW_LIFT_STEP;
        pixel.map_channels(|c| c + lift)
    })
}

/// Mean integer luma of all pixels, rounded half up.
fn mean_luma(frame: &FrameBuffer) -> f64 {
    let sum: u64 = frame.pixels().iter().map(|p| p.luma() as u64).sum();
    let mean = sum as f64 / frame.pixels().len() as f64;
    (mean + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_frame() -> FrameBuffer {
        let pixels = (0..48)
            .map(|i| {
                Rgb::new(
                    (i * 5) as u8,
                    (255 - i * 4) as u8,
                    ((i * 37) % 256) as u8,
                )
            })
            .collect();
        FrameBuffer::new(pixels, 8, 6)
    }

    #[test]
    fn test_identity_is_byte_exact() {
        let frame = sample_frame();
        assert_eq!(adjust(frame.clone(), &AdjustOptions::identity()), frame);
    }

    #[test]
    fn test_saturation_zero_is_greyscale() {
        let out = apply_saturation(sample_frame(), 0.0);
        for p in out.pixels() {
            assert_eq!(p.r, p.g);
            assert_eq!(p.g, p.b);
        }
    }

    #[test]
    fn test_saturation_boost_spreads_channels() {
        let pixel = Rgb::new(150, 100, 100);
        let out = apply_saturation(FrameBuffer::filled(1, 1, pixel), 200.0).get(0, 0);
        // luma = 114.6 -> 115; 115 + 2 * 35 = 185, 115 + 2 * -15 = 85
        assert_eq!(out, Rgb::new(185, 85, 85));
    }

    #[test]
    fn test_black_level_raises_floor_and_clamps() {
        let frame = FrameBuffer::new(vec![Rgb::new(0, 128, 250)], 1, 1);
        let out = apply_black_level(frame, 10.0).get(0, 0);
        assert_eq!(out, Rgb::new(25, 153, 255));
    }

    #[test]
    fn test_black_level_never_lowers() {
        let frame = sample_frame();
        assert_eq!(apply_black_level(frame.clone(), -20.0), frame);
    }

    #[test]
    fn test_contrast_keeps_uniform_grey() {
        let frame = FrameBuffer::filled(4, 4, Rgb::new(100, 100, 100));
        for contrast in [-5.0, 1.0, 4.0] {
            assert_eq!(apply_contrast(frame.clone(), contrast), frame);
        }
    }

    #[test]
    fn test_contrast_stretches_around_mean() {
        // Two pixels, luma 50 and 150 -> pivot 100
        let frame = FrameBuffer::new(vec![Rgb::new(50, 50, 50), Rgb::new(150, 150, 150)], 2, 1);
        let out = apply_contrast(frame.clone(), 1.0);
        // 100 + 1.2 * -50 = 40, 100 + 1.2 * 50 = 160
        assert_eq!(out.get(0, 0), Rgb::new(40, 40, 40));
        assert_eq!(out.get(1, 0), Rgb::new(160, 160, 160));

        let out = apply_contrast(frame, -5.0);
        // factor 0.5
        assert_eq!(out.get(0, 0), Rgb::new(75, 75, 75));
        assert_eq!(out.get(1, 0), Rgb::new(125, 125, 125));
    }

    #[test]
    fn test_contrast_on_empty_frame() {
        let frame = FrameBuffer::filled(0, 3, Rgb::default());
        assert!(apply_contrast(frame, 3.0).is_empty());
    }

    #[test]
    fn test_shadow_lift_favours_dark_pixels() {
        let frame = FrameBuffer::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)], 2, 1);
        let out = apply_shadow_lift(frame, 2.0);
        assert_eq!(out.get(0, 0), Rgb::new(10, 10, 10));
        assert_eq!(out.get(1, 0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_order_black_level_before_contrast() {
        // Black level first makes every pixel equal to 255 after clamping,
        // so the contrast step has nothing to stretch.
        let frame = FrameBuffer::new(vec![Rgb::new(200, 200, 200), Rgb::new(250, 250, 250)], 2, 1);
        let opts = AdjustOptions::identity().black_level(40.0).contrast(5.0);
        let out = adjust(frame, &opts);
        assert!(out.pixels().iter().all(|&p| p == Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_extreme_values_stay_in_range() {
        let opts = AdjustOptions::new()
            .saturation(10_000.0)
            .black_level(500.0)
            .contrast(-100.0)
            .shadows(1e9);
        let out = adjust(sample_frame(), &opts);
        assert_eq!((out.width(), out.height()), (8, 6));
    }
}
