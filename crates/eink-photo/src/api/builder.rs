//! PhotoConverter builder, the one place the stage order is fixed.

use image::RgbImage;

use crate::adjust::{adjust, AdjustOptions};
use crate::correct::{colorize, CurveParams};
use crate::dither::{quantize, DitherMode};
use crate::frame::FrameBuffer;
use crate::geometry::{fit_to_target, AspectRatio, GeometryError, TargetGeometry};
use crate::output::DitheredImage;
use crate::palette::Palette;

/// Full photo pipeline for the 7-color panel.
///
/// Stages always run in this order:
///
/// 1. Geometry: crop to the target ratio, resize to the panel resolution
/// 2. Blue correction ([`colorize`])
/// 3. Adjustments ([`adjust`])
/// 4. Quantization ([`quantize`]), only when a palette is set
///
/// Configuration methods consume and return `self`; [`convert()`] takes
/// `&self`, so one converter can be reused for many images.
///
/// # Example
///
/// ```
/// use eink_photo::{CurveParams, PhotoConverter, Palette};
/// use image::RgbImage;
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
/// let converter = PhotoConverter::new()
///     .curve(CurveParams::new().strength(1.0))
///     .palette(Some(palette.clone()));
///
/// let source = RgbImage::from_pixel(1000, 600, image::Rgb([200, 40, 40]));
/// let frame = converter.convert(&source).unwrap();
///
/// assert_eq!((frame.width(), frame.height()), (800, 480));
/// assert!(frame.pixels().iter().all(|&p| palette.contains(p)));
/// ```
///
/// [`convert()`]: PhotoConverter::convert
#[derive(Debug, Clone, Default)]
pub struct PhotoConverter {
    curve: CurveParams,
    adjustments: AdjustOptions,
    palette: Option<Palette>,
    dither: DitherMode,
    aspect_ratio: Option<AspectRatio>,
}

impl PhotoConverter {
    /// Default curve (no blue reduction), default adjustments (contrast 1),
    /// Floyd-Steinberg dithering, no palette.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn curve(mut self, curve: CurveParams) -> Self {
        self.curve = curve;
        self
    }

    #[inline]
    pub fn adjustments(mut self, adjustments: AdjustOptions) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Palette to quantize to. `None` skips quantization entirely.
    #[inline]
    pub fn palette(mut self, palette: Option<Palette>) -> Self {
        self.palette = palette;
        self
    }

    #[inline]
    pub fn dither(mut self, mode: DitherMode) -> Self {
        self.dither = mode;
        self
    }

    /// Override the orientation's crop ratio (see
    /// [`TargetGeometry::with_ratio`]).
    #[inline]
    pub fn aspect_ratio(mut self, ratio: Option<AspectRatio>) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    #[inline]
    pub fn has_palette(&self) -> bool {
        self.palette.is_some()
    }

    /// Crop ratio and output size used for a source of the given size.
    pub fn target_for(&self, width: u32, height: u32) -> TargetGeometry {
        let target = TargetGeometry::for_source(width, height);
        match self.aspect_ratio {
            Some(ratio) => target.with_ratio(ratio),
            None => target,
        }
    }

    /// Run every stage on a decoded image.
    pub fn convert(&self, image: &RgbImage) -> Result<FrameBuffer, GeometryError> {
        let target = self.target_for(image.width(), image.height());
        let frame = fit_to_target(image, &target)?;
        Ok(self.process(frame))
    }

    /// Run the color stages on a frame that is already at its final size.
    pub fn process(&self, frame: FrameBuffer) -> FrameBuffer {
        let frame = self.correct(frame);
        match self.quantize(&frame) {
            Some(dithered) => dithered.to_frame(),
            None => frame,
        }
    }

    /// Blue correction followed by the adjustments.
    pub fn correct(&self, frame: FrameBuffer) -> FrameBuffer {
        let frame = colorize(frame, &self.curve);
        adjust(frame, &self.adjustments)
    }

    /// Quantize a corrected frame, or `None` when no palette is set.
    pub fn quantize(&self, frame: &FrameBuffer) -> Option<DitheredImage> {
        self.palette
            .as_ref()
            .map(|palette| quantize(frame, palette, self.dither))
    }
}
