#![allow(clippy::module_inception)]

//! eink-photo: photo preparation for 7-color e-ink panels
//!
//! Converts an arbitrary photo into a frame the panel can show well:
//! cropped and resized to the panel resolution, with the blue cast these
//! panels produce corrected, tone adjusted, and finally quantized to the
//! panel's palette with error diffusion.
//!
//! # Quick Start
//!
//! The [`PhotoConverter`] builder runs the whole pipeline:
//!
//! ```
//! use eink_photo::{AdjustOptions, CurveParams, DitherMode, Palette, PhotoConverter};
//! use image::RgbImage;
//!
//! let palette = Palette::from_hex(&[
//!     "#000000", "#FFFFFF", "#00FF00", "#0000FF", "#FF0000", "#FFFF00", "#FF8000",
//! ])
//! .unwrap();
//!
//! let converter = PhotoConverter::new()
//!     .curve(CurveParams::new().strength(1.5).dark_strength(2.0))
//!     .adjustments(AdjustOptions::new().saturation(120.0))
//!     .dither(DitherMode::FloydSteinberg)
//!     .palette(Some(palette));
//!
//! let photo = RgbImage::from_pixel(640, 960, image::Rgb([90, 110, 170]));
//! let frame = converter.convert(&photo).unwrap();
//! assert_eq!((frame.width(), frame.height()), (480, 800));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! decoded image
//!     |
//!     v
//! geometry      center crop to 5:3 / 3:5, Lanczos3 resize to 800x480 / 480x800
//!     |
//!     v
//! colorize      blue reduction: blue-dominance curve x darkness factor
//!     |
//!     v
//! adjust        saturation -> black level -> contrast -> shadow lift
//!     |
//!     v
//! quantize      Floyd-Steinberg (or nearest color) onto the palette
//! ```
//!
//! Every stage takes a [`FrameBuffer`] by value and returns a new one.
//! The per-pixel stages are data-parallel; error diffusion is inherently
//! sequential and walks the frame in raster order.
//!
//! # Blue Reduction Curve
//!
//! With `x = 1.5 * b / (r + g + b)` the multiplier applied to blue is
//!
//! ```text
//! m(x) = ( (-4 pi^2 e^(3x) + 6 pi sin(2 pi x) - 9 cos(2 pi x) + 9 + 4 pi^2)
//!          * e^(3 - 3x) / (4 pi^2 (1 - e^3)) - 1 ) * strength + 1
//! ```
//!
//! which is `1 - strength` when there is no blue at all, climbs smoothly
//! to exactly 1 at a blue share of two thirds, and overshoots slightly
//! beyond that. Greys and warm tones lose blue; strongly blue pixels keep
//! it. See [`blue_multiplier`].
//!
//! # Numeric Conventions
//!
//! - Channels are `u8`. Stages compute in `f64`, clamp to `[0, 255]`, and
//!   **truncate** back to bytes.
//! - Palette matching uses squared Euclidean distance in 8-bit RGB; ties go
//!   to the lower palette index.
//! - Error diffusion accumulates per-channel error in `f32`.

pub mod adjust;
pub mod api;
pub mod color;
pub mod correct;
pub mod dither;
pub mod frame;
pub mod geometry;
pub mod output;
pub mod palette;


pub use adjust::{
    adjust, apply_black_level, apply_contrast, apply_saturation, apply_shadow_lift,
    contrast_factor, AdjustOptions, DEFAULT_BLACK_LEVEL_PCT, DEFAULT_CONTRAST,
    DEFAULT_SATURATION_PCT, DEFAULT_SHADOWS,
};
pub use api::PhotoConverter;
pub use color::{truncate_channel, Rgb};
pub use correct::{
    blue_multiplier, blue_ratio, colorize, correct_pixel, CurveParams, DEFAULT_LUMINANCE_THRESHOLD,
};
pub use dither::{quantize, Dither, DitherMode, FloydSteinberg, NearestColor, UnknownDitherMode};
pub use frame::FrameBuffer;
pub use geometry::{
    crop_box, crop_to_ratio, fit_to_target, resize_lanczos, AspectRatio, AspectRatioError,
    CropBox, GeometryError, Orientation, TargetGeometry,
};
pub use output::DitheredImage;
pub use palette::{Palette, PaletteError, ParseColorError};
