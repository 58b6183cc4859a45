//! Palette quantization, with or without error diffusion.
//!
//! Both modes map every pixel to an index into a [`Palette`]; they differ
//! in what happens to the quantization error:
//!
//! - **Floyd-Steinberg** ([`DitherMode::FloydSteinberg`], the default):
//!   the error is spread over the unvisited neighbors in strict raster
//!   order, so regional averages survive quantization.
//! - **Nearest** ([`DitherMode::Nearest`]): the error is dropped and every
//!   pixel is mapped independently.
//!
//! All arithmetic happens on 8-bit sRGB channel values widened to `f32`,
//! and colors are matched by squared Euclidean RGB distance.
//!
//! # Example
//!
//! ```
//! use eink_photo::{quantize, DitherMode, FrameBuffer, Palette, Rgb};
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
//! let frame = FrameBuffer::filled(8, 8, Rgb::new(128, 128, 128));
//!
//! let dithered = quantize(&frame, &palette, DitherMode::FloydSteinberg);
//! assert!(dithered.indices().iter().all(|&i| i < 2));
//! ```

mod floyd_steinberg;
mod kernel;
mod nearest;

use std::fmt;
use std::str::FromStr;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use nearest::NearestColor;

use crate::color::Rgb;
use crate::frame::FrameBuffer;
use crate::output::DitheredImage;
use crate::palette::Palette;

/// Quantization mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Nearest palette color per pixel, no diffusion.
    Nearest,
}

impl DitherMode {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Nearest => "none",
        }
    }

    fn ditherer(self) -> &'static (dyn Dither + Sync) {
        match self {
            Self::FloydSteinberg => &FloydSteinberg,
            Self::Nearest => &NearestColor,
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a dither mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dither mode {0:?}, expected \"floyd-steinberg\" or \"none\"")]
pub struct UnknownDitherMode(pub String);

impl FromStr for DitherMode {
    type Err = UnknownDitherMode;

    /// Accepts `floyd-steinberg` (also `floydsteinberg`, `diffusion`, `fs`)
    /// and `none` (also `nearest`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floyd-steinberg" | "floydsteinberg" | "diffusion" | "fs" => Ok(Self::FloydSteinberg),
            "none" | "nearest" => Ok(Self::Nearest),
            _ => Err(UnknownDitherMode(s.to_string())),
        }
    }
}

/// A palette quantization algorithm.
pub trait Dither {
    /// Map a frame to palette indices.
    ///
    /// Returns one index per pixel in row-major order, each in
    /// `0..palette.len()`.
    fn dither(&self, frame: &FrameBuffer, palette: &Palette) -> Vec<u8>;
}

/// Quantize `frame` to `palette` using `mode`.
pub fn quantize(frame: &FrameBuffer, palette: &Palette, mode: DitherMode) -> DitheredImage {
    let indices = mode.ditherer().dither(frame, palette);
    DitheredImage::new(indices, frame.width(), frame.height(), palette.clone())
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`).
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, etc.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// `row_depth` is the kernel's `max_dy + 1`.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel, `row_offset` rows below the current one.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for (acc, e) in self.rows[row_offset][x].iter_mut().zip(error) {
                *acc += e;
            }
        }
    }

    /// Advance to the next row.
    ///
    /// The first row is discarded, the rest shift forward, and a zeroed
    /// row is appended.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Core error diffusion loop, parameterized by kernel.
///
/// Pixels are visited left to right, top to bottom. Each pixel plus its
/// accumulated error is clamped to `[0, 255]` per channel before the
/// nearest palette color is chosen; the error diffused onward is the
/// clamped value minus the chosen color.
pub(crate) fn dither_with_kernel(frame: &FrameBuffer, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let (width, height) = (frame.width(), frame.height());
    let pixels = frame.pixels();
    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let pixel = pixels[idx];
            let accumulated = error_buf.get_accumulated(x);

            let wanted = [
                (pixel.r as f32 + accumulated[0]).clamp(0.0, 255.0),
                (pixel.g as f32 + accumulated[1]).clamp(0.0, 255.0),
                (pixel.b as f32 + accumulated[2]).clamp(0.0, 255.0),
            ];
            let target = Rgb::new(
                wanted[0].round() as u8,
                wanted[1].round() as u8,
                wanted[2].round() as u8,
            );

            let best = palette.find_nearest(target);
            output[idx] = best;

            let chosen = palette.color(best as usize);
            let error = [
                wanted[0] - chosen.r as f32,
                wanted[1] - chosen.g as f32,
                wanted[2] - chosen.b as f32,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                if nx < 0 {
                    continue;
                }
                let share = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * share, error[1] * share, error[2] * share],
                );
            }
        }
        error_buf.advance_row();
    }

    output
}
