//! Selective blue suppression.
//!
//! Cheap 7-color e-ink panels render blue far more saturated than it looks
//! on a monitor, so photos pick up a blue cast once dithered. This module
//! reduces the blue channel of each pixel based on two signals:
//!
//! 1. **Blue dominance**: `blue_ratio = b / (r + g + b)` fed through a
//!    smooth closed-form curve ([`blue_multiplier`]). Pixels where blue is
//!    not dominant are pulled down hardest; the curve reaches 1 at a blue
//!    ratio of 2/3.
//! 2. **Darkness**: pixels below a luminance threshold lose additional blue
//!    in proportion to how dark they are.
//!
//! Both factors multiply into one reduction factor applied once to the blue
//! channel. Red and green are never touched.
//!
//! # Example
//!
//! ```
//! use eink_photo::{colorize, CurveParams, FrameBuffer, Rgb};
//!
//! let frame = FrameBuffer::filled(2, 2, Rgb::new(120, 110, 100));
//! let params = CurveParams::new().strength(1.0);
//! let out = colorize(frame, &params);
//!
//! let p = out.get(0, 0);
//! assert_eq!((p.r, p.g), (120, 110));
//! assert!(p.b < 100);
//! ```

mod corrector;
mod curve;
mod options;

pub use corrector::{colorize, correct_pixel};
pub use curve::{blue_multiplier, blue_ratio, BLUE_RATIO_EPSILON, CURVE_DOMAIN_SCALE};
pub use options::{CurveParams, DEFAULT_LUMINANCE_THRESHOLD};
