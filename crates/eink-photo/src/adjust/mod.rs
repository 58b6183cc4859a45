//! Tone and color adjustments applied after blue correction.
//!
//! The stage runs four steps in a fixed order; each later step sees the
//! output of the earlier ones:
//!
//! 1. **Saturation**: blend every pixel with its own grey value
//! 2. **Black level**: lift every channel by a constant
//! 3. **Contrast**: stretch every channel around the frame's mean grey
//! 4. **Shadow lift**: brighten dark pixels more than light ones
//!
//! Each step is skipped outright at its identity value (saturation 100,
//! black level <= 0, contrast 0, shadows <= 0), so a neutral configuration
//! returns the frame byte for byte.
//!
//! # Example
//!
//! ```
//! use eink_photo::{adjust, AdjustOptions, FrameBuffer, Rgb};
//!
//! let frame = FrameBuffer::filled(4, 4, Rgb::new(40, 60, 80));
//! let neutral = AdjustOptions::identity();
//! assert_eq!(adjust(frame.clone(), &neutral), frame);
//!
//! let lifted = adjust(frame, &AdjustOptions::identity().black_level(10.0));
//! assert_eq!(lifted.get(0, 0), Rgb::new(65, 85, 105));
//! ```

mod adjuster;
mod options;

pub use adjuster::{
    adjust, apply_black_level, apply_contrast, apply_saturation, apply_shadow_lift,
    contrast_factor,
};
pub use options::{
    AdjustOptions, DEFAULT_BLACK_LEVEL_PCT, DEFAULT_CONTRAST, DEFAULT_SATURATION_PCT,
    DEFAULT_SHADOWS,
};
