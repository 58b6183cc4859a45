//! Color types
//!
//! The whole pipeline works on 8-bit sRGB triples: that is what the decoder
//! hands us, what the display palette is defined in, and what the bitmap
//! encoder writes. Stages that need more precision convert to `f64`
//! internally and truncate back to bytes before handing the frame on.
//!
//! # Example
//!
//! ```
//! use eink_photo::Rgb;
//!
//! let orange: Rgb = "#FF8000".parse().unwrap();
//! assert_eq!(orange, Rgb::new(255, 128, 0));
//! assert_eq!(orange.to_bytes(), [255, 128, 0]);
//! ```

mod rgb;

pub use rgb::{truncate_channel, Rgb};
