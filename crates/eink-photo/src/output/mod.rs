//! Output of the quantization stage.
//!
//! [`DitheredImage`] keeps the palette indices as the canonical form and
//! expands them back to RGB pixels on demand, for encoding.

mod dithered_image;

pub use dithered_image::DitheredImage;
