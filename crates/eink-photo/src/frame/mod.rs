//! In-memory frame buffers.
//!
//! A [`FrameBuffer`] is the unit of ownership that moves through the
//! pipeline. Each stage takes a frame by value and returns the transformed
//! frame, so no two stages ever see the same buffer.
//!
//! Two traversal contracts exist:
//!
//! - [`FrameBuffer::par_map_pixels`]: every pixel is independent, so rows
//!   may be processed in any order and in parallel.
//! - Raster order: error diffusion in [`crate::dither`] walks rows top to
//!   bottom and pixels left to right, because each pixel depends on error
//!   pushed forward by earlier ones.

mod frame_buffer;

pub use frame_buffer::FrameBuffer;
