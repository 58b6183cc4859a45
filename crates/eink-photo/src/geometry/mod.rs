//! Crop and resize to the panel's fixed resolution.
//!
//! The geometry stage runs first: the source image is center-cropped to the
//! target aspect ratio, then stretched to the output resolution with a
//! Lanczos3 filter. Because the crop already matches the ratio, the stretch
//! never distorts the picture by more than one source pixel of rounding.
//!
//! Orientation is picked from the source: wider than tall is landscape
//! (5:3, 800x480), anything else portrait (3:5, 480x800).
//!
//! # Example
//!
//! ```
//! use eink_photo::{fit_to_target, Orientation, TargetGeometry};
//! use image::RgbImage;
//!
//! let source = RgbImage::from_pixel(1600, 1200, image::Rgb([10, 20, 30]));
//! let target = TargetGeometry::for_source(source.width(), source.height());
//! assert_eq!(target.orientation, Orientation::Landscape);
//!
//! let frame = fit_to_target(&source, &target).unwrap();
//! assert_eq!((frame.width(), frame.height()), (800, 480));
//! ```

mod aspect;
mod crop;

pub use aspect::{AspectRatio, AspectRatioError, Orientation, TargetGeometry};
pub use crop::{crop_box, crop_to_ratio, fit_to_target, resize_lanczos, CropBox, GeometryError};
