//! Center crop and Lanczos3 resize.

use image::imageops::{self, FilterType};
use image::RgbImage;
use thiserror::Error;

use crate::frame::FrameBuffer;

use super::aspect::{AspectRatio, TargetGeometry};

/// Error type for the geometry stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Source image has no pixels
    #[error("cannot crop an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    /// Requested output resolution has no pixels
    #[error("target resolution {width}x{height} is empty")]
    EmptyTarget { width: u32, height: u32 },
}

/// Region kept by the center crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the centered crop of a `width`x`height` image to `ratio`.
///
/// Integer arithmetic throughout: an image wider than the ratio keeps its
/// height and is cut to `floor(height * a / b)` columns; otherwise it keeps
/// its width and is cut to `floor(width * b / a)` rows. When the removed
/// amount is odd, the extra pixel comes off the right or bottom edge. The
/// kept dimension never drops below one pixel.
///
/// ```
/// use eink_photo::{crop_box, AspectRatio};
///
/// let crop = crop_box(1000, 480, AspectRatio::LANDSCAPE).unwrap();
/// assert_eq!((crop.left, crop.width, crop.height), (100, 800, 480));
/// ```
pub fn crop_box(width: u32, height: u32, ratio: AspectRatio) -> Result<CropBox, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::EmptyImage { width, height });
    }

    let (w, h) = (width as u64, height as u64);
    let (a, b) = (ratio.width() as u64, ratio.height() as u64);

    let crop = if w * b > h * a {
        // Too wide
        let new_width = ((h * a / b) as u32).max(1);
        CropBox {
            left: (width - new_width) / 2,
            top: 0,
            width: new_width,
            height,
        }
    } else {
        // Too tall, or already exact
        let new_height = ((w * b / a) as u32).max(1);
        CropBox {
            left: 0,
            top: (height - new_height) / 2,
            width,
            height: new_height,
        }
    };
    Ok(crop)
}

/// Center-crop an image to `ratio`.
pub fn crop_to_ratio(image: &RgbImage, ratio: AspectRatio) -> Result<RgbImage, GeometryError> {
    let crop = crop_box(image.width(), image.height(), ratio)?;
    if crop.width == image.width() && crop.height == image.height() {
        return Ok(image.clone());
    }
    Ok(imageops::crop_imm(image, crop.left, crop.top, crop.width, crop.height).to_image())
}

/// Stretch an image to exactly `width`x`height` with a Lanczos3 filter.
///
/// Images that already have the requested size are returned unchanged.
pub fn resize_lanczos(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

/// Crop `image` to the target ratio, resize it to the target resolution and
/// hand it on as a [`FrameBuffer`].
pub fn fit_to_target(
    image: &RgbImage,
    target: &TargetGeometry,
) -> Result<FrameBuffer, GeometryError> {
    if target.width == 0 || target.height == 0 {
        return Err(GeometryError::EmptyTarget {
            width: target.width,
            height: target.height,
        });
    }
    let cropped = crop_to_ratio(image, target.ratio)?;
    let resized = resize_lanczos(&cropped, target.width, target.height);
    Ok(FrameBuffer::from_rgb_image(&resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_crop_too_wide() {
        let crop = crop_box(1000, 300, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!(
            crop,
            CropBox {
                left: 250,
                top: 0,
                width: 500,
                height: 300
            }
        );
    }

    #[test]
    fn test_crop_too_tall() {
        let crop = crop_box(500, 1000, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!(
            crop,
            CropBox {
                left: 0,
                top: 350,
                width: 500,
                height: 300
            }
        );
    }

    #[test]
    fn test_crop_exact_ratio_is_noop() {
        let crop = crop_box(1600, 960, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!((crop.left, crop.top, crop.width, crop.height), (0, 0, 1600, 960));
    }

    #[test]
    fn test_odd_remainder_goes_to_far_side() {
        // 301 wide, needs 300: one column removed, from the right
        let crop = crop_box(301, 180, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!((crop.left, crop.width), (0, 300));
        // 303 wide: three columns removed, one left, two right
        let crop = crop_box(303, 180, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!((crop.left, crop.width), (1, 300));
    }

    #[test]
    fn test_crop_matches_ratio_within_one_pixel() {
        for ratio in [AspectRatio::LANDSCAPE, AspectRatio::PORTRAIT] {
            let (a, b) = (ratio.width() as f64, ratio.height() as f64);
            for width in (1..2000).step_by(37) {
                for height in (1..2000).step_by(41) {
                    let crop = crop_box(width, height, ratio).unwrap();
                    assert!(crop.width <= width && crop.height <= height);
                    assert!(crop.left + crop.width <= width);
                    assert!(crop.top + crop.height <= height);
                    let exact_width = crop.height as f64 * a / b;
                    let exact_height = crop.width as f64 * b / a;
                    assert!(
                        (crop.width as f64 - exact_width).abs() < 1.0
                            || (crop.height as f64 - exact_height).abs() < 1.0,
                        "{width}x{height} -> {}x{} misses {ratio}",
                        crop.width,
                        crop.height
                    );
                }
            }
        }
    }

    #[test]
    fn test_tiny_images_keep_one_pixel() {
        let crop = crop_box(1, 1, AspectRatio::PORTRAIT).unwrap();
        assert_eq!((crop.width, crop.height), (1, 1));
        let crop = crop_box(2, 1, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!((crop.width, crop.height), (1, 1));
    }

    #[test]
    fn test_empty_image_is_an_error() {
        assert_eq!(
            crop_box(0, 10, AspectRatio::LANDSCAPE),
            Err(GeometryError::EmptyImage {
                width: 0,
                height: 10
            })
        );
        let image = RgbImage::new(10, 0);
        assert!(fit_to_target(&image, &TargetGeometry::LANDSCAPE).is_err());
    }

    #[test]
    fn test_empty_target_is_an_error() {
        let image = RgbImage::new(10, 10);
        let target = TargetGeometry {
            width: 0,
            ..TargetGeometry::PORTRAIT
        };
        assert!(matches!(
            fit_to_target(&image, &target),
            Err(GeometryError::EmptyTarget { .. })
        ));
    }

    #[test]
    fn test_crop_keeps_center_content() {
        // Left and right thirds red, middle blue; cropping 900x300 to 5:3
        // keeps 500 columns starting at 200.
        let image = RgbImage::from_fn(900, 300, |x, _| {
            if (300..600).contains(&x) {
                image::Rgb([0, 0, 255])
            } else {
                image::Rgb([255, 0, 0])
            }
        });
        let cropped = crop_to_ratio(&image, AspectRatio::LANDSCAPE).unwrap();
        assert_eq!(cropped.dimensions(), (500, 300));
        assert_eq!(cropped.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(cropped.get_pixel(250, 150).0, [0, 0, 255]);
    }

    #[test]
    fn test_fit_uniform_image_stays_uniform() {
        let image = RgbImage::from_pixel(1000, 1300, image::Rgb([255, 0, 0]));
        let frame = fit_to_target(&image, &TargetGeometry::PORTRAIT).unwrap();
        assert_eq!((frame.width(), frame.height()), (480, 800));
        assert!(frame.pixels().iter().all(|&p| p == Rgb::new(255, 0, 0)));
    }
}
