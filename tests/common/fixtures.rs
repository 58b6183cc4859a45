//! Test fixtures and constants.

use eink_photo::Rgb;
use image::RgbImage;

/// Colors of the 7-color panel, in swatch order
pub const SEVEN_COLORS: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 128, 0),
];

/// Same colors as hex strings, as written in config.yaml
pub const SEVEN_COLORS_HEX: [&str; 7] = [
    "#000000", "#FFFFFF", "#00FF00", "#0000FF", "#FF0000", "#FFFF00", "#FF8000",
];

/// Swatch image with one 10px column per palette color
pub fn swatch(colors: &[Rgb]) -> RgbImage {
    RgbImage::from_fn(colors.len() as u32 * 10, 4, |x, _| {
        image::Rgb(colors[(x / 10) as usize].to_bytes())
    })
}

/// Photo-like test image: horizontal hue sweep, vertical brightness ramp
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let fx = x as f32 / width.max(1) as f32;
        let fy = y as f32 / height.max(1) as f32;
        image::Rgb([
            (255.0 * fx) as u8,
            (255.0 * fy) as u8,
            (255.0 * (1.0 - fx) * (0.5 + 0.5 * fy)) as u8,
        ])
    })
}
