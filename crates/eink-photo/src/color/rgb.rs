//! 8-bit RGB pixel type.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A single 8-bit sRGB pixel.
///
/// Channel values are `u8`, so a pixel can never hold a value outside
/// `0..=255`. Every transform that computes in floating point goes back
/// through [`truncate_channel`], which clamps before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled to `0.0..=1.0`.
    #[inline]
    pub fn normalized(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Perceptual luminance on the 0..=255 scale (ITU-R 601 weights).
    ///
    /// ```
    /// use eink_photo::Rgb;
    /// assert!((Rgb::new(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn luminance(self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// Integer 8-bit luma, rounded, as produced by an RGB to grayscale
    /// conversion with 16-bit fixed point ITU-R 601 weights.
    #[inline]
    pub fn luma(self) -> u8 {
        let l = (self.r as u32 * 19595 + self.g as u32 * 38470 + self.b as u32 * 7471 + 0x8000)
            >> 16;
        l as u8
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Apply `f` to each channel (as `f64`) and truncate the results back
    /// into bytes.
    #[inline]
    pub fn map_channels(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            truncate_channel(f(self.r as f64)),
            truncate_channel(f(self.g as f64)),
            truncate_channel(f(self.b as f64)),
        )
    }
}

/// Clamp a channel value to `0..=255` and truncate it toward zero.
///
/// NaN maps to 0.
#[inline]
pub fn truncate_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(pixel: Rgb) -> Self {
        pixel.to_bytes()
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
