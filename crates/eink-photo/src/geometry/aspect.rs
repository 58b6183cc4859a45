//! Aspect ratios and per-orientation targets.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when an aspect ratio string cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AspectRatioError {
    /// Not of the form `W:H`
    #[error("aspect ratio '{0}' must have the form W:H")]
    Malformed(String),

    /// One of the terms is not a plain decimal number, or is too precise
    /// to represent
    #[error("aspect ratio term '{0}' is not a number")]
    NonNumeric(String),

    /// A term is zero
    #[error("aspect ratio '{0}' has a zero term")]
    ZeroTerm(String),
}

/// A rational aspect ratio `width:height` with non-zero terms, kept in
/// lowest terms.
///
/// Parsing accepts decimal terms (`"1.5:1"` is `3:2`).
///
/// ```
/// use eink_photo::AspectRatio;
///
/// let ratio: AspectRatio = "5:3".parse().unwrap();
/// assert_eq!((ratio.width(), ratio.height()), (5, 3));
/// assert_eq!("1.5:1".parse::<AspectRatio>().unwrap().to_string(), "3:2");
/// assert!("5:0".parse::<AspectRatio>().is_err());
/// assert!("five:3".parse::<AspectRatio>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl AspectRatio {
    /// Landscape panel ratio.
    pub const LANDSCAPE: Self = Self::from_terms(5, 3);
    /// Portrait panel ratio.
    pub const PORTRAIT: Self = Self::from_terms(3, 5);

    /// Build a ratio from two terms, `None` if either is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }

    const fn from_terms(width: u32, height: u32) -> Self {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Self { width, height },
            _ => panic!("aspect ratio terms must be non-zero"),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height.get()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| AspectRatioError::Malformed(s.to_string()))?;

        let (w_digits, w_scale) = parse_term(w)?;
        let (h_digits, h_scale) = parse_term(h)?;
        if w_digits == 0 || h_digits == 0 {
            return Err(AspectRatioError::ZeroTerm(s.to_string()));
        }

        // Bring both terms to the same number of decimal places
        let scale = w_scale.max(h_scale);
        let lift = |digits: u64, term_scale: u32, term: &str| {
            10u64
                .checked_pow(scale - term_scale)
                .and_then(|factor| digits.checked_mul(factor))
                .ok_or_else(|| AspectRatioError::NonNumeric(term.trim().to_string()))
        };
        let w_scaled = lift(w_digits, w_scale, w)?;
        let h_scaled = lift(h_digits, h_scale, h)?;

        let divisor = gcd(w_scaled, h_scaled);
        let narrow = |value: u64, term: &str| {
            u32::try_from(value / divisor)
                .map_err(|_| AspectRatioError::NonNumeric(term.trim().to_string()))
        };
        let (w, h) = (narrow(w_scaled, w)?, narrow(h_scaled, h)?);

        Self::new(w, h).ok_or_else(|| AspectRatioError::ZeroTerm(s.to_string()))
    }
}

/// Split a term like `1.25` into its digits and decimal places (`125`, `2`).
fn parse_term(term: &str) -> Result<(u64, u32), AspectRatioError> {
    let term = term.trim();
    let invalid = || AspectRatioError::NonNumeric(term.to_string());

    let (whole, fraction) = term.split_once('.').unwrap_or((term, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let mut digits: u64 = 0;
    for b in whole.bytes().chain(fraction.bytes()) {
        digits = digits
            .checked_mul(10)
            .and_then(|d| d.checked_add(u64::from(b - b'0')))
            .ok_or_else(invalid)?;
    }
    let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;
    Ok((digits, scale))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Panel orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape if strictly wider than tall, portrait otherwise.
    pub fn detect(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => f.write_str("landscape"),
            Orientation::Portrait => f.write_str("portrait"),
        }
    }
}

/// Crop ratio and output resolution for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGeometry {
    pub orientation: Orientation,
    pub ratio: AspectRatio,
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    /// 7-color panel in landscape: 5:3, 800x480
    pub const LANDSCAPE: Self = Self {
        orientation: Orientation::Landscape,
        ratio: AspectRatio::LANDSCAPE,
        width: 800,
        height: 480,
    };

    /// 7-color panel in portrait: 3:5, 480x800
    pub const PORTRAIT: Self = Self {
        orientation: Orientation::Portrait,
        ratio: AspectRatio::PORTRAIT,
        width: 480,
        height: 800,
    };

    /// Target for an orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Self::LANDSCAPE,
            Orientation::Portrait => Self::PORTRAIT,
        }
    }

    /// Target for a source image of the given size.
    pub fn for_source(width: u32, height: u32) -> Self {
        Self::for_orientation(Orientation::detect(width, height))
    }

    /// Crop to `ratio` instead, shrinking the output to the largest size
    /// with that ratio that still fits the panel.
    pub fn with_ratio(self, ratio: AspectRatio) -> Self {
        let (a, b) = (ratio.width() as u64, ratio.height() as u64);
        let (w, h) = (self.width as u64, self.height as u64);
        let (width, height) = if w * b > h * a {
            ((h * a / b).max(1), h)
        } else {
            (w, (w * b / a).max(1))
        };
        Self {
            ratio,
            width: width as u32,
            height: height as u32,
            ..self
        }
    }
}
