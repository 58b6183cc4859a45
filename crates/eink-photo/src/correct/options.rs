//! Blue reduction parameters.

/// Luminance below which a pixel counts as dark.
pub const DEFAULT_LUMINANCE_THRESHOLD: f64 = 0.35;

/// Parameters for [`colorize`](super::colorize) and
/// [`correct_pixel`](super::correct_pixel).
///
/// # Defaults
///
/// - `strength`: 0.0 (no dominance-based reduction)
/// - `dark_strength`: 0.0 (no darkness-based reduction)
/// - `luminance_threshold`: [`DEFAULT_LUMINANCE_THRESHOLD`]
///
/// With both strengths at zero the correction is an exact identity.
///
/// # Example
///
/// ```
/// use eink_photo::CurveParams;
///
/// let params = CurveParams::new()
///     .strength(1.5)
///     .dark_strength(2.0)
///     .luminance_threshold(0.3);
/// assert!(!params.is_identity());
/// assert!(CurveParams::default().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Blue-dominance reduction intensity (>= 0).
    pub strength: f64,

    /// Extra reduction for dark pixels (>= 0).
    pub dark_strength: f64,

    /// Darkness cutoff on normalized luminance, in `(0, 1]`.
    pub luminance_threshold: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            strength: 0.0,
            dark_strength: 0.0,
            luminance_threshold: DEFAULT_LUMINANCE_THRESHOLD,
        }
    }
}

impl CurveParams {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blue-dominance reduction strength.
    #[inline]
    pub fn strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Set the additional reduction strength for dark pixels.
    #[inline]
    pub fn dark_strength(mut self, dark_strength: f64) -> Self {
        self.dark_strength = dark_strength;
        self
    }

    /// Set the luminance below which the dark reduction kicks in.
    #[inline]
    pub fn luminance_threshold(mut self, threshold: f64) -> Self {
        self.luminance_threshold = threshold;
        self
    }

    /// True when no pixel can be changed by these parameters.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.strength == 0.0 && self.dark_strength == 0.0
    }
}
