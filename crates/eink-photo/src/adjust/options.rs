//! Adjustment stage options.

/// Saturation percentage that leaves colors unchanged.
pub const DEFAULT_SATURATION_PCT: f64 = 100.0;

/// Black level lift in percent of full scale.
pub const DEFAULT_BLACK_LEVEL_PCT: f64 = 0.0;

/// Contrast used when none is configured. Note this is a mild boost
/// (factor 1.2), not the identity; 0 disables the contrast step.
pub const DEFAULT_CONTRAST: f64 = 1.0;

/// Shadow lift strength.
pub const DEFAULT_SHADOWS: f64 = 0.0;

/// Configuration for [`adjust`](super::adjust).
///
/// # Defaults
///
/// - saturation: 100% (unchanged)
/// - black level: 0% (unchanged)
/// - contrast: 1 (factor 1.2)
/// - shadows: 0 (unchanged)
///
/// Use [`AdjustOptions::identity()`] for a configuration that changes
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustOptions {
    /// Saturation in percent; 100 = unchanged, 0 = greyscale.
    pub saturation_pct: f64,

    /// Amount added to every channel, in percent of 255. Only values above
    /// zero have an effect.
    pub black_level_pct: f64,

    /// Signed contrast; positive values scale by `1 + 0.2 * c`, negative
    /// values by `1 + 0.1 * c`, zero skips the step.
    pub contrast: f64,

    /// Shadow lift strength; values <= 0 skip the step.
    pub shadows: f64,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            saturation_pct: DEFAULT_SATURATION_PCT,
            black_level_pct: DEFAULT_BLACK_LEVEL_PCT,
            contrast: DEFAULT_CONTRAST,
            shadows: DEFAULT_SHADOWS,
        }
    }
}

impl AdjustOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options under which every step is skipped.
    #[inline]
    pub fn identity() -> Self {
        Self {
            contrast: 0.0,
            ..Self::default()
        }
    }

    #[inline]
    pub fn saturation(mut self, pct: f64) -> Self {
        self.saturation_pct = pct;
        self
    }

    #[inline]
    pub fn black_level(mut self, pct: f64) -> Self {
        self.black_level_pct = pct;
        self
    }

    #[inline]
    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    #[inline]
    pub fn shadows(mut self, shadows: f64) -> Self {
        self.shadows = shadows;
        self
    }

    /// True when [`adjust`](super::adjust) would return its input unchanged.
    pub fn is_identity(&self) -> bool {
        self.saturation_pct == DEFAULT_SATURATION_PCT
            && self.black_level_pct <= 0.0
            && self.contrast == 0.0
            && self.shadows <= 0.0
    }
}
