//! Closed-form blue reduction curve.

use std::f64::consts::PI;

/// Added to the channel sum so pure black pixels do not divide by zero.
pub const BLUE_RATIO_EPSILON: f64 = 1e-6;

/// Blue ratios are stretched by this factor before evaluating the curve,
/// which compresses the interesting part of the curve into `0..=2/3`.
pub const CURVE_DOMAIN_SCALE: f64 = 1.5;

/// Share of blue in a normalized pixel: `b / (r + g + b + epsilon)`.
#[inline]
pub fn blue_ratio(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;
    b / (r + g + b + BLUE_RATIO_EPSILON)
}

/// Blue channel multiplier for a pixel with the given blue ratio.
///
/// With `x = 1.5 * blue_ratio`:
///
/// ```text
/// m(x) = ¼·(−4π²·e^{3x} + 6π·sin(2πx) − 9·cos(2πx) + 9 + 4π²) · e^{3−3x} / (π²·(1−e³))
/// result = (m(x) − 1) · strength + 1
/// ```
///
/// `m` rises smoothly from 0 at `x = 0` to exactly 1 at `x = 1` and stays
/// just above 1 past that, so `strength` scales how far the multiplier dips
/// below 1 for pixels that are not blue-dominant. A strength of 0 always
/// yields exactly 1.
///
/// ```
/// use eink_photo::blue_multiplier;
///
/// assert_eq!(blue_multiplier(0.4, 0.0), 1.0);
/// assert!((blue_multiplier(2.0 / 3.0, 5.0) - 1.0).abs() < 1e-9);
/// assert!(blue_multiplier(1.0 / 3.0, 1.0) < 0.75);
/// ```
pub fn blue_multiplier(blue_ratio: f64, strength: f64) -> f64 {
    if strength == 0.0 {
        return 1.0;
    }

    let x = CURVE_DOMAIN_SCALE * blue_ratio;
    let pi2 = PI * PI;
    let two_pi_x = 2.0 * PI * x;

    let numerator = 0.25
        * (-4.0 * pi2 * (3.0 * x).exp() + 6.0 * PI * two_pi_x.sin() - 9.0 * two_pi_x.cos()
            + 9.0
            + 4.0 * pi2)
        * (3.0 - 3.0 * x).exp();
    let curve = numerator / (pi2 * (1.0 - 3.0_f64.exp()));

    (curve - 1.0) * strength + 1.0
}
