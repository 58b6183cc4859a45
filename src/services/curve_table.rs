//! Text rendition of the blue reduction curve, for tuning strengths.

use eink_photo::blue_multiplier;

/// Rows printed when `--samples` is not given.
pub const DEFAULT_SAMPLES: usize = 11;

/// Tabulate the blue multiplier for blue ratios `0..=1`, one column per
/// strength.
///
/// Strengths that are not positive are skipped with a warning. Returns
/// `None` when no usable strength remains.
pub fn render_curve_table(strengths: &[f64], samples: usize) -> Option<String> {
    let strengths: Vec<f64> = strengths
        .iter()
        .copied()
        .filter(|&s| {
            let valid = s > 0.0;
            if !valid {
                tracing::warn!(strength = s, "Skipping invalid strength value");
            }
            valid
        })
        .collect();
    if strengths.is_empty() {
        return None;
    }
    let samples = samples.max(2);

    let mut out = format!("{:>10}", "blue ratio");
    for strength in &strengths {
        out.push_str(&format!(" {:>10}", format!("s={strength}")));
    }
    out.push('\n');

    for i in 0..samples {
        let ratio = i as f64 / (samples - 1) as f64;
        out.push_str(&format!("{ratio:>10.3}"));
        for &strength in &strengths {
            out.push_str(&format!(" {:>10.4}", blue_multiplier(ratio, strength)));
        }
        out.push('\n');
    }
    Some(out)
}
