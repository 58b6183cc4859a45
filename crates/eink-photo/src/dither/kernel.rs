//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` to a not-yet-visited neighbor and the
/// numerator of the share of error it receives; every share is divided by
/// `divisor`.
///
/// `max_dy` is how many rows ahead the kernel reaches, which sets the
/// depth of the [`ErrorBuffer`](super::ErrorBuffer): `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor for the weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Share of the error this kernel propagates, 1.0 for a lossless kernel.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        total as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg kernel: 100% of the error to four neighbors.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};
