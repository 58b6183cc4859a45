//! Display palette and its errors.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
