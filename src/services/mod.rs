pub mod converter;
pub mod curve_table;

pub use converter::{output_path, ConvertReport, Converter};
pub use curve_table::{render_curve_table, DEFAULT_SAMPLES};
