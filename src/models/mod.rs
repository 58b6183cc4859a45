pub mod config;

pub use config::{
    ConfigError, ConfigOverrides, ConvertConfig, ConvertSettings, PaletteSource,
    DEFAULT_OUTPUT_DIR, DEFAULT_PALETTE_FILE,
};
