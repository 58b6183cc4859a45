use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eink_photo::{
    AdjustOptions, AspectRatio, AspectRatioError, CurveParams, DitherMode, Palette, PaletteError,
    UnknownDitherMode, DEFAULT_BLACK_LEVEL_PCT, DEFAULT_CONTRAST, DEFAULT_LUMINANCE_THRESHOLD,
    DEFAULT_SATURATION_PCT, DEFAULT_SHADOWS,
};
use serde::Deserialize;
use thiserror::Error;

/// Palette image looked up in the working directory when nothing else is
/// configured.
pub const DEFAULT_PALETTE_FILE: &str = "palette_7color.gif";

/// Directory converted bitmaps are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "converted";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{name} must be >= 0, got {value}")]
    NegativeStrength { name: &'static str, value: f64 },

    #[error("luminance_threshold must be in (0, 1], got {0}")]
    LuminanceThreshold(f64),

    #[error("{0}")]
    DitherMode(#[from] UnknownDitherMode),

    #[error("invalid aspect_ratio: {0}")]
    AspectRatio(#[from] AspectRatioError),

    #[error("invalid palette_colors: {0}")]
    PaletteColors(#[source] PaletteError),
}

/// Conversion settings as read from config.yaml.
///
/// Every field is optional in the file; missing fields take the same
/// defaults as the command line.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Blue-dominance reduction strength
    pub blue_reduction: f64,

    /// Extra blue reduction for dark pixels
    pub dark_blue_reduction: f64,

    /// Luminance below which a pixel counts as dark, in (0, 1]
    pub luminance_threshold: f64,

    /// Saturation percentage (100 = unchanged)
    pub saturation: f64,

    /// Black level lift in percent of full scale
    pub black_level: f64,

    /// Signed contrast adjustment (0 = off)
    pub contrast: f64,

    /// Shadow brightening strength
    pub shadows: f64,

    /// "floyd-steinberg" or "none"
    pub dither_method: String,

    /// Palette image; its distinct pixel colors form the palette
    pub palette: Option<PathBuf>,

    /// Palette given inline as hex colors, used when no palette image is set
    pub palette_colors: Option<Vec<String>>,

    /// Crop ratio override, e.g. "4:3"
    pub aspect_ratio: Option<String>,

    /// Where converted bitmaps go
    pub output_dir: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            blue_reduction: 0.0,
            dark_blue_reduction: 0.0,
            luminance_threshold: DEFAULT_LUMINANCE_THRESHOLD,
            saturation: DEFAULT_SATURATION_PCT,
            black_level: DEFAULT_BLACK_LEVEL_PCT,
            contrast: DEFAULT_CONTRAST,
            shadows: DEFAULT_SHADOWS,
            dither_method: DitherMode::default().to_string(),
            palette: None,
            palette_colors: None,
            aspect_ratio: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Values given on the command line. `Some` wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub blue_reduction: Option<f64>,
    pub dark_blue_reduction: Option<f64>,
    pub luminance_threshold: Option<f64>,
    pub saturation: Option<f64>,
    pub black_level: Option<f64>,
    pub contrast: Option<f64>,
    pub shadows: Option<f64>,
    pub dither_method: Option<String>,
    pub palette: Option<PathBuf>,
    pub aspect_ratio: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Where the quantization palette comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// Palette image on disk; a missing file disables quantization.
    File(PathBuf),
    /// Hex colors from the config file, already validated.
    Inline(Palette),
}

/// Validated settings, ready to drive a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub curve: CurveParams,
    pub adjustments: AdjustOptions,
    pub dither: DitherMode,
    pub aspect_ratio: Option<AspectRatio>,
    pub palette: PaletteSource,
    pub output_dir: PathBuf,
}

impl ConvertConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command line values on top of this configuration.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        let ConfigOverrides {
            blue_reduction,
            dark_blue_reduction,
            luminance_threshold,
            saturation,
            black_level,
            contrast,
            shadows,
            dither_method,
            palette,
            aspect_ratio,
            output_dir,
        } = overrides;

        self.blue_reduction = blue_reduction.unwrap_or(self.blue_reduction);
        self.dark_blue_reduction = dark_blue_reduction.unwrap_or(self.dark_blue_reduction);
        self.luminance_threshold = luminance_threshold.unwrap_or(self.luminance_threshold);
        self.saturation = saturation.unwrap_or(self.saturation);
        self.black_level = black_level.unwrap_or(self.black_level);
        self.contrast = contrast.unwrap_or(self.contrast);
        self.shadows = shadows.unwrap_or(self.shadows);
        if let Some(method) = dither_method {
            self.dither_method = method;
        }
        if palette.is_some() {
            self.palette = palette;
        }
        if aspect_ratio.is_some() {
            self.aspect_ratio = aspect_ratio;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Check parameter ranges and build the pipeline settings.
    pub fn validate(&self) -> Result<ConvertSettings, ConfigError> {
        check_strength("blue_reduction", self.blue_reduction)?;
        check_strength("dark_blue_reduction", self.dark_blue_reduction)?;
        // Written so that NaN is rejected too
        if !(self.luminance_threshold > 0.0 && self.luminance_threshold <= 1.0) {
            return Err(ConfigError::LuminanceThreshold(self.luminance_threshold));
        }

        let dither: DitherMode = self.dither_method.parse()?;
        let aspect_ratio = self
            .aspect_ratio
            .as_deref()
            .map(str::parse::<AspectRatio>)
            .transpose()?;

        let palette = match (&self.palette, &self.palette_colors) {
            (Some(path), _) => PaletteSource::File(path.clone()),
            (None, Some(colors)) => PaletteSource::Inline(
                Palette::from_hex(colors).map_err(ConfigError::PaletteColors)?,
            ),
            (None, None) => PaletteSource::File(PathBuf::from(DEFAULT_PALETTE_FILE)),
        };

        Ok(ConvertSettings {
            curve: CurveParams::new()
                .strength(self.blue_reduction)
                .dark_strength(self.dark_blue_reduction)
                .luminance_threshold(self.luminance_threshold),
            adjustments: AdjustOptions::new()
                .saturation(self.saturation)
                .black_level(self.black_level)
                .contrast(self.contrast)
                .shadows(self.shadows),
            dither,
            aspect_ratio,
            palette,
            output_dir: self.output_dir.clone(),
        })
    }
}

fn check_strength(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeStrength { name, value })
    }
}
