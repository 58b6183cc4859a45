use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkframe::models::{ConfigOverrides, ConvertConfig, DEFAULT_PALETTE_FILE};
use inkframe::services::{render_curve_table, Converter, DEFAULT_SAMPLES};

#[derive(Parser)]
#[command(name = "inkframe")]
#[command(about = "Prepare photos for 7-color e-ink picture frames")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop, color-correct and dither a photo into a BMP
    Convert {
        /// Input image
        image: PathBuf,

        #[command(flatten)]
        options: ConvertArgs,
    },
    /// Print the blue reduction multiplier for a range of blue ratios
    Curve {
        /// Strength to tabulate (repeatable)
        #[arg(long = "strength", default_values_t = [1.0], allow_negative_numbers = true)]
        strengths: Vec<f64>,

        /// Number of blue ratio samples between 0 and 1
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Blue reduction strength
    #[arg(long)]
    blue_reduction: Option<f64>,

    /// Additional blue reduction for dark pixels
    #[arg(long)]
    dark_blue_reduction: Option<f64>,

    /// Luminance below which pixels count as dark (0-1]
    #[arg(long)]
    luminance_threshold: Option<f64>,

    /// Saturation percentage
    #[arg(long)]
    saturation: Option<f64>,

    /// Black level percentage
    #[arg(long)]
    black_level: Option<f64>,

    /// Contrast adjustment
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f64>,

    /// Shadow brightening strength
    #[arg(long)]
    shadows: Option<f64>,

    /// Dither method: "floyd-steinberg" or "none"
    #[arg(long)]
    dither_method: Option<String>,

    /// Crop ratio override, e.g. "4:3"
    #[arg(long)]
    aspect_ratio: Option<String>,

    /// Palette image (distinct pixel colors form the palette)
    #[arg(long, env = "PALETTE_FILE")]
    palette: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,
}

impl ConvertArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            blue_reduction: self.blue_reduction,
            dark_blue_reduction: self.dark_blue_reduction,
            luminance_threshold: self.luminance_threshold,
            saturation: self.saturation,
            black_level: self.black_level,
            contrast: self.contrast,
            shadows: self.shadows,
            dither_method: self.dither_method.clone(),
            palette: self.palette.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert { image, options }) => run_convert_command(&image, &options),
        Some(Commands::Curve { strengths, samples }) => run_curve_command(&strengths, samples),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert one photo to a dithered BMP
fn run_convert_command(image: &Path, options: &ConvertArgs) -> anyhow::Result<()> {
    let config = ConvertConfig::load_or_default(options.config.as_deref())?;
    let config = config.merge(options.overrides());
    let settings = config.validate()?;

    tracing::info!(
        blue_reduction = config.blue_reduction,
        dark_blue_reduction = config.dark_blue_reduction,
        saturation = config.saturation,
        black_level = config.black_level,
        contrast = config.contrast,
        shadows = config.shadows,
        dither = %settings.dither,
        "Settings"
    );

    let converter = Converter::new(settings)?;
    let report = converter.convert_file(image).inspect_err(|e| {
        tracing::error!(stage = e.stage(), input = %image.display(), "Conversion failed");
    })?;

    println!(
        "Converted {} -> {} ({}x{}, {})",
        image.display(),
        report.output.display(),
        report.width,
        report.height,
        if report.quantized {
            "dithered"
        } else {
            "not dithered"
        }
    );
    Ok(())
}

/// Print the curve table
fn run_curve_command(strengths: &[f64], samples: usize) -> anyhow::Result<()> {
    match render_curve_table(strengths, samples) {
        Some(table) => {
            print!("{table}");
            Ok(())
        }
        None => anyhow::bail!("No valid strength values provided"),
    }
}

/// Display version, environment and usage hints
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("Inkframe v{VERSION}");
    println!("Prepares photos for 7-color e-ink picture frames\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    let palette = palette_file.unwrap_or_else(|| DEFAULT_PALETTE_FILE.to_string());
    let status = if Path::new(&palette).exists() {
        "found"
    } else {
        "missing, output will not be dithered"
    };
    println!("\nPalette: {palette} ({status})");

    println!("\nUsage:");
    println!("  inkframe convert <IMAGE> [OPTIONS]   Convert a photo");
    println!("  inkframe curve --strength <S>...     Show the blue reduction curve");
    println!("  inkframe --help                      Full help");
}
