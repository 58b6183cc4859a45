use std::fs;
use std::path::{Path, PathBuf};

use eink_photo::{fit_to_target, DitheredImage, FrameBuffer, Orientation, PhotoConverter};
use image::ImageFormat;

use crate::assets;
use crate::error::ConvertError;
use crate::models::ConvertSettings;

/// Summary of one converted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub orientation: Orientation,
    pub width: u32,
    pub height: u32,
    /// False when no palette was available and dithering was skipped
    pub quantized: bool,
    /// Pixels per palette entry, in palette order; empty when not quantized
    pub palette_usage: Vec<usize>,
}

/// File-level conversion: load, run the pipeline, write a BMP
pub struct Converter {
    pipeline: PhotoConverter,
    output_dir: PathBuf,
}

impl Converter {
    /// Build a converter, loading the palette once up front.
    pub fn new(settings: ConvertSettings) -> Result<Self, ConvertError> {
        let palette = assets::read_palette(&settings.palette)?;
        let pipeline = PhotoConverter::new()
            .curve(settings.curve)
            .adjustments(settings.adjustments)
            .dither(settings.dither)
            .aspect_ratio(settings.aspect_ratio)
            .palette(palette);

        Ok(Self {
            pipeline,
            output_dir: settings.output_dir,
        })
    }

    /// Convert `input` and write `<output_dir>/<stem>_converted.bmp`.
    pub fn convert_file(&self, input: &Path) -> Result<ConvertReport, ConvertError> {
        let output = output_path(&self.output_dir, input);
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            "Processing"
        );

        let image = assets::read_image(input)?;
        tracing::info!(
            width = image.width(),
            height = image.height(),
            "Original dimensions"
        );

        let target = self.pipeline.target_for(image.width(), image.height());
        tracing::info!(
            orientation = %target.orientation,
            ratio = %target.ratio,
            width = target.width,
            height = target.height,
            "Detected orientation, cropping and scaling"
        );

        if !self.pipeline.has_palette() {
            tracing::warn!("No palette available, output will not be dithered");
        }

        let fitted = fit_to_target(&image, &target).map_err(|source| ConvertError::Geometry {
            path: input.to_path_buf(),
            source,
        })?;
        let corrected = self.pipeline.correct(fitted);

        let (frame, palette_usage) = match self.pipeline.quantize(&corrected) {
            Some(dithered) => {
                let usage = log_palette_usage(&dithered);
                (dithered.to_frame(), usage)
            }
            None => (corrected, Vec::new()),
        };

        write_bmp(frame, &self.output_dir, &output)?;
        tracing::info!(output = %output.display(), "Done");

        Ok(ConvertReport {
            output,
            orientation: target.orientation,
            width: target.width,
            height: target.height,
            quantized: !palette_usage.is_empty(),
            palette_usage,
        })
    }
}

fn log_palette_usage(dithered: &DitheredImage) -> Vec<usize> {
    let counts = dithered.color_counts();
    for (color, &pixels) in dithered.palette().colors().iter().zip(&counts) {
        tracing::debug!(r = color.r, g = color.g, b = color.b, pixels, "Palette usage");
    }
    counts
}

/// `<output_dir>/<input stem>_converted.bmp`
pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    output_dir.join(format!("{stem}_converted.bmp"))
}

fn write_bmp(frame: FrameBuffer, output_dir: &Path, output: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(output_dir).map_err(|source| ConvertError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    frame
        .into_rgb_image()
        .save_with_format(output, ImageFormat::Bmp)
        .map_err(|source| ConvertError::Encode {
            path: output.to_path_buf(),
            source,
        })
}
