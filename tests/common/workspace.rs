//! Scratch directory with input photos, palettes and an output directory.

use std::path::{Path, PathBuf};

use eink_photo::Rgb;
use image::RgbImage;
use inkframe::models::{ConvertConfig, ConvertSettings};
use tempfile::TempDir;

use super::fixtures;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where converted files are expected
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("converted")
    }

    /// Save `image` as `name` and return its path
    pub fn write_image(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.dir.path().join(name);
        image.save(&path).expect("Failed to write test image");
        path
    }

    /// Single-color photo
    pub fn write_solid(&self, name: &str, width: u32, height: u32, color: Rgb) -> PathBuf {
        self.write_image(
            name,
            &RgbImage::from_pixel(width, height, image::Rgb(color.to_bytes())),
        )
    }

    /// Swatch palette file with the given colors
    pub fn write_palette(&self, name: &str, colors: &[Rgb]) -> PathBuf {
        self.write_image(name, &fixtures::swatch(colors))
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Base config writing into this workspace, with a palette path that
    /// does not exist (dithering off)
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig {
            output_dir: self.output_dir(),
            palette: Some(self.dir.path().join("missing_palette.gif")),
            ..Default::default()
        }
    }

    pub fn settings(&self, config: ConvertConfig) -> ConvertSettings {
        config.validate().expect("Test config should be valid")
    }
}
