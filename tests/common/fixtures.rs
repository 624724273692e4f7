//! Test fixtures: images and config files written to a temporary directory.

use std::io::Cursor;
use std::path::PathBuf;

use huematch::models::AppConfig;
use huematch::services::MatchService;
use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

/// Colours used across tests
pub mod colours {
    pub const NAVY: [u8; 3] = [0x00, 0x00, 0x80];
    pub const TEAL: [u8; 3] = [0x00, 0x80, 0x80];
    pub const YELLOW: [u8; 3] = [0xff, 0xff, 0x00];
    pub const BLUE: [u8; 3] = [0x00, 0x00, 0xff];
    /// Close to navy, within the default sRGB limit
    pub const NEAR_NAVY: [u8; 3] = [26, 26, 140];
    /// Bluish gray far from every html4 entry
    pub const SLATE: [u8; 3] = [64, 80, 97];
}

/// Small palette written in file order
pub const CUSTOM_PALETTE_YAML: &str = r##"
palette:
  ink: "#101010"
  paper: "#f5f5dc"
  signal: "#e03020"
"##;

/// Encode a solid `width` x `height` PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode_png(&RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// Encode a PNG whose top `major_rows` rows are `major` and the rest `minor`.
pub fn split_png(size: u32, major_rows: u32, major: [u8; 3], minor: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_fn(size, size, |_, y| {
        if y < major_rows {
            Rgb(major)
        } else {
            Rgb(minor)
        }
    });
    encode_png(&image)
}

pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// Temporary directory holding test images and config files.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn write_solid(&self, name: &str, rgb: [u8; 3]) -> PathBuf {
        self.write(name, solid_png(16, 16, rgb))
    }

    /// Write `yaml` as config.yaml and load a service from it.
    pub fn service(&self, yaml: &str) -> MatchService {
        let path = self.write("config.yaml", yaml);
        let config = AppConfig::load(Some(&path)).expect("Failed to load config");
        MatchService::new(config).expect("Failed to build service")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
