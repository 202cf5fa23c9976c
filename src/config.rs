//! Pipeline configuration
//!
//! Every pipeline takes its parameters explicitly. The `Default` impls carry
//! the values the asset set was produced with; relative paths resolve against
//! the project root handed to the runner.

use crate::color;
use crate::eraser::EraserParams;
use crate::font::FontChain;
use crate::gradient::IconStyle;
use crate::remap::Palette;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Chrome extension icon sizes
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const ICON_DIR: &str = "assets/icons";
pub const SCREENSHOT_DIR: &str = "assets/screenshots";

/// File name of the icon for `size`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// File name of the full-resolution icon artwork
pub const ICON_SOURCE_FILE: &str = "icon-source.png";

#[derive(Debug, Clone)]
pub struct RemapConfig {
    /// Directory holding the blue `icon-<size>.png` originals
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub palette: Palette,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("../x-bookmarks-exporter/assets/icons"),
            output_dir: PathBuf::from(ICON_DIR),
            sizes: ICON_SIZES.to_vec(),
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Watermarked artwork to clean
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub eraser: EraserParams,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("assets/icon-artwork.png"),
            output_dir: PathBuf::from(ICON_DIR),
            sizes: ICON_SIZES.to_vec(),
            eraser: EraserParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Tried in order; the first existing file is the photo source
    pub source_candidates: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    /// Size of the regenerated `icon-source.png`
    pub source_size: u32,
    pub color1: String,
    pub color2: String,
    pub corner_ratio: f64,
    pub circle_margin_ratio: f64,
    pub photo_margin_ratio: f64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_candidates: vec![
                PathBuf::from(ICON_DIR).join(ICON_SOURCE_FILE),
                PathBuf::from("assets/photo-source.png"),
            ],
            output_dir: PathBuf::from(ICON_DIR),
            sizes: ICON_SIZES.to_vec(),
            source_size: 512,
            color1: "#E1306C".to_string(),
            color2: "#c13584".to_string(),
            corner_ratio: 0.15,
            circle_margin_ratio: 0.08,
            photo_margin_ratio: 0.10,
        }
    }
}

impl IconConfig {
    pub fn style(&self) -> Result<IconStyle> {
        Ok(IconStyle {
            color1: color::parse_hex(&self.color1).context("Bad first gradient color")?,
            color2: color::parse_hex(&self.color2).context("Bad second gradient color")?,
            corner_ratio: self.corner_ratio,
            circle_margin_ratio: self.circle_margin_ratio,
            photo_margin_ratio: self.photo_margin_ratio,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScreenshotConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fonts: FontChain,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(SCREENSHOT_DIR),
            width: 1280,
            height: 800,
            fonts: FontChain::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn icon_names_follow_convention() {
        let names: Vec<_> = ICON_SIZES.iter().map(|&s| icon_file_name(s)).collect();
        assert_eq!(names, ["icon-16.png", "icon-32.png", "icon-48.png", "icon-128.png"]);
    }

    #[test]
    fn default_style_parses_brand_colors() {
        let style = IconConfig::default().style().unwrap();
        assert_eq!(style.color1, Rgba([225, 48, 108, 255]));
        assert_eq!(style.color2, Rgba([193, 53, 132, 255]));
    }

    #[test]
    fn bad_color_is_reported() {
        let config = IconConfig {
            color2: "pinkish".to_string(),
            ..IconConfig::default()
        };
        let err = config.style().unwrap_err();
        assert!(err.to_string().contains("second gradient color"));
    }

    #[test]
    fn screenshot_defaults_match_store_format() {
        let config = ScreenshotConfig::default();
        assert_eq!((config.width, config.height), (1280, 800));
        assert!(!config.fonts.candidates().is_empty());
    }
}
