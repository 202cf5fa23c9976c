//! Pipeline runners
//!
//! Each runner resolves its paths against a project root, skips inputs that
//! do not exist with a warning, runs the pixel transform and writes PNGs.
//! Decode and encode failures propagate to the caller.

use crate::config::{
    icon_file_name, CleanConfig, IconConfig, RemapConfig, ScreenshotConfig, ICON_SOURCE_FILE,
};
use crate::manifest::{write_manifest, IconManifest, MANIFEST_FILE};
use crate::screenshots::store_screenshots;
use crate::{eraser, gradient, remap};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    ColorType, DynamicImage, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// What a runner produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl RunSummary {
    pub fn merge(&mut self, other: RunSummary) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }
}

/// Recolor existing blue icons to the pink palette
pub fn remap_icons(root: &Path, config: &RemapConfig) -> Result<RunSummary> {
    let input_dir = root.join(&config.input_dir);
    let output_dir = root.join(&config.output_dir);
    create_dir_all(&output_dir).context("Can't create output directory")?;

    let mut summary = RunSummary::default();
    let mut sizes_written = Vec::new();

    for &size in &config.sizes {
        let name = icon_file_name(size);
        let input_path = input_dir.join(&name);
        if !input_path.exists() {
            println!("Warning: {} not found, skipping...", input_path.display());
            summary.skipped.push(input_path);
            continue;
        }

        println!("Converting {name}...");
        let mut image = load_rgba(&input_path)?;
        let changed = remap::remap_blue(&mut image, &config.palette);

        let output_path = output_dir.join(&name);
        save_png(&image, &output_path)?;
        println!("  ✓ Saved {} ({changed} pixels recolored)", output_path.display());

        summary.written.push(output_path);
        sizes_written.push(size);
    }

    finish_icon_set(&output_dir, &config.output_dir, &sizes_written, &mut summary)?;
    println!("Done! Icons converted in {}", output_dir.display());
    Ok(summary)
}

/// Erase the corner watermark, keep the cleaned artwork and resize it into icons
pub fn clean_artwork(root: &Path, config: &CleanConfig) -> Result<RunSummary> {
    let input = root.join(&config.input);
    let mut summary = RunSummary::default();

    if !input.exists() {
        println!("Warning: {} not found, skipping...", input.display());
        summary.skipped.push(input);
        return Ok(summary);
    }

    println!("Loading image: {}", input.display());
    let mut image = load_rgba(&input)?;
    println!("Original size: {}x{}", image.width(), image.height());

    println!("Removing watermark...");
    let replaced = eraser::erase_region(&mut image, &config.eraser);
    println!("  ✓ Replaced {replaced} pixels");

    let output_dir = root.join(&config.output_dir);
    create_dir_all(&output_dir).context("Can't create output directory")?;

    let source_path = output_dir.join(ICON_SOURCE_FILE);
    save_png(&image, &source_path)?;
    println!("  ✓ Saved cleaned source image");
    summary.written.push(source_path);

    println!("Generating icons...");
    for &size in &config.sizes {
        let resized = imageops::resize(&image, size, size, FilterType::Lanczos3);
        let output_path = output_dir.join(icon_file_name(size));
        save_png(&resized, &output_path)?;
        println!("  ✓ Generated {} ({size}x{size})", output_path.display());
        summary.written.push(output_path);
    }

    finish_icon_set(&output_dir, &config.output_dir, &config.sizes, &mut summary)?;
    println!("Done!");
    Ok(summary)
}

/// Compose gradient-framed photo icons for every size plus the large source
pub fn build_icons(root: &Path, config: &IconConfig) -> Result<RunSummary> {
    let style = config.style()?;
    let mut summary = RunSummary::default();

    let Some(source_path) = config
        .source_candidates
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.exists())
    else {
        let expected = config
            .source_candidates
            .first()
            .map(|p| root.join(p))
            .unwrap_or_else(|| root.to_path_buf());
        println!("Error: Source image not found at {}", expected.display());
        summary.skipped.push(expected);
        return Ok(summary);
    };

    let source = image::open(&source_path)
        .with_context(|| format!("Failed to load image {}", source_path.display()))?;

    let output_dir = root.join(&config.output_dir);
    create_dir_all(&output_dir).context("Can't create output directory")?;

    println!("Generating icons from {}...", source_path.display());
    for &size in &config.sizes {
        let output_path = output_dir.join(icon_file_name(size));
        write_icon(&source, size, &style, &output_path)?;
        summary.written.push(output_path);
    }

    let output_path = output_dir.join(ICON_SOURCE_FILE);
    write_icon(&source, config.source_size, &style, &output_path)?;
    summary.written.push(output_path);

    finish_icon_set(&output_dir, &config.output_dir, &config.sizes, &mut summary)?;
    println!("All icons created successfully!");
    println!("Output directory: {}", output_dir.display());
    Ok(summary)
}

fn write_icon(
    source: &DynamicImage,
    size: u32,
    style: &gradient::IconStyle,
    path: &Path,
) -> Result<()> {
    let icon = gradient::compose_icon(source, size, style);
    save_png(&icon, path)?;
    println!("  ✓ Created {} ({size}x{size})", path.display());
    Ok(())
}

/// Render every store screenshot
pub fn render_screenshots(root: &Path, config: &ScreenshotConfig) -> Result<RunSummary> {
    let output_dir = root.join(&config.output_dir);
    create_dir_all(&output_dir).context("Can't create output directory")?;

    let font = config.fonts.resolve();
    println!("Using font: {}", font.name());

    let mut summary = RunSummary::default();
    for shot in store_screenshots(config.width, config.height) {
        println!("Creating {}...", shot.file_name);
        let canvas = shot.scene.render(&font);
        let output_path = output_dir.join(shot.file_name);
        save_png(&canvas, &output_path)?;
        println!("  ✓ Saved to {}", output_path.display());
        summary.written.push(output_path);
    }

    println!("Done! Screenshots created in {}", output_dir.display());
    println!("Store screenshots are {}x{}", config.width, config.height);
    Ok(summary)
}

/// Write the manifest fragment for the sizes that were produced
fn finish_icon_set(
    output_dir: &Path,
    manifest_prefix: &Path,
    sizes: &[u32],
    summary: &mut RunSummary,
) -> Result<()> {
    if sizes.is_empty() {
        return Ok(());
    }
    let manifest = IconManifest::for_sizes(manifest_prefix, sizes);
    write_manifest(output_dir, &manifest)?;
    println!("  ✓ Generated {}", MANIFEST_FILE);
    summary.written.push(output_dir.join(MANIFEST_FILE));
    Ok(())
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image =
        image::open(path).with_context(|| format!("Failed to load image {}", path.display()))?;
    Ok(image.to_rgba8())
}

/// Save an RGBA buffer as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(image.as_raw(), &mut out, image.width(), image.height())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
