use anyhow::Result;
use clap::{Parser, Subcommand};
use ext_assets::{
    build_icons, clean_artwork, remap_icons, render_screenshots, CleanConfig, IconConfig,
    RemapConfig, RunSummary, ScreenshotConfig,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-assets",
    about = "Generate extension icons and store screenshots",
    version
)]
struct Args {
    /// Project directory that relative asset paths resolve against.
    #[clap(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recolor blue icon-<size>.png files into the pink palette
    Remap {
        /// Directory holding the blue icons
        #[clap(long, value_name = "DIR")]
        input_dir: Option<PathBuf>,
    },
    /// Remove the corner watermark from the artwork and export icon sizes
    Clean {
        /// Watermarked artwork
        #[clap(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Build gradient-framed photo icons
    Icons {
        /// Photo source, tried before the default candidates
        #[clap(long, value_name = "FILE")]
        source: Option<PathBuf>,
    },
    /// Render the 1280x800 store screenshots
    Screenshots,
    /// Run clean, remap, icons and screenshots in order
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let root = args.root.as_path();

    let summary = match args.command {
        Command::Remap { input_dir } => {
            let mut config = RemapConfig::default();
            if let Some(dir) = input_dir {
                config.input_dir = dir;
            }
            remap_icons(root, &config)?
        }
        Command::Clean { input } => {
            let mut config = CleanConfig::default();
            if let Some(input) = input {
                config.input = input;
            }
            clean_artwork(root, &config)?
        }
        Command::Icons { source } => {
            let mut config = IconConfig::default();
            if let Some(source) = source {
                config.source_candidates.insert(0, source);
            }
            build_icons(root, &config)?
        }
        Command::Screenshots => render_screenshots(root, &ScreenshotConfig::default())?,
        Command::All => {
            let mut summary = RunSummary::default();
            summary.merge(clean_artwork(root, &CleanConfig::default())?);
            summary.merge(remap_icons(root, &RemapConfig::default())?);
            summary.merge(build_icons(root, &IconConfig::default())?);
            summary.merge(render_screenshots(root, &ScreenshotConfig::default())?);
            summary
        }
    };

    println!();
    println!(
        "Wrote {} file(s), skipped {} missing input(s)",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(())
}
