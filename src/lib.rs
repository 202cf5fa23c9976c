//! Generate browser-extension icon sets and store screenshots.
//!
//! Four independent pipelines share the RGBA pixel-buffer model of the
//! `image` crate:
//!
//! - [`remap`] recolors blue-ish pixels into a pink palette,
//! - [`eraser`] paints a watermark corner over with a sampled background,
//! - [`gradient`] composes a rounded gradient tile with a circular photo,
//! - [`scene`] paints draw-command lists such as the [`screenshots`].
//!
//! The transforms are pure functions of a buffer and explicit parameters.
//! [`pipeline`] wraps them with file handling.

pub mod color;
pub mod config;
pub mod eraser;
pub mod font;
pub mod gradient;
pub mod manifest;
pub mod mask;
pub mod pipeline;
pub mod remap;
pub mod scene;
pub mod screenshots;

pub use config::{CleanConfig, IconConfig, RemapConfig, ScreenshotConfig};
pub use pipeline::{build_icons, clean_artwork, remap_icons, render_screenshots, RunSummary};
