//! Gradient icon compositor
//!
//! Builds the extension icon: a diagonal two-color gradient tile with rounded
//! corners, a white disc, and the source photo clipped to a circle on top.

use crate::color::{self, composite_over, WHITE};
use crate::mask;
use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};

/// Diagonal gradient, `color1` at the top-left and approaching `color2`
/// towards the bottom-right. `t = (x + y) / (2 * size)`.
pub fn diagonal_gradient(size: u32, color1: Rgba<u8>, color2: Rgba<u8>) -> RgbaImage {
    let span = 2.0 * f64::from(size);
    RgbaImage::from_fn(size, size, |x, y| {
        let t = f64::from(x + y) / span;
        let mut pixel = color::lerp(color1, color2, t);
        pixel[3] = 255;
        pixel
    })
}

/// Clip the corners of a square canvas to a rounded rectangle
pub fn round_corners(canvas: &mut RgbaImage, radius: u32) {
    if radius == 0 {
        return;
    }
    let (width, height) = canvas.dimensions();
    let clip = mask::rounded_rect(width, height, 0, radius);
    mask::put_alpha(canvas, &clip);
}

/// Geometry and colors of the icon, with lengths expressed as fractions of the icon size
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub color1: Rgba<u8>,
    pub color2: Rgba<u8>,
    pub corner_ratio: f64,
    pub circle_margin_ratio: f64,
    pub photo_margin_ratio: f64,
}

impl IconStyle {
    fn scaled(size: u32, ratio: f64) -> u32 {
        (f64::from(size) * ratio) as u32
    }

    pub fn corner_radius(&self, size: u32) -> u32 {
        Self::scaled(size, self.corner_ratio)
    }

    pub fn circle_margin(&self, size: u32) -> u32 {
        Self::scaled(size, self.circle_margin_ratio)
    }

    pub fn photo_margin(&self, size: u32) -> u32 {
        Self::scaled(size, self.photo_margin_ratio)
    }
}

/// Gradient tile with rounded corners for an icon of `size`
pub fn icon_background(size: u32, style: &IconStyle) -> RgbaImage {
    let mut background = diagonal_gradient(size, style.color1, style.color2);
    round_corners(&mut background, style.corner_radius(size));
    background
}

/// Compose the full icon: background, then white disc, then the circular photo
pub fn compose_icon(source: &DynamicImage, size: u32, style: &IconStyle) -> RgbaImage {
    let mut icon = icon_background(size, style);

    let disc = mask::fill(&mask::circle(size, style.circle_margin(size)), WHITE);
    composite_over(&mut icon, &disc);

    let photo = source.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let photo = mask::apply(&photo, &mask::circle(size, style.photo_margin(size)));
    composite_over(&mut icon, &photo);

    icon
}
