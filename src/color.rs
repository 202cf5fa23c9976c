//! Color helpers shared by every pipeline
//!
//! Colors are plain `image::Rgba<u8>` values. Everything derived through
//! arithmetic goes back through [`clamp_channel`] so channels stay in 0..=255.

use anyhow::{anyhow, Result};
use image::{Rgba, RgbaImage};
use std::str::FromStr;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse a CSS color such as `#E1306C` into an opaque pixel
pub fn parse_hex(hex: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(hex).map_err(|_| anyhow!("Invalid color: {hex}"))?;

    Ok(Rgba([
        unit_to_channel(color.red),
        unit_to_channel(color.green),
        unit_to_channel(color.blue),
        255,
    ]))
}

fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Clamp a derived channel value into 0..=255, truncating the fraction
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two colors, `t` in [0, 1]
///
/// Each channel is `from + (to - from) * t`, truncated.
pub fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let a = f64::from(from[i]);
        let b = f64::from(to[i]);
        *channel = clamp_channel(a + (b - a) * t);
    }
    Rgba(out)
}

/// Straight-alpha "over" operator: `src` drawn on top of `dst`
pub fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = f32::from(src[i]);
        let dc = f32::from(dst[i]);
        let value = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        out[i] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

/// Alpha-composite `src` over `dst` in place. Both buffers must share dimensions.
pub fn composite_over(dst: &mut RgbaImage, src: &RgbaImage) {
    debug_assert_eq!(dst.dimensions(), src.dimensions());

    for (d, s) in dst.pixels_mut().zip(src.pixels()) {
        *d = over(*d, *s);
    }
}
