//! Blue-to-pink color remapping
//!
//! Pixels that read as "blue-ish" are rewritten to a pink tone whose strength
//! follows the original blue intensity. Alpha is never touched.

use crate::color::clamp_channel;
use image::{Rgba, RgbaImage};

/// Pixels with alpha below this are left alone
pub const ALPHA_FLOOR: u8 = 10;

/// Blue must exceed this to count as blue-ish
pub const BLUE_FLOOR: u8 = 80;

/// Target tone: `channel = base + intensity * span`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: [f64; 3],
    pub span: [f64; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: [180.0, 30.0, 80.0],
            span: [75.0, 40.0, 50.0],
        }
    }
}

pub fn is_blueish(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    b > BLUE_FLOOR && (b > r || b > g)
}

/// New color for a single pixel, or `None` when it should stay as is
pub fn remap_pixel(pixel: Rgba<u8>, palette: &Palette) -> Option<Rgba<u8>> {
    if pixel[3] < ALPHA_FLOOR || !is_blueish(pixel) {
        return None;
    }

    let intensity = f64::from(pixel[2]) / 255.0;
    let channel = |i: usize| clamp_channel(palette.base[i] + intensity * palette.span[i]);

    Some(Rgba([channel(0), channel(1), channel(2), pixel[3]]))
}

/// Remap every blue-ish pixel in place. Returns how many pixels changed.
pub fn remap_blue(image: &mut RgbaImage, palette: &Palette) -> usize {
    let mut changed = 0;
    for pixel in image.pixels_mut() {
        if let Some(new) = remap_pixel(*pixel, palette) {
            *pixel = new;
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_blue_becomes_brand_pink() {
        let mut image = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 255, 255]));
        let changed = remap_blue(&mut image, &Palette::default());

        assert_eq!(changed, 64 * 64);
        assert!(image.pixels().all(|p| *p == Rgba([255, 70, 130, 255])));
    }

    #[test]
    fn near_transparent_pixels_untouched() {
        for alpha in 0..ALPHA_FLOOR {
            let pixel = Rgba([0, 0, 255, alpha]);
            assert_eq!(remap_pixel(pixel, &Palette::default()), None);
        }
    }

    #[test]
    fn alpha_is_preserved() {
        let out = remap_pixel(Rgba([10, 10, 200, 77]), &Palette::default()).unwrap();
        assert_eq!(out[3], 77);
    }

    #[test]
    fn predicate_boundaries() {
        // Blue must be strictly above the floor
        assert!(!is_blueish(Rgba([0, 0, 80, 255])));
        assert!(is_blueish(Rgba([0, 0, 81, 255])));
        // Beating either channel is enough
        assert!(is_blueish(Rgba([200, 50, 100, 255])));
        assert!(is_blueish(Rgba([50, 200, 100, 255])));
        assert!(!is_blueish(Rgba([200, 200, 100, 255])));
        // Ties with both channels do not count
        assert!(!is_blueish(Rgba([120, 120, 120, 255])));
    }

    #[test]
    fn remapped_blue_never_exceeds_red() {
        let palette = Palette::default();
        for b in 0..=255u8 {
            let Some(out) = remap_pixel(Rgba([0, 0, b, 255]), &palette) else {
                continue;
            };
            assert!(out[2] <= 130, "blue {b} mapped to {}", out[2]);
            assert!(out[0] >= 180, "red for blue {b} was {}", out[0]);
            assert!(out[2] < out[0]);
        }
    }

    #[test]
    fn intensity_scales_output() {
        let palette = Palette::default();
        let dim = remap_pixel(Rgba([0, 0, 102, 255]), &palette).unwrap();
        // intensity 0.4: 180 + 30, 30 + 16, 80 + 20
        assert_eq!(dim, Rgba([210, 46, 100, 255]));
    }

    #[test]
    fn other_colors_untouched() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([250, 10, 10, 255]));
        let before = image.clone();
        assert_eq!(remap_blue(&mut image, &Palette::default()), 0);
        assert_eq!(image, before);
    }
}
