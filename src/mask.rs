//! Single-channel masks used when compositing
//!
//! A mask has the same dimensions as the buffer it is applied to. Values are
//! hard-edged (0 or 255); shapes are sampled at pixel coordinates.

use image::{GrayImage, Luma, Rgba, RgbaImage};

const OPAQUE: Luma<u8> = Luma([255]);

/// Whether pixel `(px, py)` lies inside the ellipse inscribed in the inclusive
/// bounds `(x0, y0)..=(x1, y1)`.
pub fn ellipse_contains(x0: i32, y0: i32, x1: i32, y1: i32, px: i32, py: i32) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }

    let rx = f64::from(x1 - x0) / 2.0;
    let ry = f64::from(y1 - y0) / 2.0;
    // Degenerate ellipses collapse to their bounding line
    if rx <= 0.0 || ry <= 0.0 {
        return true;
    }

    let cx = f64::from(x0) + rx;
    let cy = f64::from(y0) + ry;
    let nx = (f64::from(px) - cx) / rx;
    let ny = (f64::from(py) - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Whether pixel `(px, py)` lies inside the rounded rectangle with inclusive
/// bounds `(x0, y0)..=(x1, y1)` and corner radius `radius`.
pub fn rounded_rect_contains(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    px: i32,
    py: i32,
) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }

    let radius = radius.clamp(0, (x1 - x0).min(y1 - y0) / 2);
    if radius == 0 {
        return true;
    }

    let cx = if px < x0 + radius {
        x0 + radius
    } else if px > x1 - radius {
        x1 - radius
    } else {
        return true;
    };
    let cy = if py < y0 + radius {
        y0 + radius
    } else if py > y1 - radius {
        y1 - radius
    } else {
        return true;
    };

    let dx = i64::from(px - cx);
    let dy = i64::from(py - cy);
    let r = i64::from(radius);
    dx * dx + dy * dy <= r * r
}

/// Mask covering a rounded rectangle inset by `margin` on every side
pub fn rounded_rect(width: u32, height: u32, margin: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width <= margin * 2 || height <= margin * 2 {
        return mask;
    }

    let x0 = margin as i32;
    let y0 = margin as i32;
    let x1 = (width - 1 - margin) as i32;
    let y1 = (height - 1 - margin) as i32;

    for (x, y, value) in mask.enumerate_pixels_mut() {
        if rounded_rect_contains(x0, y0, x1, y1, radius as i32, x as i32, y as i32) {
            *value = OPAQUE;
        }
    }
    mask
}

/// Circular mask for a square canvas of `size`, inset by `margin`
pub fn circle(size: u32, margin: u32) -> GrayImage {
    let lo = margin as i32;
    let hi = size as i32 - margin as i32;
    let mut mask = GrayImage::new(size, size);

    for (x, y, value) in mask.enumerate_pixels_mut() {
        if ellipse_contains(lo, lo, hi, hi, x as i32, y as i32) {
            *value = OPAQUE;
        }
    }
    mask
}

/// Fill every pixel covered by `mask` with `color` on a transparent layer
pub fn fill(mask: &GrayImage, color: Rgba<u8>) -> RgbaImage {
    let (width, height) = mask.dimensions();
    RgbaImage::from_fn(width, height, |x, y| {
        let coverage = u16::from(mask.get_pixel(x, y)[0]);
        let alpha = u16::from(color[3]) * coverage / 255;
        if alpha == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([color[0], color[1], color[2], alpha as u8])
        }
    })
}

/// Copy of `image` whose alpha is scaled by `mask`; fully masked pixels become transparent
pub fn apply(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    let mut out = image.clone();
    for (pixel, value) in out.pixels_mut().zip(mask.pixels()) {
        let coverage = u16::from(value[0]);
        if coverage == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        } else {
            pixel[3] = (u16::from(pixel[3]) * coverage / 255) as u8;
        }
    }
    out
}

/// Replace the alpha channel of `image` with `mask`
pub fn put_alpha(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    for (pixel, value) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = value[0];
    }
}
