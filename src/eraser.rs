//! Watermark eraser
//!
//! Paints over a corner region with a sampled background color. It knows
//! nothing about the watermark's shape: any pixel in the region that falls
//! outside the background tolerance window is replaced. Anti-aliased edge
//! pixels that happen to land inside the window are left as they are.

use image::{Rgba, RgbaImage};

/// Exclusive channel bounds, `low < value < high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub low: u8,
    pub high: u8,
}

impl ChannelRange {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.low < value && value < self.high
    }
}

/// RGB window that counts as "still background"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceWindow {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl ToleranceWindow {
    pub fn contains(&self, pixel: Rgba<u8>) -> bool {
        self.red.contains(pixel[0])
            && self.green.contains(pixel[1])
            && self.blue.contains(pixel[2])
    }
}

impl Default for ToleranceWindow {
    // Tuned against the pink source artwork
    fn default() -> Self {
        Self {
            red: ChannelRange::new(200, 240),
            green: ChannelRange::new(40, 90),
            blue: ChannelRange::new(100, 140),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserParams {
    /// Top-left of the cleaned region as fractions of width and height.
    /// The region always extends to the bottom-right edge.
    pub region_start: (f64, f64),
    /// Where the background color is sampled
    pub sample_point: (u32, u32),
    pub window: ToleranceWindow,
}

impl Default for EraserParams {
    fn default() -> Self {
        Self {
            region_start: (0.82, 0.82),
            sample_point: (50, 50),
            window: ToleranceWindow::default(),
        }
    }
}

impl EraserParams {
    /// First column and row of the cleaned region for an image of this size
    pub fn region_origin(&self, width: u32, height: u32) -> (u32, u32) {
        let x = (f64::from(width) * self.region_start.0) as u32;
        let y = (f64::from(height) * self.region_start.1) as u32;
        (x.min(width), y.min(height))
    }
}

/// Erase off-background pixels in the configured region. Returns how many pixels were replaced.
pub fn erase_region(image: &mut RgbaImage, params: &EraserParams) -> usize {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let sample_x = params.sample_point.0.min(width - 1);
    let sample_y = params.sample_point.1.min(height - 1);
    let background = *image.get_pixel(sample_x, sample_y);

    let (start_x, start_y) = params.region_origin(width, height);
    let mut replaced = 0;

    for y in start_y..height {
        for x in start_x..width {
            let pixel = image.get_pixel_mut(x, y);
            if !params.window.contains(*pixel) {
                *pixel = background;
                replaced += 1;
            }
        }
    }

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINK: Rgba<u8> = Rgba([220, 60, 120, 255]);

    #[test]
    fn restores_single_off_background_pixel() {
        let mut image = RgbaImage::from_pixel(100, 100, PINK);
        image.put_pixel(90, 90, Rgba([255, 255, 255, 255]));

        let replaced = erase_region(&mut image, &EraserParams::default());

        assert_eq!(replaced, 1);
        assert_eq!(*image.get_pixel(90, 90), PINK);
        assert!(image.pixels().all(|p| *p == PINK));
    }

    #[test]
    fn leaves_pixels_outside_region() {
        let mut image = RgbaImage::from_pixel(100, 100, PINK);
        image.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        image.put_pixel(81, 99, Rgba([255, 255, 255, 255]));

        assert_eq!(erase_region(&mut image, &EraserParams::default()), 0);
        assert_eq!(*image.get_pixel(10, 10), Rgba([255, 255, 255, 255]));
        assert_eq!(*image.get_pixel(81, 99), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn replacement_copies_sampled_alpha() {
        let mut image = RgbaImage::from_pixel(100, 100, PINK);
        image.put_pixel(50, 50, Rgba([221, 61, 121, 200]));
        image.put_pixel(95, 95, Rgba([0, 0, 0, 10]));

        erase_region(&mut image, &EraserParams::default());

        assert_eq!(*image.get_pixel(95, 95), Rgba([221, 61, 121, 200]));
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let window = ToleranceWindow::default();
        assert!(window.contains(Rgba([201, 41, 101, 255])));
        assert!(!window.contains(Rgba([200, 60, 120, 255])));
        assert!(!window.contains(Rgba([220, 90, 120, 255])));
        assert!(!window.contains(Rgba([220, 60, 140, 255])));
    }

    #[test]
    fn custom_window_and_region() {
        let params = EraserParams {
            region_start: (0.5, 0.5),
            sample_point: (0, 0),
            window: ToleranceWindow {
                red: ChannelRange::new(0, 20),
                green: ChannelRange::new(0, 20),
                blue: ChannelRange::new(0, 20),
            },
        };
        let mut image = RgbaImage::from_pixel(10, 10, Rgba([5, 5, 5, 255]));
        image.put_pixel(7, 7, Rgba([200, 0, 0, 255]));
        image.put_pixel(2, 2, Rgba([200, 0, 0, 255]));

        assert_eq!(erase_region(&mut image, &params), 1);
        assert_eq!(*image.get_pixel(7, 7), Rgba([5, 5, 5, 255]));
        assert_eq!(*image.get_pixel(2, 2), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn small_images_sample_inside_bounds() {
        let mut image = RgbaImage::from_pixel(20, 20, PINK);
        image.put_pixel(19, 19, Rgba([0, 0, 0, 255]));
        // Sample point clamps to (19, 19) on a 20x20 image
        erase_region(&mut image, &EraserParams::default());
        assert_eq!(*image.get_pixel(19, 19), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn empty_image_is_noop() {
        let mut image = RgbaImage::new(0, 0);
        assert_eq!(erase_region(&mut image, &EraserParams::default()), 0);
    }
}
