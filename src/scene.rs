//! Scene renderer
//!
//! A scene is a canvas size plus an ordered list of draw commands. Commands
//! are painted in order onto a fresh canvas, later ones over earlier ones.
//! Opaque colors overwrite; colors with alpha below 255 are blended.

use crate::color::{self, over};
use crate::font::FontHandle;
use crate::mask::{ellipse_contains, rounded_rect_contains};
use image::{Rgba, RgbaImage};

/// Inclusive pixel bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Intersection with a `width` x `height` canvas as half-open ranges
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i32 - 1);
        let y1 = self.y1.min(height as i32 - 1);
        (x0 <= x1 && y0 <= y1).then(|| (x0 as u32, y0 as u32, x1 as u32 + 1, y1 as u32 + 1))
    }
}

/// Where a text run is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Top-left corner at a fixed point
    At { x: i32, y: i32 },
    /// Centered horizontally on the canvas
    CenterX { y: i32 },
    /// Centered horizontally inside a column starting at `left`
    CenterIn { left: i32, width: i32, y: i32 },
}

impl TextAnchor {
    /// Top-left corner for a run `text_width` wide on a canvas `canvas_width` wide
    pub fn origin(&self, text_width: u32, canvas_width: u32) -> (i32, i32) {
        match *self {
            TextAnchor::At { x, y } => (x, y),
            TextAnchor::CenterX { y } => {
                ((canvas_width as i32 - text_width as i32).div_euclid(2), y)
            }
            TextAnchor::CenterIn { left, width, y } => {
                (left + (width - text_width as i32).div_euclid(2), y)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Vertical blend filled one row at a time, `top` at row 0
    RowGradient { top: Rgba<u8>, bottom: Rgba<u8> },
    Rect { bounds: Bounds, color: Rgba<u8> },
    /// Two overlapping rectangles plus four corner ellipses
    RoundedRect { bounds: Bounds, radius: i32, color: Rgba<u8> },
    Ellipse { bounds: Bounds, color: Rgba<u8> },
    Text {
        text: String,
        size: f32,
        color: Rgba<u8>,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            width,
            height,
            background,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn push(&mut self, command: DrawCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn row_gradient(&mut self, top: Rgba<u8>, bottom: Rgba<u8>) -> &mut Self {
        self.push(DrawCommand::RowGradient { top, bottom })
    }

    pub fn rect(&mut self, bounds: Bounds, color: Rgba<u8>) -> &mut Self {
        self.push(DrawCommand::Rect { bounds, color })
    }

    pub fn rounded_rect(&mut self, bounds: Bounds, radius: i32, color: Rgba<u8>) -> &mut Self {
        self.push(DrawCommand::RoundedRect {
            bounds,
            radius,
            color,
        })
    }

    pub fn ellipse(&mut self, bounds: Bounds, color: Rgba<u8>) -> &mut Self {
        self.push(DrawCommand::Ellipse { bounds, color })
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Rgba<u8>,
        anchor: TextAnchor,
    ) -> &mut Self {
        self.push(DrawCommand::Text {
            text: text.into(),
            size,
            color,
            anchor,
        })
    }

    /// Paint every command in order onto a new canvas
    pub fn render(&self, font: &FontHandle) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, self.background);
        for command in &self.commands {
            draw(&mut canvas, command, font);
        }
        canvas
    }
}

fn draw(canvas: &mut RgbaImage, command: &DrawCommand, font: &FontHandle) {
    match command {
        DrawCommand::RowGradient { top, bottom } => {
            let (width, height) = canvas.dimensions();
            for y in 0..height {
                let t = f64::from(y) / f64::from(height);
                let color = color::lerp(*top, *bottom, t);
                for x in 0..width {
                    paint(canvas, x, y, color);
                }
            }
        }
        DrawCommand::Rect { bounds, color } => fill_shape(canvas, bounds, *color, |_, _| true),
        DrawCommand::RoundedRect {
            bounds,
            radius,
            color,
        } => {
            let b = *bounds;
            let r = *radius;
            let d = 2 * r;
            let parts = [
                Bounds::new(b.x0 + r, b.y0, b.x1 - r, b.y1),
                Bounds::new(b.x0, b.y0 + r, b.x1, b.y1 - r),
            ];
            let corners = [
                Bounds::new(b.x0, b.y0, b.x0 + d, b.y0 + d),
                Bounds::new(b.x1 - d, b.y0, b.x1, b.y0 + d),
                Bounds::new(b.x0, b.y1 - d, b.x0 + d, b.y1),
                Bounds::new(b.x1 - d, b.y1 - d, b.x1, b.y1),
            ];
            // Union of all parts so translucent fills only blend once per pixel
            fill_shape(canvas, bounds, *color, |x, y| {
                parts.iter().any(|p| p.contains(x, y))
                    || corners
                        .iter()
                        .any(|c| ellipse_contains(c.x0, c.y0, c.x1, c.y1, x, y))
            });
        }
        DrawCommand::Ellipse { bounds, color } => {
            let b = *bounds;
            fill_shape(canvas, bounds, *color, |x, y| {
                ellipse_contains(b.x0, b.y0, b.x1, b.y1, x, y)
            });
        }
        DrawCommand::Text {
            text,
            size,
            color,
            anchor,
        } => {
            let (text_width, _) = font.measure(text, *size);
            let (x, y) = anchor.origin(text_width, canvas.width());
            font.draw(canvas, x, y, text, *size, *color);
        }
    }
}

fn fill_shape(
    canvas: &mut RgbaImage,
    bounds: &Bounds,
    color: Rgba<u8>,
    inside: impl Fn(i32, i32) -> bool,
) {
    let Some((x0, y0, x1, y1)) = bounds.clip(canvas.width(), canvas.height()) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            if inside(x as i32, y as i32) {
                paint(canvas, x, y, color);
            }
        }
    }
}

fn paint(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    let pixel = canvas.get_pixel_mut(x, y);
    *pixel = if color[3] == 255 { color } else { over(*pixel, color) };
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn render(scene: &Scene) -> RgbaImage {
        scene.render(&FontHandle::Builtin)
    }

    #[test]
    fn empty_scene_is_background() {
        let canvas = render(&Scene::new(1280, 800, BLACK));
        assert_eq!(canvas.dimensions(), (1280, 800));
        assert!(canvas.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn row_gradient_varies_by_row_only() {
        let mut scene = Scene::new(10, 100, BLACK);
        scene.row_gradient(Rgba([26, 26, 46, 255]), Rgba([22, 33, 62, 255]));
        let canvas = render(&scene);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([26, 26, 46, 255]));
        assert_eq!(canvas.get_pixel(0, 50), canvas.get_pixel(9, 50));
        // y = 50: 26 - 4 * 0.5, 26 + 7 * 0.5, 46 + 16 * 0.5
        assert_eq!(*canvas.get_pixel(3, 50), Rgba([24, 29, 54, 255]));
    }

    #[test]
    fn later_commands_paint_over_earlier() {
        let mut scene = Scene::new(20, 20, BLACK);
        scene
            .rect(Bounds::new(0, 0, 9, 9), RED)
            .rect(Bounds::new(5, 5, 14, 14), BLUE);
        let canvas = render(&scene);

        assert_eq!(*canvas.get_pixel(2, 2), RED);
        assert_eq!(*canvas.get_pixel(7, 7), BLUE);
        assert_eq!(*canvas.get_pixel(9, 9), BLUE);
        assert_eq!(*canvas.get_pixel(15, 15), BLACK);
    }

    #[test]
    fn rounded_rect_has_round_corners() {
        let mut scene = Scene::new(60, 60, BLACK);
        scene.rounded_rect(Bounds::new(10, 10, 50, 40), 8, RED);
        let canvas = render(&scene);

        assert_eq!(*canvas.get_pixel(10, 10), BLACK);
        assert_eq!(*canvas.get_pixel(50, 40), BLACK);
        assert_eq!(*canvas.get_pixel(30, 10), RED);
        assert_eq!(*canvas.get_pixel(10, 25), RED);
        assert_eq!(*canvas.get_pixel(18, 18), RED);
        assert_eq!(*canvas.get_pixel(51, 25), BLACK);
    }

    #[test]
    fn ellipse_fills_inscribed_area() {
        let mut scene = Scene::new(120, 120, BLACK);
        scene.ellipse(Bounds::new(10, 10, 110, 110), RED);
        let canvas = render(&scene);

        assert_eq!(*canvas.get_pixel(60, 60), RED);
        assert_eq!(*canvas.get_pixel(60, 10), RED);
        assert_eq!(*canvas.get_pixel(12, 12), BLACK);
    }

    #[test]
    fn translucent_fill_blends_once() {
        let mut scene = Scene::new(40, 40, Rgba([30, 30, 50, 255]));
        scene.rounded_rect(Bounds::new(0, 0, 39, 39), 8, Rgba([225, 48, 108, 50]));
        let canvas = render(&scene);

        // The center is covered by both inner rectangles but blended once
        let center = canvas.get_pixel(20, 20);
        let edge = canvas.get_pixel(20, 1);
        assert_eq!(center, edge);
        assert_eq!(center[3], 255);
        assert!(center[0] > 30 && center[0] < 225);
    }

    #[test]
    fn out_of_canvas_shapes_clip() {
        let mut scene = Scene::new(10, 10, BLACK);
        scene
            .rect(Bounds::new(-50, -50, -1, -1), RED)
            .ellipse(Bounds::new(5, 5, 40, 40), RED)
            .rounded_rect(Bounds::new(8, -20, 30, 30), 6, BLUE);
        let canvas = render(&scene);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn centered_text_origin() {
        assert_eq!(TextAnchor::CenterX { y: 60 }.origin(200, 1280), (540, 60));
        assert_eq!(TextAnchor::CenterX { y: 0 }.origin(15, 100), (42, 0));
        assert_eq!(TextAnchor::CenterX { y: 0 }.origin(101, 100), (-1, 0));
        assert_eq!(
            TextAnchor::CenterIn { left: 100, width: 350, y: 5 }.origin(150, 1280),
            (200, 5)
        );
        assert_eq!(TextAnchor::At { x: 3, y: 4 }.origin(999, 10), (3, 4));
    }

    #[test]
    fn centered_text_is_symmetric() {
        let mut scene = Scene::new(200, 40, BLACK);
        scene.text("HHHH", 16.0, Rgba([255, 255, 255, 255]), TextAnchor::CenterX { y: 10 });
        let canvas = render(&scene);

        let lit: Vec<u32> = (0..200)
            .filter(|&x| (0..40).any(|y| canvas.get_pixel(x, y)[0] > 0))
            .collect();
        let left = *lit.first().unwrap();
        let right = 199 - *lit.last().unwrap();
        assert!(left.abs_diff(right) <= 1, "left {left} right {right}");
    }
}
