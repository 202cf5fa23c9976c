//! Font resolution with a guaranteed fallback
//!
//! Candidate font files are tried in order. The first one that exists and
//! parses becomes an outline font rendered through `rusttype`. When none do,
//! the compiled-in 5x7 bitmap font is used, so text can always be drawn.

use crate::color::over;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::{Path, PathBuf};

/// Ordered list of font files to try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChain {
    candidates: Vec<PathBuf>,
}

impl Default for FontChain {
    fn default() -> Self {
        Self::new([
            "/System/Library/Fonts/Helvetica.ttc",
            "/System/Library/Fonts/SFNSText.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ])
    }
}

impl FontChain {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve the first usable font. Never fails.
    pub fn resolve(&self) -> FontHandle {
        self.candidates
            .iter()
            .find_map(|path| load_outline(path))
            .unwrap_or(FontHandle::Builtin)
    }
}

fn load_outline(path: &Path) -> Option<FontHandle> {
    let data = std::fs::read(path).ok()?;
    let font = Font::try_from_vec(data)?;
    Some(FontHandle::Outline {
        name: path.display().to_string(),
        font,
    })
}

/// A font that can measure and draw text at any pixel size
pub enum FontHandle {
    Outline { name: String, font: Font<'static> },
    Builtin,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FontHandle").field(&self.name()).finish()
    }
}

impl FontHandle {
    pub fn name(&self) -> &str {
        match self {
            FontHandle::Outline { name, .. } => name,
            FontHandle::Builtin => "built-in 5x7",
        }
    }

    /// Width and height in pixels of the inked area of `text`
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        match self {
            FontHandle::Outline { font, .. } => {
                let glyphs = layout(font, text, size, 0.0, 0.0);
                let mut bounds: Option<(i32, i32, i32, i32)> = None;
                for bb in glyphs.iter().filter_map(PositionedGlyph::pixel_bounding_box) {
                    bounds = Some(match bounds {
                        None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                        Some((x0, y0, x1, y1)) => (
                            x0.min(bb.min.x),
                            y0.min(bb.min.y),
                            x1.max(bb.max.x),
                            y1.max(bb.max.y),
                        ),
                    });
                }
                bounds
                    .map(|(x0, y0, x1, y1)| ((x1 - x0) as u32, (y1 - y0) as u32))
                    .unwrap_or((0, 0))
            }
            FontHandle::Builtin => bitmap::measure(text, size),
        }
    }

    /// Draw `text` with its top-left at `(x, y)`. Pixels outside the canvas are clipped.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        x: i32,
        y: i32,
        text: &str,
        size: f32,
        color: Rgba<u8>,
    ) {
        match self {
            FontHandle::Outline { font, .. } => {
                for glyph in layout(font, text, size, x as f32, y as f32) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = bb.min.x + gx as i32;
                        let py = bb.min.y + gy as i32;
                        let alpha = (coverage * f32::from(color[3])).round() as u8;
                        blend(canvas, px, py, Rgba([color[0], color[1], color[2], alpha]));
                    });
                }
            }
            FontHandle::Builtin => bitmap::draw(canvas, x, y, text, size, color),
        }
    }
}

/// Positioned glyphs for `text`, top of the ascent at `y`
///
/// Characters the font has no glyph for map to glyph 0. They keep their
/// advance in the layout but are dropped from the result.
fn layout(
    font: &Font<'static>,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
) -> Vec<PositionedGlyph<'static>> {
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x, y + ascent))
        .filter(|glyph| glyph.id().0 != 0)
        .collect()
}

fn blend(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    *pixel = over(*pixel, color);
}

mod bitmap {
    use super::blend;
    use image::{Rgba, RgbaImage};

    const FIRST: u32 = 0x20;
    const COLUMNS: u32 = 5;
    const ROWS: u32 = 7;
    const ADVANCE: u32 = COLUMNS + 1;

    /// Column-major glyphs for 0x20..=0x7E, bit 0 is the top row
    #[rustfmt::skip]
    const GLYPHS: [[u8; 5]; 95] = [
        [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5F, 0x00, 0x00], [0x00, 0x07, 0x00, 0x07, 0x00],
        [0x14, 0x7F, 0x14, 0x7F, 0x14], [0x24, 0x2A, 0x7F, 0x2A, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
        [0x36, 0x49, 0x55, 0x22, 0x50], [0x00, 0x05, 0x03, 0x00, 0x00], [0x00, 0x1C, 0x22, 0x41, 0x00],
        [0x00, 0x41, 0x22, 0x1C, 0x00], [0x08, 0x2A, 0x1C, 0x2A, 0x08], [0x08, 0x08, 0x3E, 0x08, 0x08],
        [0x00, 0x50, 0x30, 0x00, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08], [0x00, 0x60, 0x60, 0x00, 0x00],
        [0x20, 0x10, 0x08, 0x04, 0x02], [0x3E, 0x51, 0x49, 0x45, 0x3E], [0x00, 0x42, 0x7F, 0x40, 0x00],
        [0x42, 0x61, 0x51, 0x49, 0x46], [0x21, 0x41, 0x45, 0x4B, 0x31], [0x18, 0x14, 0x12, 0x7F, 0x10],
        [0x27, 0x45, 0x45, 0x45, 0x39], [0x3C, 0x4A, 0x49, 0x49, 0x30], [0x01, 0x71, 0x09, 0x05, 0x03],
        [0x36, 0x49, 0x49, 0x49, 0x36], [0x06, 0x49, 0x49, 0x29, 0x1E], [0x00, 0x36, 0x36, 0x00, 0x00],
        [0x00, 0x56, 0x36, 0x00, 0x00], [0x08, 0x14, 0x22, 0x41, 0x00], [0x14, 0x14, 0x14, 0x14, 0x14],
        [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x51, 0x09, 0x06], [0x32, 0x49, 0x79, 0x41, 0x3E],
        [0x7E, 0x11, 0x11, 0x11, 0x7E], [0x7F, 0x49, 0x49, 0x49, 0x36], [0x3E, 0x41, 0x41, 0x41, 0x22],
        [0x7F, 0x41, 0x41, 0x22, 0x1C], [0x7F, 0x49, 0x49, 0x49, 0x41], [0x7F, 0x09, 0x09, 0x09, 0x01],
        [0x3E, 0x41, 0x49, 0x49, 0x7A], [0x7F, 0x08, 0x08, 0x08, 0x7F], [0x00, 0x41, 0x7F, 0x41, 0x00],
        [0x20, 0x40, 0x41, 0x3F, 0x01], [0x7F, 0x08, 0x14, 0x22, 0x41], [0x7F, 0x40, 0x40, 0x40, 0x40],
        [0x7F, 0x02, 0x0C, 0x02, 0x7F], [0x7F, 0x04, 0x08, 0x10, 0x7F], [0x3E, 0x41, 0x41, 0x41, 0x3E],
        [0x7F, 0x09, 0x09, 0x09, 0x06], [0x3E, 0x41, 0x51, 0x21, 0x5E], [0x7F, 0x09, 0x19, 0x29, 0x46],
        [0x46, 0x49, 0x49, 0x49, 0x31], [0x01, 0x01, 0x7F, 0x01, 0x01], [0x3F, 0x40, 0x40, 0x40, 0x3F],
        [0x1F, 0x20, 0x40, 0x20, 0x1F], [0x3F, 0x40, 0x38, 0x40, 0x3F], [0x63, 0x14, 0x08, 0x14, 0x63],
        [0x07, 0x08, 0x70, 0x08, 0x07], [0x61, 0x51, 0x49, 0x45, 0x43], [0x00, 0x7F, 0x41, 0x41, 0x00],
        [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x7F, 0x00], [0x04, 0x02, 0x01, 0x02, 0x04],
        [0x40, 0x40, 0x40, 0x40, 0x40], [0x00, 0x01, 0x02, 0x04, 0x00], [0x20, 0x54, 0x54, 0x54, 0x78],
        [0x7F, 0x48, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x20], [0x38, 0x44, 0x44, 0x48, 0x7F],
        [0x38, 0x54, 0x54, 0x54, 0x18], [0x08, 0x7E, 0x09, 0x01, 0x02], [0x0C, 0x52, 0x52, 0x52, 0x3E],
        [0x7F, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7D, 0x40, 0x00], [0x20, 0x40, 0x44, 0x3D, 0x00],
        [0x7F, 0x10, 0x28, 0x44, 0x00], [0x00, 0x41, 0x7F, 0x40, 0x00], [0x7C, 0x04, 0x18, 0x04, 0x78],
        [0x7C, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38], [0x7C, 0x14, 0x14, 0x14, 0x08],
        [0x08, 0x14, 0x14, 0x18, 0x7C], [0x7C, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x20],
        [0x04, 0x3F, 0x44, 0x40, 0x20], [0x3C, 0x40, 0x40, 0x20, 0x7C], [0x1C, 0x20, 0x40, 0x20, 0x1C],
        [0x3C, 0x40, 0x30, 0x40, 0x3C], [0x44, 0x28, 0x10, 0x28, 0x44], [0x0C, 0x50, 0x50, 0x50, 0x3C],
        [0x44, 0x64, 0x54, 0x4C, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00], [0x00, 0x00, 0x7F, 0x00, 0x00],
        [0x00, 0x41, 0x36, 0x08, 0x00], [0x08, 0x04, 0x08, 0x10, 0x08],
    ];

    /// Integer block size so the cell height roughly matches the requested pixel size
    pub(super) fn pixel_scale(size: f32) -> u32 {
        ((size / (ROWS + 1) as f32).round() as u32).max(1)
    }

    fn glyph(c: char) -> Option<&'static [u8; 5]> {
        let code = u32::from(c).checked_sub(FIRST)?;
        GLYPHS.get(code as usize)
    }

    pub(super) fn measure(text: &str, size: f32) -> (u32, u32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0, 0);
        }
        let scale = pixel_scale(size);
        ((count * ADVANCE - 1) * scale, ROWS * scale)
    }

    pub(super) fn draw(
        canvas: &mut RgbaImage,
        x: i32,
        y: i32,
        text: &str,
        size: f32,
        color: Rgba<u8>,
    ) {
        let scale = pixel_scale(size) as i32;
        for (index, c) in text.chars().enumerate() {
            // Characters outside the table still advance
            let Some(columns) = glyph(c) else {
                continue;
            };
            let origin_x = x + index as i32 * ADVANCE as i32 * scale;
            for (col, bits) in columns.iter().enumerate() {
                for row in 0..ROWS as i32 {
                    if bits & (1 << row) == 0 {
                        continue;
                    }
                    let block_x = origin_x + col as i32 * scale;
                    let block_y = y + row * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend(canvas, block_x + dx, block_y + dy, color);
                        }
                    }
                }
            }
        }
    }
}
