//! Store screenshot scenes
//!
//! Each screenshot is a [`Scene`] on the dark row-gradient backdrop. Layout
//! numbers are absolute pixels for the 1280x800 store format; centered text is
//! measured at render time.

use crate::scene::{Bounds, Scene, TextAnchor};
use image::Rgba;

pub const BG_DARK: Rgba<u8> = Rgba([26, 26, 46, 255]);
pub const BG_GRADIENT_END: Rgba<u8> = Rgba([22, 33, 62, 255]);
pub const PINK: Rgba<u8> = Rgba([225, 48, 108, 255]);
pub const PURPLE: Rgba<u8> = Rgba([131, 58, 180, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GRAY: Rgba<u8> = Rgba([100, 100, 100, 255]);
pub const GREEN: Rgba<u8> = Rgba([64, 196, 99, 255]);

const PANEL: Rgba<u8> = Rgba([40, 40, 60, 255]);

/// A named screenshot: output file name plus the scene that renders it
pub struct Screenshot {
    pub file_name: &'static str,
    pub scene: Scene,
}

/// All store screenshots in output order
pub fn store_screenshots(width: u32, height: u32) -> Vec<Screenshot> {
    vec![
        Screenshot {
            file_name: "screenshot-1-popup.png",
            scene: popup(width, height),
        },
        Screenshot {
            file_name: "screenshot-2-gallery.png",
            scene: gallery(width, height),
        },
        Screenshot {
            file_name: "screenshot-3-howto.png",
            scene: how_it_works(width, height),
        },
        Screenshot {
            file_name: "screenshot-4-features.png",
            scene: features(width, height),
        },
    ]
}

fn backdrop(width: u32, height: u32) -> Scene {
    let mut scene = Scene::new(width, height, BG_DARK);
    scene.row_gradient(BG_DARK, BG_GRADIENT_END);
    scene
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Bounds {
    Bounds::new(x, y, x + w, y + h)
}

fn at(x: i32, y: i32) -> TextAnchor {
    TextAnchor::At { x, y }
}

/// Extension popup with capture stats and action buttons
pub fn popup(width: u32, height: u32) -> Scene {
    let mut scene = backdrop(width, height);
    let (w, h) = (width as i32, height as i32);

    scene
        .text("Export Your Instagram Saved Posts", 48.0, WHITE, TextAnchor::CenterX { y: 60 })
        .text(
            "Capture images, videos, and carousels with one click",
            28.0,
            GRAY,
            TextAnchor::CenterX { y: 130 },
        );

    let (popup_w, popup_h) = (320, 380);
    let px = (w - popup_w) / 2;
    let py = 200;

    scene
        .rounded_rect(rect(px, py, popup_w, popup_h), 16, Rgba([30, 30, 50, 255]))
        .text("IG Exporter", 28.0, WHITE, at(px + 60, py + 25))
        .rounded_rect(
            Bounds::new(px + 220, py + 25, px + 280, py + 50),
            8,
            Rgba([225, 48, 108, 50]),
        )
        .text("v4.1.0", 20.0, PINK, at(px + 232, py + 28));

    let box_y = py + 80;
    scene
        .rounded_rect(Bounds::new(px + 20, box_y, px + 150, box_y + 90), 12, PANEL)
        .text("127", 48.0, GREEN, at(px + 60, box_y + 15))
        .text("Images", 20.0, GRAY, at(px + 55, box_y + 60))
        .rounded_rect(Bounds::new(px + 170, box_y, px + 300, box_y + 90), 12, PANEL)
        .text("43", 48.0, PINK, at(px + 220, box_y + 15))
        .text("Videos", 20.0, GRAY, at(px + 210, box_y + 60));

    let btn_y = py + 200;
    scene
        .rounded_rect(Bounds::new(px + 20, btn_y, px + 150, btn_y + 50), 10, PINK)
        .text("🎠 Capture", 20.0, WHITE, at(px + 35, btn_y + 12))
        .rounded_rect(Bounds::new(px + 170, btn_y, px + 300, btn_y + 50), 10, PURPLE)
        .text("🖼 Gallery", 20.0, WHITE, at(px + 195, btn_y + 12))
        .rounded_rect(
            Bounds::new(px + 20, btn_y + 70, px + 300, btn_y + 120),
            10,
            Rgba([80, 40, 40, 255]),
        )
        .text("🗑 Clear", 20.0, WHITE, at(px + 125, btn_y + 82));

    scene.text(
        "Free • Private • No data sent to servers",
        20.0,
        GRAY,
        TextAnchor::CenterX { y: h - 60 },
    );
    scene
}

/// Gallery grid of colored media placeholders with a stats bar
pub fn gallery(width: u32, height: u32) -> Scene {
    const CELL: i32 = 180;
    const GAP: i32 = 15;
    const TILE_COLORS: [Rgba<u8>; 6] = [
        Rgba([64, 196, 99, 255]),
        Rgba([225, 48, 108, 255]),
        Rgba([131, 58, 180, 255]),
        Rgba([64, 93, 230, 255]),
        Rgba([253, 29, 29, 255]),
        Rgba([245, 166, 35, 255]),
    ];

    let mut scene = backdrop(width, height);
    let (w, h) = (width as i32, height as i32);

    scene
        .text("Beautiful Gallery View", 48.0, WHITE, TextAnchor::CenterX { y: 40 })
        .text(
            "Browse, preview, and download your saved media",
            28.0,
            GRAY,
            TextAnchor::CenterX { y: 100 },
        );

    let (start_x, start_y) = (100, 180);
    let mut index = 0;
    for row in 0..3 {
        for col in 0..6 {
            let x = start_x + col * (CELL + GAP);
            let y = start_y + row * (CELL + GAP);
            if x + CELL > w - 50 {
                continue;
            }

            scene.rounded_rect(rect(x, y, CELL, CELL), 12, TILE_COLORS[index % TILE_COLORS.len()]);
            // Every fourth tile reads as a video
            if index % 4 == 0 {
                scene.text("▶", 48.0, WHITE, at(x + 70, y + 70));
            }
            index += 1;
        }
    }

    let bar_y = h - 80;
    scene
        .rounded_rect(Bounds::new(100, bar_y, w - 100, bar_y + 50), 12, PANEL)
        .text("📸 127 Images", 20.0, GREEN, at(150, bar_y + 12))
        .text("🎬 43 Videos", 20.0, PINK, at(350, bar_y + 12))
        .text("📥 Click to Download", 20.0, WHITE, at(550, bar_y + 12));
    scene
}

/// Three numbered steps
pub fn how_it_works(width: u32, height: u32) -> Scene {
    const STEP_WIDTH: i32 = 350;
    const STEPS: [(&str, &str, [&str; 2]); 3] = [
        ("1", "Go to Saved Posts", ["Navigate to your Instagram", "saved posts page"]),
        ("2", "Click Capture", ["The extension automatically", "scans all your posts"]),
        ("3", "Download", ["Open Gallery to view", "and download media"]),
    ];

    let mut scene = backdrop(width, height);
    let (w, h) = (width as i32, height as i32);

    scene.text("How It Works", 48.0, WHITE, TextAnchor::CenterX { y: 60 });

    let start_x = (w - (STEP_WIDTH * 3 + 60)) / 2;
    let step_y = 200;
    let radius = 50;

    for (i, (number, title, lines)) in STEPS.iter().enumerate() {
        let x = start_x + i as i32 * (STEP_WIDTH + 30);
        let cx = x + STEP_WIDTH / 2;

        scene
            .ellipse(Bounds::new(cx - radius, step_y, cx + radius, step_y + radius * 2), PINK)
            .text(*number, 48.0, WHITE, at(cx - 15, step_y + 25))
            .text(
                *title,
                32.0,
                WHITE,
                TextAnchor::CenterIn {
                    left: x,
                    width: STEP_WIDTH,
                    y: step_y + 130,
                },
            );

        for (j, line) in lines.iter().enumerate() {
            scene.text(
                *line,
                22.0,
                GRAY,
                TextAnchor::CenterIn {
                    left: x,
                    width: STEP_WIDTH,
                    y: step_y + 180 + j as i32 * 30,
                },
            );
        }
    }

    scene.text(
        "✓ Captures carousels & reels  •  ✓ 100% private  •  ✓ Free forever",
        22.0,
        GREEN,
        TextAnchor::CenterX { y: h - 100 },
    );
    scene
}

/// Two-column grid of feature cards
pub fn features(width: u32, height: u32) -> Scene {
    const CARD_W: i32 = 350;
    const CARD_H: i32 = 120;
    const GAP_X: i32 = 40;
    const GAP_Y: i32 = 30;
    const CARDS: [(&str, &str, &str); 6] = [
        ("🎠", "Carousels", "Captures all slides"),
        ("🎬", "Videos", "Download reels & clips"),
        ("🔒", "Private", "No data leaves browser"),
        ("⚡", "Fast", "Scan hundreds in minutes"),
        ("🔄", "Smart", "Skips duplicates"),
        ("🖼️", "Gallery", "Beautiful preview"),
    ];

    let mut scene = backdrop(width, height);
    let (w, h) = (width as i32, height as i32);

    scene.text("Powerful Features", 48.0, WHITE, TextAnchor::CenterX { y: 50 });

    let start_x = (w - (CARD_W * 2 + GAP_X)) / 2;
    let start_y = 150;

    for (i, (icon, title, description)) in CARDS.iter().enumerate() {
        let (row, col) = (i as i32 / 2, i as i32 % 2);
        let x = start_x + col * (CARD_W + GAP_X);
        let y = start_y + row * (CARD_H + GAP_Y);

        scene
            .rounded_rect(rect(x, y, CARD_W, CARD_H), 16, Rgba([40, 40, 65, 255]))
            .ellipse(Bounds::new(x + 20, y + 25, x + 80, y + 85), PINK)
            .text(*icon, 28.0, WHITE, at(x + 35, y + 38))
            .text(*title, 28.0, WHITE, at(x + 100, y + 30))
            .text(*description, 22.0, GRAY, at(x + 100, y + 70));
    }

    scene.text("Install now - It's FREE!", 28.0, PINK, TextAnchor::CenterX { y: h - 80 });
    scene
}
