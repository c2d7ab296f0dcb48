//! Title screen: dusk gradient, twinkling stars, drifting cats, floating
//! hearts and the instructions panel.
//!
//! The decorations are rolled once when the game starts. Every frame
//! derives their animated positions from the frame counter, so drawing
//! never mutates them.

use rand::Rng;

use super::Canvas;
use crate::entities::{CAT_HEIGHT, CAT_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sprite::Rgb;

pub const STAR_COUNT: usize = 50;
pub const FLOATING_CAT_COUNT: usize = 8;
pub const FLOATING_HEART_COUNT: usize = 5;

/// Cats leave the screen this far past an edge before wrapping around.
pub const WRAP_MARGIN: f32 = 30.0;

const C_STAR_CAT: Rgb = (255, 165, 0);
const C_GLOW: Rgb = (255, 200, 100);
const C_HEART: Rgb = (255, 0, 0);

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub brightness: u8,
    /// Radians per frame.
    pub twinkle_speed: f32,
}

impl Star {
    pub fn brightness_at(&self, frame: u64) -> u8 {
        let shift = 50.0 * (frame as f32 * self.twinkle_speed).cos().abs();
        (self.brightness as f32 + shift).min(255.0) as u8
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingCat {
    pub x: f32,
    pub y: f32,
    /// Per-frame drift.
    pub vx: f32,
    pub vy: f32,
    pub bob_offset: f32,
    /// Scale applied to the body size.
    pub size: f32,
}

impl FloatingCat {
    /// Centre of the cat at `frame`, wrapped into the padded screen.
    pub fn position(&self, frame: u64) -> (i32, i32) {
        let f = frame as f32;
        let bob = 3.0 * (f * 0.1 + self.bob_offset).sin();
        let x = wrap(self.x + self.vx * f, SCREEN_WIDTH as f32);
        let y = wrap(self.y + self.vy * f + bob, SCREEN_HEIGHT as f32);
        (x as i32, y as i32)
    }
}

fn wrap(v: f32, extent: f32) -> f32 {
    let span = extent + 2.0 * WRAP_MARGIN;
    (v + WRAP_MARGIN).rem_euclid(span) - WRAP_MARGIN
}

/// Centre of floating heart `i` at `frame`. Each heart sways around its
/// own slot along the bottom of the screen.
pub fn floating_heart(i: usize, frame: u64) -> (i32, i32) {
    let (f, i) = (frame as f32, i as f32);
    let x = 100.0 + i * 200.0 + 30.0 * (f * 0.02 + i).cos();
    let y = 500.0 + 20.0 * (f * 0.03 + i * 2.0).sin();
    (x as i32, y as i32)
}

#[derive(Clone, Debug, PartialEq)]
pub struct StartScreenFx {
    pub stars: Vec<Star>,
    pub cats: Vec<FloatingCat>,
}

impl StartScreenFx {
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..=SCREEN_WIDTH),
                y: rng.gen_range(0..=300),
                brightness: rng.gen_range(100..=255),
                twinkle_speed: rng.gen_range(0.05..0.15),
            })
            .collect();

        let cats = (0..FLOATING_CAT_COUNT)
            .map(|_| {
                let speed: f32 = rng.gen_range(0.5..2.0);
                let direction: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
                FloatingCat {
                    x: rng.gen_range(50..=SCREEN_WIDTH - 50) as f32,
                    y: rng.gen_range(200..=500) as f32,
                    vx: speed * direction.cos() * 0.5,
                    vy: speed * direction.sin() * 0.3,
                    bob_offset: rng.gen_range(0.0..std::f32::consts::TAU),
                    size: rng.gen_range(0.8..1.5),
                }
            })
            .collect();

        StartScreenFx { stars, cats }
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

const TITLE: &str = "Cheryl's Cat Adventure";
const INSTRUCTIONS: &[&str] = &[
    "Help Cheryl collect cats and avoid raccoons!",
    "",
    "CONTROLS:",
    "Arrow Keys / WASD - Move Cheryl",
    "Up/Down - Jump to balconies/return to sidewalk",
    "",
    "SCORING:",
    "Cats: +10 points (hearts will appear!)",
    "Raccoons: -5 points",
    "",
    "Press SPACE to start!",
    "Press ESC to quit",
];

pub(super) fn draw(canvas: &mut Canvas, fx: &StartScreenFx, frame: u64) {
    draw_gradient(canvas);

    for star in &fx.stars {
        let b = star.brightness_at(frame);
        canvas.fill_rect(star.x, star.y, 3, 3, (b, b, b));
    }

    for cat in &fx.cats {
        let (cx, cy) = cat.position(frame);
        let w = (CAT_WIDTH as f32 * cat.size) as i32;
        let h = (CAT_HEIGHT as f32 * cat.size) as i32;
        let (x, y) = (cx - w / 2, cy - h / 2);
        canvas.fill_rect(x - 3, y - 3, w + 6, h + 6, C_GLOW);
        canvas.fill_rect(x, y, w, h, C_STAR_CAT);
        canvas.fill_rect(x + w / 6, y - 5, w / 3, 5, C_STAR_CAT);
        canvas.fill_rect(x + w / 2, y - 5, w / 3, 5, C_STAR_CAT);
    }

    for i in 0..FLOATING_HEART_COUNT {
        let (x, y) = floating_heart(i, frame);
        let (col, row) = (canvas.col_of(x), canvas.row_of(y));
        canvas.text(col, row, "♥", C_HEART);
    }

    let rows = canvas.rows() as i32;
    let title_row = rows / 6 + ((frame / 20) % 2) as i32;
    canvas.text_centered(title_row, TITLE, (50, 50, 150));

    let mut row = title_row + 2;
    for line in INSTRUCTIONS {
        if !line.is_empty() {
            let color = match *line {
                "CONTROLS:" | "SCORING:" => (255, 220, 100),
                "Press SPACE to start!" if (frame / 15) % 2 == 0 => (255, 255, 255),
                "Press SPACE to start!" => (255, 150, 150),
                _ => (20, 20, 60),
            };
            canvas.text_centered(row, line, color);
        }
        row += 1;
    }
}

fn draw_gradient(canvas: &mut Canvas) {
    let bands: i32 = 12;
    for i in 0..bands {
        let t = i * 255 / (bands - 1);
        let color = (
            (135 + (255 - 135) * t / 255) as u8,
            (206 - (206 - 180) * t / 255) as u8,
            (235 - (235 - 100) * t / 255) as u8,
        );
        let y0 = SCREEN_HEIGHT * i / bands;
        let y1 = SCREEN_HEIGHT * (i + 1) / bands;
        canvas.fill_rect(0, y0, SCREEN_WIDTH, y1 - y0, color);
    }
}
