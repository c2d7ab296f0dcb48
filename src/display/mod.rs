/// Rendering layer — all terminal I/O lives here.
///
/// Each frame is painted into a `Canvas` in logical 1000×600 coordinates
/// and then flushed to the terminal. No game logic happens here; this
/// module only reads the state and the entity views the camera produces.

pub mod canvas;
pub mod start_screen;

use std::io::Write;

use crate::camera::{road_line_offset, visible_entities, EntityView, ROAD_DASH_PERIOD};
use crate::entities::{
    GameState, GameStatus, CAT_HEIGHT, CAT_WIDTH, GROUND_Y, RACCOON_HEIGHT, RACCOON_WIDTH,
    ROAD_Y, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::sprite::{PlayerSprite, Rgb};

pub use canvas::Canvas;
pub use start_screen::StartScreenFx;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Rgb = (135, 206, 235);
const C_SIDEWALK: Rgb = (128, 128, 128);
const C_ROAD: Rgb = (0, 0, 0);
const C_ROAD_LINE: Rgb = (255, 255, 255);
const C_BUILDING: Rgb = (64, 64, 64);
const C_WINDOW: Rgb = (255, 255, 150);
const C_CAT: Rgb = (255, 165, 0);
const C_CAT_RESTING: Rgb = (255, 200, 150);
const C_BALCONY: Rgb = (170, 170, 180);
const C_RACCOON: Rgb = (139, 69, 19);
const C_RACCOON_RESTING: Rgb = (100, 50, 15);
const C_MASK: Rgb = (0, 0, 0);
const C_HEART: Rgb = (255, 0, 0);
const C_HUD: Rgb = (0, 0, 0);
const C_HINT: Rgb = (230, 230, 230);

/// How far a balcony ledge sticks out on each side of the cat sitting on it.
const BALCONY_OVERHANG: i32 = 6;

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one frame for whichever screen the game is on.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &mut Canvas,
    state: &GameState,
    sprite: &PlayerSprite,
    fx: &StartScreenFx,
    anim_frame: u64,
) -> std::io::Result<()> {
    match state.status {
        GameStatus::Start => start_screen::draw(canvas, fx, anim_frame),
        GameStatus::Playing => draw_street(canvas, state, sprite),
    }
    canvas.flush(out)?;
    out.flush()
}

// ── Street ────────────────────────────────────────────────────────────────────

fn draw_street(canvas: &mut Canvas, state: &GameState, sprite: &PlayerSprite) {
    canvas.fill(C_SKY);

    // Buildings go behind the sidewalk; critters and hearts on top.
    let views = visible_entities(state);
    for view in views.iter().filter(|v| matches!(v, EntityView::Building { .. })) {
        draw_entity(canvas, view);
    }

    draw_ground(canvas, state.player.world_x);

    for view in views.iter().filter(|v| !matches!(v, EntityView::Building { .. })) {
        draw_entity(canvas, view);
    }

    let p = &state.player;
    canvas.blit(p.x, p.y, p.width, p.height, |dx, dy| sprite.sample(dx, dy));

    draw_hud(canvas, state);
}

fn draw_ground(canvas: &mut Canvas, camera_x: i32) {
    canvas.fill_rect(0, GROUND_Y, SCREEN_WIDTH, ROAD_Y - GROUND_Y, C_SIDEWALK);
    canvas.fill_rect(0, ROAD_Y, SCREEN_WIDTH, SCREEN_HEIGHT - ROAD_Y, C_ROAD);

    let mut x = -road_line_offset(camera_x);
    while x < SCREEN_WIDTH + ROAD_DASH_PERIOD {
        canvas.fill_rect(x, 545, 30, 5, C_ROAD_LINE);
        x += ROAD_DASH_PERIOD;
    }
}

/// Single dispatch point for every drawable kind.
pub fn draw_entity(canvas: &mut Canvas, view: &EntityView) {
    match view {
        EntityView::Building { x, top, width, height, windows } => {
            canvas.fill_rect(*x, *top, *width, *height, C_BUILDING);
            for w in windows {
                canvas.fill_rect(w.x, w.y, WINDOW_WIDTH, WINDOW_HEIGHT, C_WINDOW);
            }
        }
        EntityView::Cat { x, y, on_balcony, resting } => {
            if *on_balcony {
                let ledge_w = CAT_WIDTH + 2 * BALCONY_OVERHANG;
                canvas.fill_rect(*x - BALCONY_OVERHANG, *y + CAT_HEIGHT, ledge_w, 4, C_BALCONY);
            }
            let color = if *resting { C_CAT_RESTING } else { C_CAT };
            canvas.fill_rect(*x, *y, CAT_WIDTH, CAT_HEIGHT, color);
            // Ears
            canvas.fill_rect(*x + 3, *y - 5, 6, 5, color);
            canvas.fill_rect(*x + 12, *y - 5, 6, 5, color);
        }
        EntityView::Raccoon { x, y, resting } => {
            let color = if *resting { C_RACCOON_RESTING } else { C_RACCOON };
            canvas.fill_rect(*x, *y, RACCOON_WIDTH, RACCOON_HEIGHT, color);
            canvas.fill_rect(*x + 5, *y + 3, 15, 8, C_MASK);
        }
        EntityView::Heart { x, y } => {
            let (col, row) = (canvas.col_of(*x), canvas.row_of(*y));
            canvas.text(col, row, "♥", C_HEART);
        }
    }
}

fn draw_hud(canvas: &mut Canvas, state: &GameState) {
    canvas.text(1, 0, &format!("Score: {}", state.score), C_HUD);
    canvas.text(1, 1, &format!("Distance: {}m", state.distance_m()), C_HUD);

    let hint = "←→↑↓ / WASD : Move   R : Reset   Q : Quit";
    let last_row = canvas.rows() as i32 - 1;
    canvas.text(1, last_row, hint, C_HINT);
}
