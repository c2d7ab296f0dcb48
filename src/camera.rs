/// World → screen mapping and draw culling.
///
/// The camera is locked to the player's world position. Culling here only
/// decides what the renderer draws; off-screen entities keep updating and
/// colliding as usual.

use crate::entities::{
    GameState, Player, Window, CAT_WIDTH, RACCOON_WIDTH, SCREEN_WIDTH, WINDOW_WIDTH,
};

/// Pop-in margin for critters and windows.
pub const ENTITY_MARGIN: i32 = 50;
/// Buildings are wide, so they get a larger margin.
pub const BUILDING_MARGIN: i32 = 100;
/// Spacing of the dashed road line.
pub const ROAD_DASH_PERIOD: i32 = 60;

pub fn to_screen(world_x: i32, camera_x: i32) -> i32 {
    world_x - camera_x
}

/// True when `[screen_x, screen_x + width)` touches the closed band
/// `[-margin, SCREEN_WIDTH + margin]`: something starting exactly on the
/// right bound is still drawn.
pub fn is_on_screen(screen_x: i32, width: i32, margin: i32) -> bool {
    screen_x + width > -margin && screen_x <= SCREEN_WIDTH + margin
}

/// Horizontal shift of the road dashes so they scroll with the street.
pub fn road_line_offset(camera_x: i32) -> i32 {
    camera_x.rem_euclid(ROAD_DASH_PERIOD)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub x: i32,
}

impl Camera {
    pub fn follow(player: &Player) -> Self {
        Camera { x: player.world_x }
    }

    pub fn to_screen(&self, world_x: i32) -> i32 {
        to_screen(world_x, self.x)
    }
}

// ── Render view ───────────────────────────────────────────────────────────────

/// One drawable thing in screen coordinates. The renderer matches on the
/// variant; nothing here knows how it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityView {
    Building {
        x: i32,
        top: i32,
        width: i32,
        height: i32,
        /// Window positions already mapped to screen x.
        windows: Vec<Window>,
    },
    Cat { x: i32, y: i32, on_balcony: bool, resting: bool },
    Raccoon { x: i32, y: i32, resting: bool },
    Heart { x: i32, y: i32 },
}

/// Everything the renderer should draw this frame, back to front:
/// buildings, cats, raccoons, hearts.
pub fn visible_entities(state: &GameState) -> Vec<EntityView> {
    let camera = Camera::follow(&state.player);
    let mut views = Vec::new();

    for b in &state.buildings {
        let x = camera.to_screen(b.world_x);
        if !is_on_screen(x, b.width, BUILDING_MARGIN) {
            continue;
        }
        let windows = b
            .windows
            .iter()
            .map(|w| Window { x: camera.to_screen(w.x), y: w.y })
            .filter(|w| is_on_screen(w.x, WINDOW_WIDTH, ENTITY_MARGIN))
            .collect();
        views.push(EntityView::Building {
            x,
            top: b.top(),
            width: b.width,
            height: b.height,
            windows,
        });
    }

    for cat in &state.cats {
        let x = camera.to_screen(cat.world_x);
        if is_on_screen(x, CAT_WIDTH, ENTITY_MARGIN) {
            views.push(EntityView::Cat {
                x,
                y: cat.y,
                on_balcony: cat.on_balcony,
                resting: cat.is_resting(),
            });
        }
    }

    for raccoon in &state.raccoons {
        let x = camera.to_screen(raccoon.world_x);
        if is_on_screen(x, RACCOON_WIDTH, ENTITY_MARGIN) {
            views.push(EntityView::Raccoon { x, y: raccoon.y, resting: raccoon.is_resting() });
        }
    }

    // Hearts are already in screen space.
    for heart in &state.hearts {
        views.push(EntityView::Heart { x: heart.x, y: heart.y });
    }

    views
}
