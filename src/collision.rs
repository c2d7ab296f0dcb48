/// Player ↔ critter overlap tests and their scoring effects.

use log::debug;

use crate::camera::to_screen;
use crate::entities::{
    GameState, Heart, Player, CAT_HEIGHT, CAT_WIDTH, RACCOON_HEIGHT, RACCOON_WIDTH,
};

/// Frames a critter ignores the player after being touched (2 s at 60 FPS).
pub const HIT_COOLDOWN: u32 = 120;
pub const CAT_POINTS: u32 = 10;
pub const RACCOON_PENALTY: u32 = 5;
/// The player's screen x starts at 100; subtracting it maps the hitbox
/// back onto the street.
pub const HITBOX_SHIFT: i32 = 100;

/// Axis-aligned rectangle, half-open on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Shared edges do not count, and an empty rect never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

pub fn player_hitbox(player: &Player) -> Rect {
    Rect::new(
        player.world_x + player.x - HITBOX_SHIFT,
        player.y,
        player.width,
        player.height,
    )
}

/// What one collision pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionReport {
    pub cats: u32,
    pub raccoons: u32,
}

/// Resolve every overlap for this frame. Critters still cooling down are
/// skipped; all other hits apply independently.
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let hitbox = player_hitbox(&state.player);
    let camera_x = state.player.world_x;
    let mut report = CollisionReport::default();

    for cat in state.cats.iter_mut().filter(|c| c.cooldown == 0) {
        let rect = Rect::new(cat.world_x, cat.y, CAT_WIDTH, CAT_HEIGHT);
        if hitbox.overlaps(&rect) {
            cat.cooldown = HIT_COOLDOWN;
            state.score += CAT_POINTS;
            state
                .hearts
                .push(Heart::new(to_screen(cat.world_x, camera_x) + CAT_WIDTH / 2, cat.y - 10));
            report.cats += 1;
            debug!("cat at {} petted, score {}", cat.world_x, state.score);
        }
    }

    for raccoon in state.raccoons.iter_mut().filter(|r| r.cooldown == 0) {
        let rect = Rect::new(raccoon.world_x, raccoon.y, RACCOON_WIDTH, RACCOON_HEIGHT);
        if hitbox.overlaps(&rect) {
            raccoon.cooldown = HIT_COOLDOWN;
            state.score = state.score.saturating_sub(RACCOON_PENALTY);
            report.raccoons += 1;
            debug!("raccoon at {} hit, score {}", raccoon.world_x, state.score);
        }
    }

    report
}
