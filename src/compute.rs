/// Game-state controller.
///
/// Owns the START → PLAYING transition and the fixed per-frame update
/// order. Player movement is a pure function returning a new `Player`;
/// the world itself grows without bound, so frame updates mutate the
/// `GameState` in place instead of rebuilding it. All randomness is
/// injected.

use log::info;
use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::entities::{GameState, GameStatus, Player, PLAYER_MAX_Y, PLAYER_MIN_Y, SCREEN_WIDTH};
use crate::input::{Command, HeldKeys};
use crate::worldgen::{self, CHUNK};

/// Left edge of the horizontal dead zone.
pub const DEAD_ZONE_LEFT: i32 = SCREEN_WIDTH / 3;
/// Right edge of the horizontal dead zone.
pub const DEAD_ZONE_RIGHT: i32 = SCREEN_WIDTH * 2 / 3;

/// What the outer loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh street with the first chunk already generated, ready to play.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let mut state = GameState::empty();
    worldgen::generate(&mut state, 0, CHUNK, rng);
    state.frontier = CHUNK;
    state.status = GameStatus::Playing;
    state
}

/// The title screen, with a fresh world waiting behind it.
pub fn new_game(rng: &mut impl Rng) -> GameState {
    GameState { status: GameStatus::Start, ..init_state(rng) }
}

// ── Input-driven transitions ────────────────────────────────────────────────

/// Apply one frame of held directions. Pure: returns the moved player.
///
/// The player walks freely inside the dead zone; pushing past either edge
/// scrolls the world instead. Steps are clamped to the zone edges.
pub fn move_player(player: &Player, keys: &HeldKeys) -> Player {
    let mut p = player.clone();

    if keys.left && p.world_x > 0 {
        if p.x > DEAD_ZONE_LEFT {
            p.x = (p.x - p.speed).max(DEAD_ZONE_LEFT);
        } else {
            p.world_x = (p.world_x - p.speed).max(0);
        }
    }
    if keys.right {
        if p.x < DEAD_ZONE_RIGHT {
            p.x = (p.x + p.speed).min(DEAD_ZONE_RIGHT);
        } else {
            p.world_x += p.speed;
        }
    }
    if keys.up && p.y > PLAYER_MIN_Y {
        p.y -= p.speed;
    }
    if keys.down && p.y < PLAYER_MAX_Y {
        p.y += p.speed;
    }

    p
}

/// Handle an edge-triggered command. Start only works on the title screen,
/// reset only while playing; quit works everywhere.
pub fn handle_command(state: &mut GameState, command: Command, rng: &mut impl Rng) -> Flow {
    match (command, &state.status) {
        (Command::Quit, _) => {
            info!("quit at {}m with score {}", state.distance_m(), state.score);
            return Flow::Quit;
        }
        (Command::Start, GameStatus::Start) => {
            *state = init_state(rng);
            info!("game started");
        }
        (Command::Reset, GameStatus::Playing) => {
            info!("reset at {}m with score {}", state.distance_m(), state.score);
            *state = init_state(rng);
        }
        _ => {}
    }
    Flow::Continue
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame. Does nothing outside PLAYING.
///
/// Order matters: collisions see cooldowns already decremented this frame,
/// and hearts spawned by them are drawn in the same frame.
pub fn tick(state: &mut GameState, keys: &HeldKeys, rng: &mut impl Rng) -> CollisionReport {
    if state.status != GameStatus::Playing {
        return CollisionReport::default();
    }

    // ── 1. Move the player ────────────────────────────────────────────────────
    state.player = move_player(&state.player, keys);

    // ── 2. Keep the street generated ahead ───────────────────────────────────
    worldgen::ensure_ahead(state, rng);

    // ── 3. Cool down critters ────────────────────────────────────────────────
    state.cats.iter_mut().for_each(|c| c.update());
    state.raccoons.iter_mut().for_each(|r| r.update());

    // ── 4. Float hearts away ─────────────────────────────────────────────────
    state.hearts.iter_mut().for_each(|h| h.update());
    state.hearts.retain(|h| !h.is_expired());

    // ── 5. Collisions ────────────────────────────────────────────────────────
    let report = collision::resolve(state);

    state.frame += 1;
    report
}
