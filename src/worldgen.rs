/// Infinite street generator.
///
/// Content is produced in fixed chunks ahead of the player and only ever
/// appended. All randomness comes through the injected RNG so a seeded
/// generator reproduces the same street.

use log::info;
use rand::Rng;

use crate::entities::{Building, Cat, GameState, Raccoon, Window, GROUND_Y, WINDOW_HEIGHT, WINDOW_WIDTH};

// ── Generation tables ─────────────────────────────────────────────────────────

pub const CHUNK: i32 = 2000;
/// Content must exist at least this far past the player.
pub const LOOKAHEAD: i32 = 1000;

const BUILDING_WIDTH: (i32, i32) = (100, 200);
const BUILDING_HEIGHT: (i32, i32) = (150, 250);
const BUILDING_GAP: (i32, i32) = (20, 50);

const WINDOW_LIT_CHANCE: f64 = 0.7;
const WINDOW_ROW_PITCH: i32 = 60;
const WINDOW_COL_PITCH: i32 = 45;
const WINDOW_INSET_X: i32 = 15;
const WINDOW_INSET_Y: i32 = 20;
const WINDOW_STEP_X: i32 = 40;
const WINDOW_STEP_Y: i32 = 50;
/// Clearance kept between a window and the facade's right and bottom edges.
const WINDOW_MARGIN: i32 = 15;

/// Critters are rolled once per step of this many world units.
pub const SPAWN_STEP: i32 = 100;
/// Max offset of a critter inside its step.
pub const SPAWN_JITTER: i32 = 80;

const SIDEWALK_CAT_CHANCE: f64 = 0.3;
const SIDEWALK_CAT_Y: (i32, i32) = (420, 470);
const BALCONY_CAT_CHANCE: f64 = 0.2;
const BALCONY_CAT_Y: (i32, i32) = (250, 320);
const RACCOON_CHANCE: f64 = 0.15;
const RACCOON_Y: (i32, i32) = (410, 460);

// ── Buildings ─────────────────────────────────────────────────────────────────

/// Build one facade at `world_x` and roll its window grid.
///
/// Rows follow the height (one per 60 px) and columns follow the width
/// (one per 45 px). Any window that would crowd the facade edge is dropped.
pub fn make_building(world_x: i32, width: i32, height: i32, rng: &mut impl Rng) -> Building {
    let top = GROUND_Y - height;
    let rows = (height / WINDOW_ROW_PITCH).max(1);
    let cols = (width / WINDOW_COL_PITCH).max(1);

    let mut windows = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if !rng.gen_bool(WINDOW_LIT_CHANCE) {
                continue;
            }
            let x = world_x + WINDOW_INSET_X + col * WINDOW_STEP_X;
            let y = top + WINDOW_INSET_Y + row * WINDOW_STEP_Y;
            if x + WINDOW_WIDTH < world_x + width - WINDOW_MARGIN
                && y + WINDOW_HEIGHT < top + height - WINDOW_MARGIN
            {
                windows.push(Window { x, y });
            }
        }
    }

    Building { world_x, width, height, windows }
}

fn gen_buildings(start: i32, end: i32, rng: &mut impl Rng) -> Vec<Building> {
    let mut buildings = Vec::new();
    let mut cursor = start;
    while cursor < end {
        let width = rng.gen_range(BUILDING_WIDTH.0..=BUILDING_WIDTH.1);
        let height = rng.gen_range(BUILDING_HEIGHT.0..=BUILDING_HEIGHT.1);
        buildings.push(make_building(cursor, width, height, rng));
        cursor += width + rng.gen_range(BUILDING_GAP.0..=BUILDING_GAP.1);
    }
    buildings
}

// ── Critters ──────────────────────────────────────────────────────────────────

fn gen_critters(start: i32, end: i32, rng: &mut impl Rng) -> (Vec<Cat>, Vec<Raccoon>) {
    let mut cats = Vec::new();
    let mut raccoons = Vec::new();

    // Three independent rolls per step: any subset may spawn together.
    for step in (start..end).step_by(SPAWN_STEP as usize) {
        if rng.gen_bool(SIDEWALK_CAT_CHANCE) {
            let y = rng.gen_range(SIDEWALK_CAT_Y.0..=SIDEWALK_CAT_Y.1);
            cats.push(Cat::new(step + rng.gen_range(0..=SPAWN_JITTER), y, false));
        }
        if rng.gen_bool(BALCONY_CAT_CHANCE) {
            let y = rng.gen_range(BALCONY_CAT_Y.0..=BALCONY_CAT_Y.1);
            cats.push(Cat::new(step + rng.gen_range(0..=SPAWN_JITTER), y, true));
        }
        if rng.gen_bool(RACCOON_CHANCE) {
            let y = rng.gen_range(RACCOON_Y.0..=RACCOON_Y.1);
            raccoons.push(Raccoon::new(step + rng.gen_range(0..=SPAWN_JITTER), y));
        }
    }

    (cats, raccoons)
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Append buildings, cats and raccoons for the half-open range `[start, end)`.
///
/// Callers must not pass a range that overlaps one already generated.
pub fn generate(state: &mut GameState, start: i32, end: i32, rng: &mut impl Rng) {
    let buildings = gen_buildings(start, end, rng);
    let (cats, raccoons) = gen_critters(start, end, rng);

    info!(
        "generated [{}, {}): {} buildings, {} cats, {} raccoons",
        start,
        end,
        buildings.len(),
        cats.len(),
        raccoons.len()
    );

    state.buildings.extend(buildings);
    state.cats.extend(cats);
    state.raccoons.extend(raccoons);
}

/// Generate the next chunk once the player gets within `LOOKAHEAD` of the
/// frontier. Returns true when a chunk was produced.
pub fn ensure_ahead(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.player.world_x <= state.frontier - LOOKAHEAD {
        return false;
    }
    let start = state.frontier;
    generate(state, start, start + CHUNK, rng);
    state.frontier += CHUNK;
    true
}
