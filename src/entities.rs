/// All game entity types — plain data plus the small per-frame rules
/// each entity owns (cooldown countdown, heart drift).

// ── Logical screen ────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 1000;
pub const SCREEN_HEIGHT: i32 = 600;

/// Top edge of the sidewalk; buildings stand on this line.
pub const GROUND_Y: i32 = 380;
/// Top edge of the road.
pub const ROAD_Y: i32 = 500;

// ── Entity dimensions ─────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 30;
pub const PLAYER_HEIGHT: i32 = 40;
pub const PLAYER_SPEED: i32 = 5;
pub const PLAYER_START_X: i32 = 100;
pub const PLAYER_START_Y: i32 = 400;
/// The player may step up only while above this row...
pub const PLAYER_MIN_Y: i32 = 300;
/// ...and down only while below this one.
pub const PLAYER_MAX_Y: i32 = 450;

pub const CAT_WIDTH: i32 = 20;
pub const CAT_HEIGHT: i32 = 15;
pub const RACCOON_WIDTH: i32 = 25;
pub const RACCOON_HEIGHT: i32 = 20;
pub const WINDOW_WIDTH: i32 = 20;
pub const WINDOW_HEIGHT: i32 = 25;

/// Frames a heart stays on screen.
pub const HEART_LIFETIME: u32 = 60;
/// Pixels a heart rises each frame.
pub const HEART_RISE: i32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Start,
    Playing,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Position along the infinite street. Never negative.
    pub world_x: i32,
    /// Screen-local position; `x` lives inside the dead-zone band once moving.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            world_x: 0,
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

// ── Scenery ───────────────────────────────────────────────────────────────────

/// A lit window, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub world_x: i32,
    pub width: i32,
    pub height: i32,
    pub windows: Vec<Window>,
}

impl Building {
    /// World y of the roof line.
    pub fn top(&self) -> i32 {
        GROUND_Y - self.height
    }

    /// True when the window rectangle sits strictly inside the facade.
    pub fn contains_window(&self, w: &Window) -> bool {
        w.x > self.world_x
            && w.y > self.top()
            && w.x + WINDOW_WIDTH < self.world_x + self.width
            && w.y + WINDOW_HEIGHT < GROUND_Y
    }
}

// ── Critters ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Cat {
    pub world_x: i32,
    pub y: i32,
    pub on_balcony: bool,
    /// Frames left before this cat can score again.
    pub cooldown: u32,
}

impl Cat {
    pub fn new(world_x: i32, y: i32, on_balcony: bool) -> Self {
        Cat { world_x, y, on_balcony, cooldown: 0 }
    }

    pub fn update(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// A resting cat was petted recently and is drawn in its sleepy variant.
    pub fn is_resting(&self) -> bool {
        self.cooldown > 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Raccoon {
    pub world_x: i32,
    pub y: i32,
    pub cooldown: u32,
}

impl Raccoon {
    pub fn new(world_x: i32, y: i32) -> Self {
        Raccoon { world_x, y, cooldown: 0 }
    }

    pub fn update(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    pub fn is_resting(&self) -> bool {
        self.cooldown > 0
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Floating heart shown after petting a cat. Screen-space, not world-space.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub x: i32,
    pub y: i32,
    pub lifetime: u32,
}

impl Heart {
    pub fn new(x: i32, y: i32) -> Self {
        Heart { x, y, lifetime: HEART_LIFETIME }
    }

    pub fn update(&mut self) {
        self.y -= HEART_RISE;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole simulation context. One value per session; every operation
/// takes it explicitly.
#[derive(Clone, Debug)]
pub struct GameState {
    pub status: GameStatus,
    pub player: Player,
    pub buildings: Vec<Building>,
    pub cats: Vec<Cat>,
    pub raccoons: Vec<Raccoon>,
    pub hearts: Vec<Heart>,
    pub score: u32,
    /// Highest world x that already has content generated for it.
    pub frontier: i32,
    pub frame: u64,
}

impl GameState {
    /// An empty street with nothing generated yet.
    pub fn empty() -> Self {
        GameState {
            status: GameStatus::Start,
            player: Player::default(),
            buildings: Vec::new(),
            cats: Vec::new(),
            raccoons: Vec::new(),
            hearts: Vec::new(),
            score: 0,
            frontier: 0,
            frame: 0,
        }
    }

    /// Distance walked, in "meters" (ten world units each).
    pub fn distance_m(&self) -> i32 {
        self.player.world_x / 10
    }
}
