//! Crossy RPG - a tile-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, round state)
//! - `session`: Outer loop that raises the difficulty after each win
//! - `render`: Scene composition and the frame presentation boundary
//! - `platform`: Tick pacing and keyboard event translation
//! - `settings`: Tuning and preferences

pub mod platform;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{SessionDriver, SessionSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible play area in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;
    pub const SCREEN_TITLE: &str = "Crossy RPG";

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Player vertical speed (tiles per tick)
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Patrol horizontal speed before level scaling (tiles per tick)
    pub const PATROL_BASE_SPEED: f32 = 5.0;

    /// Every moving sprite and the treasure are 50x50
    pub const SPRITE_SIZE: f32 = 50.0;

    /// The player may not sink past `floor_bound - FLOOR_MARGIN`
    pub const FLOOR_MARGIN: f32 = 20.0;
    /// Patrols head right once at or past this x
    pub const PATROL_LEFT_BOUND: f32 = 5.0;
    /// Patrols head left once within this margin of the right bound
    pub const PATROL_RIGHT_MARGIN: f32 = 50.0;

    /// Spawn positions (top-left corners)
    pub const PLAYER_START: (f32, f32) = (375.0, 700.0);
    pub const TREASURE_POS: (f32, f32) = (375.0, 50.0);
    pub const ENEMY_SPAWNS: [(f32, f32); 3] = [
        (20.0, 550.0),
        (SCREEN_WIDTH - 50.0, 400.0),
        (20.0, 200.0),
    ];

    /// Full enemy roster size; how many actually move is gated by level
    pub const ENEMY_ROSTER: usize = 3;

    /// Where the win/lose overlay is drawn
    pub const BANNER_POS: (f32, f32) = (300.0, 350.0);
    /// How long the outcome banner stays up before the round exits (1 second)
    pub const OUTCOME_HOLD_TICKS: u32 = TICK_RATE;

    /// Difficulty added after every win
    pub const LEVEL_STEP: f32 = 0.5;
}
