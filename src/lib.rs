//! Ninja Brawl - A side-scrolling wave brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (characters, combat, wave progression)
//! - `driver`: Tick driver wiring the simulation to its collaborators
//! - `platform`: Collaborator traits, input mapping, headless implementations
//! - `renderer`: Canvas 2D rendering (wasm32 only)
//! - `audio`: Hit and progression cues (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod driver;
pub mod error;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{GameLoop, GameLoopBuilder, LoopHandle};
pub use error::{GameError, GameResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Character bounding box (pixels)
    pub const CHARACTER_WIDTH: f32 = 64.0;
    pub const CHARACTER_HEIGHT: f32 = 64.0;

    /// Health pools per role
    pub const REGULAR_MAX_HEALTH: i32 = 100;
    pub const BOSS_MAX_HEALTH: i32 = 300;

    /// Damage dealt per landed attack per attacker role
    pub const REGULAR_DAMAGE: i32 = 10;
    pub const BOSS_DAMAGE: i32 = 20;

    /// Attacks land only when |attacker.x - target.x| is strictly below this
    pub const MELEE_RANGE: f32 = 60.0;

    /// Horizontal player movement per tick per held direction
    pub const MOVE_STEP: f32 = 5.0;

    /// Player spawn point
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Enemy spawn formula: x = ENEMY_SPAWN_X + index * ENEMY_SPAWN_SPACING
    pub const ENEMY_SPAWN_X: f32 = 500.0;
    pub const ENEMY_SPAWN_SPACING: f32 = 80.0;
    pub const ENEMY_SPAWN_Y: f32 = 300.0;

    /// Waves per level
    pub const MAX_WAVES: u32 = 3;
    /// Score awarded for each cleared wave
    pub const SCORE_PER_WAVE: u64 = 100;

    /// Animation: frames per strip, ticks per frame
    pub const ANIMATION_FRAMES: u8 = 4;
    pub const ANIMATION_DELAY: u32 = 10;

    /// Touch zones (client x, pixels)
    pub const TOUCH_LEFT_MAX_X: f64 = 80.0;
    pub const TOUCH_RIGHT_MAX_X: f64 = 160.0;
    pub const TOUCH_ATTACK_MIN_X: f64 = 650.0;

    /// On-screen touch buttons
    pub const BUTTON_SIZE: f64 = 60.0;
    pub const BUTTON_LEFT_POS: (f64, f64) = (20.0, 320.0);
    pub const BUTTON_RIGHT_POS: (f64, f64) = (100.0, 320.0);
    pub const BUTTON_ATTACK_POS: (f64, f64) = (700.0, 320.0);
}
