//! Memory Invaders - an arcade shooter with falling teddy bears
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `renderer`: macroquad drawing of sprites, HUD and overlays
//! - `ui`: Overlay layout and restart intent
//! - `audio`: Music loop and sound effects
//! - `assets`: Asset lookup and preloading
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{GameError, Result};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one gameplay frame per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas size
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Distance of the player's starting row from the bottom edge
    pub const PLAYER_START_INSET: f32 = 80.0;

    /// Enemy sprite size (square)
    pub const ENEMY_SIZE: f32 = 64.0;
    /// Vertical spawn band for enemies (inclusive)
    pub const ENEMY_SPAWN_MIN_Y: i32 = 50;
    pub const ENEMY_SPAWN_MAX_Y: i32 = 150;
    /// Enemies at or below this line end the run
    pub const ENEMY_LOSS_INSET: f32 = 60.0;

    /// Bullet sprite size
    pub const BULLET_WIDTH: f32 = 20.0;
    pub const BULLET_HEIGHT: f32 = 30.0;
    /// Horizontal offset of a new bullet from the player's left edge
    pub const BULLET_OFFSET_X: f32 = (PLAYER_WIDTH - BULLET_WIDTH) / 2.0;

    /// Heart particle sprite size (square)
    pub const PARTICLE_SIZE: f32 = 20.0;
    /// Explosion origin offset from the enemy's top-left corner
    pub const EXPLOSION_OFFSET: f32 = 16.0;
}

/// RGB colors shared by the UI layout and the renderer
pub mod palette {
    pub type Rgb = [u8; 3];

    pub const WHITE: Rgb = [255, 255, 255];
    pub const BLACK: Rgb = [0, 0, 0];
    pub const PINK: Rgb = [255, 153, 204];
    pub const RED: Rgb = [255, 102, 102];
    pub const GRAY: Rgb = [200, 200, 200];
    pub const DARK_GRAY: Rgb = [50, 50, 50];
}
