//! Sky Dodge - a falling-block dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: External surface contract and Canvas 2D backend
//! - `input`: Keyboard mapping and intent tracking
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default play field size (matches the host canvas element)
    pub const SURFACE_W: f32 = 450.0;
    pub const SURFACE_H: f32 = 700.0;

    /// Player defaults - a square sprite resting near the bottom edge
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Missile defaults
    pub const MISSILE_W: f32 = 10.0;
    pub const MISSILE_H: f32 = 20.0;
    pub const MISSILE_SPEED: f32 = 7.0;

    /// Obstacle defaults - width is rolled per spawn from [min, max)
    pub const OBSTACLE_MIN_W: f32 = 20.0;
    pub const OBSTACLE_MAX_W: f32 = 100.0;
    pub const OBSTACLE_H: f32 = 20.0;

    /// Difficulty ramp schedule
    pub const BASE_FALL_SPEED: f32 = 3.0;
    pub const FALL_SPEED_STEP: f32 = 0.5;
    pub const BASE_SPAWN_INTERVAL: u64 = 100;
    pub const SPAWN_INTERVAL_STEP: u64 = 5;
    pub const MIN_SPAWN_INTERVAL: u64 = 30;
    pub const RAMP_INTERVAL_TICKS: u64 = 1000;
}
