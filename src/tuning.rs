//! Data-driven game balance
//!
//! The constants in `consts` are the defaults; a JSON blob can override
//! any subset of them (used by tests and balance experiments).

use serde::{Deserialize, Serialize};

use crate::consts;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_size: f32,
    pub player_speed: f32,
    pub player_bottom_margin: f32,

    pub missile_w: f32,
    pub missile_h: f32,
    pub missile_speed: f32,

    pub obstacle_min_w: f32,
    pub obstacle_max_w: f32,
    pub obstacle_h: f32,

    pub base_fall_speed: f32,
    pub fall_speed_step: f32,
    pub base_spawn_interval: u64,
    pub spawn_interval_step: u64,
    pub min_spawn_interval: u64,
    pub ramp_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: consts::PLAYER_SIZE,
            player_speed: consts::PLAYER_SPEED,
            player_bottom_margin: consts::PLAYER_BOTTOM_MARGIN,

            missile_w: consts::MISSILE_W,
            missile_h: consts::MISSILE_H,
            missile_speed: consts::MISSILE_SPEED,

            obstacle_min_w: consts::OBSTACLE_MIN_W,
            obstacle_max_w: consts::OBSTACLE_MAX_W,
            obstacle_h: consts::OBSTACLE_H,

            base_fall_speed: consts::BASE_FALL_SPEED,
            fall_speed_step: consts::FALL_SPEED_STEP,
            base_spawn_interval: consts::BASE_SPAWN_INTERVAL,
            spawn_interval_step: consts::SPAWN_INTERVAL_STEP,
            min_spawn_interval: consts::MIN_SPAWN_INTERVAL,
            ramp_interval: consts::RAMP_INTERVAL_TICKS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) override blob; unspecified fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
