//! Game state and core simulation types
//!
//! Everything a session needs to replay deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first session starts
    Idle,
    /// Session active, ticking every frame
    Running,
    /// Session frozen, waiting for resume
    Paused,
    /// Session ended by a fatal collision
    Over,
}

/// Something the shell should surface to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score changed; carries the new total
    ScoreChanged(u32),
    /// Fatal collision; carries the final score
    GameOver { score: u32 },
}

/// The player's sprite
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick
    pub speed: f32,
    /// Held-key intents, folded in from input each tick
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Player {
    /// Spawn centered horizontally, resting just above the bottom edge.
    pub fn new(tuning: &Tuning, surface_w: f32, surface_h: f32) -> Self {
        let size = Vec2::splat(tuning.player_size);
        Self {
            pos: Vec2::new(
                surface_w / 2.0 - size.x / 2.0,
                surface_h - size.y - tuning.player_bottom_margin,
            ),
            size,
            speed: tuning.player_speed,
            moving_left: false,
            moving_right: false,
        }
    }

    /// Apply held intents, clamped so the sprite stays on the surface.
    pub fn update(&mut self, surface_w: f32) {
        if self.moving_left {
            self.pos.x -= self.speed;
        }
        if self.moving_right {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, surface_w - self.size.x);
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// An upward-travelling missile
#[derive(Debug, Clone)]
pub struct Missile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical pixels per tick, applied upward
    pub speed: f32,
}

impl Missile {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.missile_w, tuning.missile_h),
            speed: tuning.missile_speed,
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.speed;
    }

    /// True once the missile is fully above the top bound.
    pub fn past_top(&self) -> bool {
        self.pos.y + self.size.y < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A falling obstacle. Width is rolled once at spawn; the fall speed is the
/// difficulty's current value, read at update time rather than cached.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn update(&mut self, fall_speed: f32) {
        self.pos.y += fall_speed;
    }

    /// True once the top edge has passed the bottom bound.
    pub fn past_bottom(&self, surface_h: f32) -> bool {
        self.pos.y > surface_h
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Shared difficulty state, read by the spawner and obstacle updates
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Downward pixels per tick for every live obstacle
    pub fall_speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u64,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            fall_speed: tuning.base_fall_speed,
            spawn_interval: tuning.base_spawn_interval,
        }
    }

    /// One ramp step: faster falls, shorter spawn gaps, floored so the
    /// spawn rate never runs away.
    pub fn ramp(&mut self, tuning: &Tuning) {
        self.fall_speed += tuning.fall_speed_step;
        self.spawn_interval = self
            .spawn_interval
            .saturating_sub(tuning.spawn_interval_step)
            .max(tuning.min_spawn_interval);
    }
}

/// Complete session state (deterministic under a fixed seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the current session
    pub seed: u64,
    /// Session RNG (obstacle widths and positions)
    pub rng: Pcg32,
    /// Surface dimensions the session was bound to
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    /// Ticks since session start
    pub time_ticks: u64,
    pub score: u32,
    pub difficulty: Difficulty,
    pub player: Player,
    pub missiles: Vec<Missile>,
    pub obstacles: Vec<Obstacle>,
    /// Pending events, drained by the shell after each tick
    pub events: Vec<GameEvent>,
    pub tuning: Tuning,
}

impl GameState {
    /// Create an idle state bound to the given surface size.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_tuning(width, height, Tuning::default())
    }

    pub fn with_tuning(width: f32, height: f32, tuning: Tuning) -> Self {
        Self {
            seed: 0,
            rng: Pcg32::seed_from_u64(0),
            width,
            height,
            phase: GamePhase::Idle,
            time_ticks: 0,
            score: 0,
            difficulty: Difficulty::new(&tuning),
            player: Player::new(&tuning, width, height),
            missiles: Vec::new(),
            obstacles: Vec::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Start (or restart) a session: every piece of session state resets.
    /// At most one session is ever live; calling this again replaces it.
    pub fn start(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.time_ticks = 0;
        self.score = 0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.player = Player::new(&self.tuning, self.width, self.height);
        self.missiles.clear();
        self.obstacles.clear();
        self.events.clear();
        self.phase = GamePhase::Running;
    }

    /// Hand pending events to the shell.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
