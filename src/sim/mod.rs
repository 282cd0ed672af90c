//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame
//! - Seeded RNG only
//! - Stable iteration order (collection index order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use state::{Difficulty, GameEvent, GamePhase, GameState, Missile, Obstacle, Player};
pub use tick::{TickInput, tick};
