//! Rendering: the external surface contract and per-entity draw impls
//!
//! The sim never draws. The shell owns a `Surface` (the host canvas) and
//! hands it here once per frame; entities each know how to put their own
//! rectangle on it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::sim::{GameState, Missile, Obstacle, Player};

pub const PLAYER_COLOR: &str = "#3498db";
pub const MISSILE_COLOR: &str = "#e74c3c";
pub const OBSTACLE_COLOR: &str = "#e74c3c";

/// A host-owned drawing target. The core never manages its lifecycle.
pub trait Surface {
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle in the given CSS color.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);

    /// Position the host-supplied player sprite, if one exists. Returns
    /// false when no sprite is available so the caller can fall back to a
    /// primitive rectangle.
    fn place_sprite(&mut self, _x: f32, _y: f32) -> bool {
        false
    }
}

/// Per-entity draw contract
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Draw for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        if !surface.place_sprite(self.pos.x, self.pos.y) {
            surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y, PLAYER_COLOR);
        }
    }
}

impl Draw for Missile {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            self.pos.x,
            self.pos.y,
            self.size.x,
            self.size.y,
            MISSILE_COLOR,
        );
    }
}

impl Draw for Obstacle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            self.pos.x,
            self.pos.y,
            self.size.x,
            self.size.y,
            OBSTACLE_COLOR,
        );
    }
}

/// Draw one complete frame of the current state.
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear();
    state.player.draw(surface);
    for missile in &state.missiles {
        missile.draw(surface);
    }
    for obstacle in &state.obstacles {
        obstacle.draw(surface);
    }
}
