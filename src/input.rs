//! Keyboard mapping and intent tracking
//!
//! Folds host key-down/key-up events into the persistent `TickInput` the
//! sim consumes each frame. Held directional keys become intents; fire and
//! pause are one-shot edges.

use crate::sim::TickInput;

/// A player command a key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Pause,
}

/// Map a host key identifier to a command. Covers both the modern and the
/// legacy (IE-era) names the key event may carry.
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" | "Left" => Some(Command::MoveLeft),
        "ArrowRight" | "Right" => Some(Command::MoveRight),
        " " | "Spacebar" => Some(Command::Fire),
        "Escape" => Some(Command::Pause),
        _ => None,
    }
}

/// Tracks keyboard state across frames.
#[derive(Debug, Default)]
pub struct InputState {
    pub current: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        match command_for_key(key) {
            Some(Command::MoveLeft) => self.current.left = true,
            Some(Command::MoveRight) => self.current.right = true,
            Some(Command::Fire) => self.current.fire = true,
            Some(Command::Pause) => self.current.pause = true,
            None => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match command_for_key(key) {
            Some(Command::MoveLeft) => self.current.left = false,
            Some(Command::MoveRight) => self.current.right = false,
            // fire and pause are edges, not held state
            _ => {}
        }
    }

    /// Clear one-shot commands once a tick has consumed them.
    pub fn end_tick(&mut self) {
        self.current.fire = false;
        self.current.pause = false;
    }
}
