//! Per-frame simulation tick
//!
//! Core game loop that advances one session deterministically: player
//! intents, obstacle spawning, the difficulty ramp, missile and obstacle
//! passes, and the game-over transition.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use super::state::{GameEvent, GamePhase, GameState, Missile, Obstacle};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Fire a missile (one-shot, cleared by the shell after the tick)
    pub fire: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Advance the session by one frame.
///
/// Ticks are complete no-ops outside the Running phase, so a stale caller
/// can never mutate a finished or paused session.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    // 1. Fold held intents into the player and move it.
    state.player.moving_left = input.left;
    state.player.moving_right = input.right;
    state.player.update(state.width);

    // 2. Spawner, then ramp. The spawn check at a ramp boundary still sees
    //    the pre-ramp interval.
    state.time_ticks += 1;
    if state.time_ticks % state.difficulty.spawn_interval == 0 {
        spawn_obstacle(state);
    }
    if state.time_ticks % state.tuning.ramp_interval == 0 {
        state.difficulty.ramp(&state.tuning);
    }

    // 3. Fire command: one missile at the player's horizontal center.
    if input.fire {
        let pos = Vec2::new(
            state.player.center_x() - state.tuning.missile_w / 2.0,
            state.player.pos.y,
        );
        state.missiles.push(Missile::new(pos, &state.tuning));
    }

    // 4. Missile pass. Explicit index walk so removals neither skip nor
    //    double-process the elements that follow.
    let mut i = 0;
    while i < state.missiles.len() {
        state.missiles[i].update();

        if state.missiles[i].past_top() {
            state.missiles.remove(i);
            continue;
        }

        // First overlapping obstacle in index order wins the tie-break.
        let bounds = state.missiles[i].bounds();
        if let Some(j) = state
            .obstacles
            .iter()
            .position(|o| overlaps(&bounds, &o.bounds()))
        {
            state.obstacles.remove(j);
            state.missiles.remove(i);
            state.score += 1;
            state.events.push(GameEvent::ScoreChanged(state.score));
            continue;
        }

        i += 1;
    }

    // 5. Obstacle pass. A player hit ends the session immediately; the
    //    rest of the pass does not run for this tick.
    let player_bounds = state.player.bounds();
    let fall_speed = state.difficulty.fall_speed;
    let mut i = 0;
    while i < state.obstacles.len() {
        state.obstacles[i].update(fall_speed);

        if overlaps(&player_bounds, &state.obstacles[i].bounds()) {
            state.phase = GamePhase::Over;
            state.events.push(GameEvent::GameOver { score: state.score });
            return;
        }

        if state.obstacles[i].past_bottom(state.height) {
            state.obstacles.remove(i);
            continue;
        }

        i += 1;
    }
}

/// Append one obstacle with a random width in [min, max) and a random
/// horizontal position that keeps it fully inside the surface.
fn spawn_obstacle(state: &mut GameState) {
    let w = state
        .rng
        .random_range(state.tuning.obstacle_min_w..state.tuning.obstacle_max_w);
    let x = state.rng.random_range(0.0..(state.width - w));
    state.obstacles.push(Obstacle {
        pos: Vec2::new(x, -state.tuning.obstacle_h),
        size: Vec2::new(w, state.tuning.obstacle_h),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SURFACE_H, SURFACE_W};
    use crate::tuning::Tuning;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(SURFACE_W, SURFACE_H);
        state.start(seed);
        state
    }

    #[test]
    fn idle_ticks_are_noops() {
        let mut state = GameState::new(SURFACE_W, SURFACE_H);
        let input = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.time_ticks, 0);
        assert!(state.missiles.is_empty());
    }

    #[test]
    fn start_resets_session() {
        let mut state = running_state(7);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..150 {
            tick(&mut state, &input);
        }
        assert!(state.time_ticks > 0);
        assert!(!state.missiles.is_empty());

        state.start(8);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.missiles.is_empty());
        assert!(state.obstacles.is_empty());
        assert!(state.take_events().is_empty());
        assert_eq!(state.difficulty.fall_speed, state.tuning.base_fall_speed);
        assert_eq!(
            state.difficulty.spawn_interval,
            state.tuning.base_spawn_interval
        );
    }

    #[test]
    fn first_obstacle_spawns_at_interval() {
        let mut state = running_state(42);
        let input = TickInput::default();
        for _ in 0..99 {
            tick(&mut state, &input);
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &input);
        assert_eq!(state.obstacles.len(), 1);
        let o = &state.obstacles[0];
        assert!(o.size.x >= state.tuning.obstacle_min_w);
        assert!(o.size.x < state.tuning.obstacle_max_w);
        assert!(o.pos.x >= 0.0);
        assert!(o.pos.x + o.size.x <= SURFACE_W);
    }

    #[test]
    fn spawn_cadence_accumulates() {
        // 250 ticks: spawns at 100 and 200, nothing near the player yet.
        let mut state = running_state(42);
        let input = TickInput::default();
        for _ in 0..250 {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn ramp_applies_every_thousand_ticks() {
        let mut state = running_state(1);
        state.time_ticks = 999;
        tick(&mut state, &TickInput::default());

        assert_eq!(state.time_ticks, 1000);
        assert!((state.difficulty.fall_speed - 3.5).abs() < f32::EPSILON);
        assert_eq!(state.difficulty.spawn_interval, 95);
        // the tick-1000 spawn check ran against the pre-ramp interval
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn tuning_drives_spawn_interval() {
        let tuning = Tuning {
            base_spawn_interval: 10,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(SURFACE_W, SURFACE_H, tuning);
        state.start(2);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn fire_spawns_missile_at_player_center() {
        let mut state = running_state(9);
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(state.missiles.len(), 1);
        let m = &state.missiles[0];
        assert!((m.pos.x + m.size.x / 2.0 - state.player.center_x()).abs() < f32::EPSILON);
    }

    #[test]
    fn missile_hit_removes_both_and_scores() {
        let mut state = running_state(3);
        state
            .missiles
            .push(Missile::new(Vec2::new(100.0, 300.0), &state.tuning));
        state.obstacles.push(Obstacle {
            pos: Vec2::new(80.0, 285.0),
            size: Vec2::new(60.0, 20.0),
        });

        tick(&mut state, &TickInput::default());

        assert!(state.missiles.is_empty());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 1);
        assert!(state.take_events().contains(&GameEvent::ScoreChanged(1)));
    }

    #[test]
    fn first_index_obstacle_wins_tiebreak() {
        let mut state = running_state(3);
        state
            .missiles
            .push(Missile::new(Vec2::new(100.0, 300.0), &state.tuning));
        // both overlap the missile after its update
        state.obstacles.push(Obstacle {
            pos: Vec2::new(60.0, 285.0),
            size: Vec2::new(80.0, 20.0),
        });
        state.obstacles.push(Obstacle {
            pos: Vec2::new(90.0, 285.0),
            size: Vec2::new(80.0, 20.0),
        });

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 90.0);
    }

    #[test]
    fn removal_does_not_skip_following_missiles() {
        let mut state = running_state(3);
        // the first missile leaves through the top this tick, the second hits
        state
            .missiles
            .push(Missile::new(Vec2::new(10.0, -15.0), &state.tuning));
        state
            .missiles
            .push(Missile::new(Vec2::new(100.0, 300.0), &state.tuning));
        state.obstacles.push(Obstacle {
            pos: Vec2::new(80.0, 285.0),
            size: Vec2::new(60.0, 20.0),
        });

        tick(&mut state, &TickInput::default());

        assert!(state.missiles.is_empty());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn player_hit_ends_session_and_halts() {
        let mut state = running_state(5);
        let p = state.player.pos;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(p.x, p.y - 10.0),
            size: Vec2::new(40.0, 20.0),
        });

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::GameOver { score: 0 })
        );

        // Over is terminal: further ticks change nothing
        let ticks = state.time_ticks;
        let obstacle_y = state.obstacles[0].pos.y;
        tick(
            &mut state,
            &TickInput {
                left: true,
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.missiles.is_empty());
        assert_eq!(state.obstacles[0].pos.y, obstacle_y);
    }

    #[test]
    fn fatal_collision_terminates_tick_early() {
        let mut state = running_state(5);
        let p = state.player.pos;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(p.x, p.y - 10.0),
            size: Vec2::new(40.0, 20.0),
        });
        state.obstacles.push(Obstacle {
            pos: Vec2::new(0.0, 100.0),
            size: Vec2::new(30.0, 20.0),
        });

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Over);
        // the second obstacle was never updated this tick
        assert_eq!(state.obstacles[1].pos.y, 100.0);
    }

    #[test]
    fn pause_freezes_and_resumes() {
        let mut state = running_state(11);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time_ticks, ticks + 1);
    }

    #[test]
    fn identical_seeds_stay_in_lockstep() {
        let mut a = running_state(0xfeed);
        let mut b = running_state(0xfeed);

        for t in 0..400u64 {
            let input = TickInput {
                right: t % 3 == 0,
                fire: t % 50 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.player.pos.x, b.player.pos.x);
    }
}
