//! Per-tick pipeline and game state machine
//!
//! Commands arrive as flags on [`TickInput`]; only `Running` executes the
//! track/physics/collision pipeline. Collision is terminal: the phase moves
//! to `Over` and stays there until the host rebuilds the state. The host
//! scheduler keeps requesting ticks until `Over`, then stops.

use super::collision;
use super::physics;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin the run without an impulse; hosts usually fold this into the
    /// first jump instead
    pub start: bool,
    /// Jump impulse; also starts a new game or resumes a paused one
    pub jump: bool,
    /// Pause toggle; ignored before the first start and after game over
    pub pause: bool,
}

/// Advance the game by one frame, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // one-way, one-time transition
    if input.start && state.phase == GamePhase::NotStarted {
        state.phase = GamePhase::Running;
    }

    if input.jump {
        // a jump before the start or while paused first (re)enters Running
        match state.phase {
            GamePhase::NotStarted | GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::Running | GamePhase::Over => {}
        }
        if state.phase == GamePhase::Running {
            physics::jump(&mut state.entity, &state.config);
        }
    }

    if input.pause {
        match state.phase {
            GamePhase::Running => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::NotStarted | GamePhase::Over => {}
        }
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.ticks += 1;

    state
        .track
        .advance(&state.config, &mut state.gap_level, &mut state.rng);
    physics::integrate(&mut state.entity, &state.config);

    let eval = collision::evaluate(
        &state.entity,
        &state.track,
        state.next_obstacle_id,
        &state.config,
    );

    if eval.scored {
        // the score only ever advances by one
        debug_assert_eq!(eval.next_obstacle_id, state.next_obstacle_id + 1);
        state.next_obstacle_id = eval.next_obstacle_id;
        log::debug!("crossed; next obstacle {}", state.next_obstacle_id);
        if state.next_obstacle_id == 2 {
            events.push(GameEvent::FirstObstacleCleared);
        }
    }

    // collision is terminal; a score earned this same tick is kept
    if eval.collided {
        state.phase = GamePhase::Over;
        let final_score = state.score();
        log::info!("game over at score {final_score}");
        events.push(GameEvent::GameOver { final_score });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    const START: TickInput = TickInput {
        start: true,
        jump: false,
        pause: false,
    };
    const JUMP: TickInput = TickInput {
        start: false,
        jump: true,
        pause: false,
    };
    const PAUSE: TickInput = TickInput {
        start: false,
        jump: false,
        pause: true,
    };

    /// A gap tall enough that a hovering entity never hits a barrier
    fn open_cfg() -> SimConfig {
        SimConfig {
            arena_height: 400.0,
            gap_height: 300.0,
            safe_zone_top: 50.0,
            safe_zone_bottom: 50.0,
            ..SimConfig::default()
        }
    }

    /// Bang-bang hover: jump when sinking below the midline
    fn hover_input(state: &GameState) -> TickInput {
        TickInput {
            jump: state.entity.y > 200.0 && state.entity.vel > 0.0,
            ..TickInput::default()
        }
    }

    #[test]
    fn nothing_moves_before_the_first_jump() {
        let mut state = GameState::new(SimConfig::default(), 1);
        for _ in 0..10 {
            assert!(tick(&mut state, &TickInput::default()).is_empty());
        }
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.entity.y, state.config.entity_start_y);
        assert!(state.track.is_empty());
    }

    #[test]
    fn a_bare_start_enters_running_in_free_fall() {
        let mut state = GameState::new(SimConfig::default(), 1);
        tick(&mut state, &START);
        assert_eq!(state.phase, GamePhase::Running);
        // no impulse: gravity alone acts on the first tick
        assert_eq!(state.entity.vel, state.config.down_force);

        // start is one-way and one-time: it neither pauses nor resumes
        tick(&mut state, &PAUSE);
        tick(&mut state, &START);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn the_first_jump_starts_and_applies_the_impulse() {
        let mut state = GameState::new(SimConfig::default(), 1);
        tick(&mut state, &JUMP);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ticks, 1);
        // the impulse is integrated on the same tick it starts the game
        let expected = -state.config.jump_force + state.config.down_force;
        assert!((state.entity.vel - expected).abs() < 1e-5);
    }

    #[test]
    fn pause_is_ignored_before_start_and_after_game_over() {
        let mut state = GameState::new(SimConfig::default(), 1);
        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::NotStarted);

        state.phase = GamePhase::Over;
        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn pause_freezes_and_resume_restores() {
        let mut state = GameState::new(open_cfg(), 1);
        tick(&mut state, &JUMP);
        for _ in 0..20 {
            let input = hover_input(&state);
            tick(&mut state, &input);
        }

        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen = state.entity;
        let ticks = state.ticks;
        let scroll = state.track.scroll();
        for _ in 0..30 {
            assert!(tick(&mut state, &TickInput::default()).is_empty());
        }
        assert_eq!(state.entity, frozen);
        assert_eq!(state.ticks, ticks);
        assert_eq!(state.track.scroll(), scroll);

        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ticks, ticks + 1);
    }

    #[test]
    fn jump_while_paused_resumes_and_jumps() {
        let mut state = GameState::new(open_cfg(), 1);
        tick(&mut state, &JUMP);
        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &JUMP);
        assert_eq!(state.phase, GamePhase::Running);
        let expected = -state.config.jump_force + state.config.down_force;
        assert!((state.entity.vel - expected).abs() < 1e-5);
    }

    #[test]
    fn free_fall_ends_on_the_floor_with_a_game_over_event() {
        let mut state = GameState::new(SimConfig::default(), 1);
        let mut game_overs = 0;
        tick(&mut state, &JUMP);
        for _ in 0..2_000 {
            for event in tick(&mut state, &TickInput::default()) {
                if let GameEvent::GameOver { final_score } = event {
                    assert_eq!(final_score, 0);
                    game_overs += 1;
                }
            }
        }
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(game_overs, 1);

        // the terminal state ignores every command
        let ticks = state.ticks;
        let vel = state.entity.vel;
        tick(&mut state, &JUMP);
        tick(&mut state, &PAUSE);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.ticks, ticks);
        assert_eq!(state.entity.vel, vel);
    }

    #[test]
    fn hovering_through_the_gap_scores_and_fires_the_first_clear_once() {
        let mut state = GameState::new(open_cfg(), 42);
        let mut first_clears = 0;
        let mut prev_score = 0;

        tick(&mut state, &JUMP);
        for _ in 0..2_000 {
            let input = hover_input(&state);
            for event in tick(&mut state, &input) {
                if event == GameEvent::FirstObstacleCleared {
                    first_clears += 1;
                    assert_eq!(state.score(), 1);
                }
            }
            // the score never decreases and never skips
            assert!(state.score() == prev_score || state.score() == prev_score + 1);
            prev_score = state.score();
            assert_eq!(state.score(), state.next_obstacle_id - 1);
        }

        assert_eq!(state.phase, GamePhase::Running, "hover run should survive");
        assert_eq!(first_clears, 1);
        assert!(state.score() >= 2, "score was {}", state.score());
    }

    #[test]
    fn same_seed_and_inputs_replay_identically() {
        let mut a = GameState::new(open_cfg(), 99);
        let mut b = GameState::new(open_cfg(), 99);

        tick(&mut a, &JUMP);
        tick(&mut b, &JUMP);
        for _ in 0..500 {
            let input_a = hover_input(&a);
            let input_b = hover_input(&b);
            tick(&mut a, &input_a);
            tick(&mut b, &input_b);
        }

        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.entity, b.entity);
        assert_eq!(a.track.scroll(), b.track.scroll());
        assert_eq!(a.next_obstacle_id, b.next_obstacle_id);
        assert_eq!(a.gap_level, b.gap_level);
        assert_eq!(a.phase, b.phase);
    }
}
