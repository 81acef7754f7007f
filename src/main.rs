//! Gap Runner entry point
//!
//! The native binary runs the simulation headless behind a small autopilot,
//! which doubles as a smoke test of the whole tick pipeline. The browser
//! shell (canvas, DOM events, share buttons) is a separate host that
//! consumes the library; it has no code here.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use gap_runner::highscores::{MemoryStore, record_best};
    use gap_runner::input::JumpGuard;
    use gap_runner::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use gap_runner::{SimConfig, platform};

    platform::init_logging();

    let config = SimConfig::default();
    if let Err(err) = config.validate() {
        log::error!("invalid config: {err}");
        return;
    }

    let seed = platform::seed_from_clock();
    log::info!("starting run with seed {seed}");

    let mut state = GameState::new(config, seed);
    let mut store = MemoryStore::new();
    let mut guard = JumpGuard::new();

    // one simulation step per frame at the reference cadence
    let frame = Duration::from_secs_f64(1.0 / 60.0);
    // two minutes of sim time, then call the demo done
    const MAX_TICKS: u64 = 60 * 120;

    for _ in 0..MAX_TICKS {
        let jump = if autopilot_wants_jump(&state) {
            guard.press()
        } else {
            guard.release();
            false
        };
        let input = TickInput {
            jump,
            ..TickInput::default()
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::FirstObstacleCleared => log::info!("first obstacle cleared"),
                GameEvent::GameOver { final_score } => {
                    let best = record_best(&mut store, final_score);
                    println!("game over: score {final_score}, best {best}");
                }
            }
        }

        // the terminal state halts scheduling entirely
        if state.phase == GamePhase::Over {
            break;
        }

        std::thread::sleep(frame);
    }

    println!("survived {} ticks, score {}", state.ticks, state.score());
}

/// Steer toward the next gap, aiming a little below its centre to leave
/// headroom for the climb after each impulse.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_jump(state: &gap_runner::sim::GameState) -> bool {
    use gap_runner::sim::GamePhase;

    if state.phase == GamePhase::NotStarted {
        return true;
    }

    let cfg = &state.config;
    let aim = state
        .track
        .get(state.next_obstacle_id)
        .map(|o| o.gap_top + cfg.gap_height * 0.6)
        .unwrap_or(cfg.arena_height / 2.0);

    let centre = state.entity.y + cfg.entity_height / 2.0;
    centre > aim && state.entity.vel > 0.0
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // on the web the host page drives the library; there is no binary entry
}
