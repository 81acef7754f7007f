//! Game state and core simulation types
//!
//! The simulation owns everything here exclusively. Renderers read it as a
//! snapshot each tick and never write back; input handlers only set flags on
//! [`super::tick::TickInput`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::track::ObstacleTrack;
use crate::config::SimConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first jump
    NotStarted,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended on a collision; only a full restart leaves this state
    Over,
}

/// The falling, jump-controlled actor.
///
/// `y` is the top edge of the bounding box, measured downward from the arena
/// top. Horizontal placement and box size come from [`SimConfig`]. Only the
/// integrator and jump commands write here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub y: f32,
    pub vel: f32,
}

/// A paired upper/lower barrier with a vertical gap between them.
///
/// Immutable after creation; the on-screen position is derived from the
/// track's scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Monotonically increasing identity; the first obstacle is 1
    pub id: u32,
    /// Distance from the arena top to the bottom edge of the upper barrier
    pub gap_top: f32,
    /// World x at zero scroll; screen x is this minus the scroll magnitude
    pub spawn_x: f32,
}

impl Obstacle {
    /// Left edge in screen coordinates at the given scroll magnitude
    pub fn screen_x(&self, scroll: f32) -> f32 {
        self.spawn_x - scroll
    }
}

/// Discrete events the core reports to its host collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The very first obstacle was cleared; hosts drop their intro text
    FirstObstacleCleared,
    /// Terminal collision, carrying the run's final score
    GameOver { final_score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub entity: Entity,
    pub track: ObstacleTrack,
    /// Id of the obstacle to be crossed next; the score is this minus one
    pub next_obstacle_id: u32,
    /// Gap level of the most recent spawn, the basis of the next draw
    pub gap_level: f32,
    /// Simulation tick counter
    pub ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh state at the start of a run
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            entity: Entity {
                y: config.entity_start_y,
                vel: 0.0,
            },
            gap_level: config.initial_gap_level,
            track: ObstacleTrack::new(),
            next_obstacle_id: 1,
            phase: GamePhase::NotStarted,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            config,
        }
    }

    /// Obstacles cleared so far
    pub fn score(&self) -> u32 {
        self.next_obstacle_id - 1
    }

    /// Rebuild the whole run from scratch; the only way out of [`GamePhase::Over`]
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config.clone(), seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_at_the_start_position() {
        let cfg = SimConfig::default();
        let state = GameState::new(cfg.clone(), 7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.entity.y, cfg.entity_start_y);
        assert_eq!(state.entity.vel, 0.0);
        assert_eq!(state.next_obstacle_id, 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.track.len(), 0);
    }

    #[test]
    fn restart_reconstructs_everything_but_the_config() {
        let mut state = GameState::new(SimConfig::default(), 7);
        state.phase = GamePhase::Over;
        state.entity.y = 999.0;
        state.next_obstacle_id = 12;

        state.restart(8);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.seed, 8);
        assert_eq!(state.score(), 0);
        assert_eq!(state.config, SimConfig::default());
    }

    #[test]
    fn screen_position_tracks_scroll() {
        let obstacle = Obstacle {
            id: 1,
            gap_top: 80.0,
            spawn_x: 1010.0,
        };
        assert_eq!(obstacle.screen_x(0.0), 1010.0);
        assert_eq!(obstacle.screen_x(210.0), 800.0);
    }
}
