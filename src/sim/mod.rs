//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One step per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable obstacle order (by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod gap;
pub mod physics;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Evaluation, evaluate};
pub use gap::{clamp_gap_level, next_gap_level};
pub use state::{Entity, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{TickInput, tick};
pub use track::ObstacleTrack;
