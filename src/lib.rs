//! Gap Runner - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle track, collisions, game state)
//! - `config`: Data-driven tuning, supplied or derived by the host
//! - `highscores`: Best-score persistence (LocalStorage on web, in-memory fallback)
//! - `input`: Host-side input debouncing
//! - `platform`: Browser/native platform abstraction
//!
//! Rendering, audio and page UI live with the host; they read the public
//! simulation state each frame and feed commands back through
//! [`sim::TickInput`].

pub mod config;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use highscores::{MemoryStore, ScoreStore, record_best};
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};
