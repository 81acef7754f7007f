//! Procedural gap placement
//!
//! Each obstacle's gap level is one step of a bounded random walk from the
//! previous one: consecutive gaps differ by at most `gap_max_step`, and the
//! result is pinned inside the band the safe zones leave legal. Correlated
//! steps keep the trajectory navigable without making it predictable.

use rand::Rng;

use crate::config::SimConfig;

/// Pin a candidate gap level into the legal band.
///
/// Not a symmetric clamp: a candidate at or above the top safe zone pins to
/// the topmost legal position, and one whose gap bottom would intrude on the
/// bottom safe zone pins to the bottommost.
pub fn clamp_gap_level(candidate: f32, cfg: &SimConfig) -> f32 {
    if candidate <= cfg.safe_zone_top {
        cfg.safe_zone_top
    } else if candidate + cfg.gap_height > cfg.arena_height - cfg.safe_zone_bottom {
        cfg.arena_height - cfg.gap_height - cfg.safe_zone_bottom
    } else {
        candidate
    }
}

/// Draw the next gap level from the previous one.
///
/// The random source is injected so sequences are reproducible under a
/// seeded generator.
pub fn next_gap_level<R: Rng + ?Sized>(previous: f32, rng: &mut R, cfg: &SimConfig) -> f32 {
    let delta = rng.random_range(-cfg.gap_max_step..=cfg.gap_max_step);
    clamp_gap_level(previous + delta, cfg)
}
