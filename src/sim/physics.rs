//! Vertical physics integration
//!
//! Explicit Euler, one step per rendered frame: acceleration is applied to
//! velocity first, then velocity to position. No bounds clamping happens
//! here; boundary violations are the collision engine's to detect.

use super::state::Entity;
use crate::config::SimConfig;

/// Advance the entity by one step under constant downward acceleration
pub fn integrate(entity: &mut Entity, cfg: &SimConfig) {
    entity.vel += cfg.down_force;
    entity.y += entity.vel;
}

/// Apply a jump impulse. Velocity is replaced, never accumulated.
pub fn jump(entity: &mut Entity, cfg: &SimConfig) {
    entity.vel = -cfg.jump_force;
}
