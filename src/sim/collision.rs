//! Collision and scoring evaluation
//!
//! Pure: one call per tick returns what happened and callers decide what to
//! apply. World bounds are checked before any obstacle test, so an empty
//! track still ends a run that drifts out of the arena. Overlap uses
//! strict-inequality separation: boxes sharing an edge DO collide.

use glam::Vec2;

use super::state::Entity;
use super::track::ObstacleTrack;
use crate::config::SimConfig;

/// Axis-aligned box in screen coordinates
#[derive(Debug, Clone, Copy)]
struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    fn overlaps(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// Outcome of one tick's evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub collided: bool,
    pub scored: bool,
    /// Updated id of the obstacle to be crossed next
    pub next_obstacle_id: u32,
}

/// Test the entity against the world bounds and the next unpassed obstacle.
///
/// A pass and a collision are both reported when they land on the same
/// tick; precedence is the caller's call.
pub fn evaluate(
    entity: &Entity,
    track: &ObstacleTrack,
    next_obstacle_id: u32,
    cfg: &SimConfig,
) -> Evaluation {
    let mut result = Evaluation {
        collided: false,
        scored: false,
        next_obstacle_id,
    };

    // world bounds first, independent of any obstacle
    if entity.y < 0.0 || entity.y + cfg.entity_height > cfg.arena_height {
        result.collided = true;
        return result;
    }

    // next obstacle not spawned yet: nothing more to check this tick
    let Some(obstacle) = track.get(next_obstacle_id) else {
        return result;
    };

    let left = obstacle.screen_x(track.scroll());
    let right = left + cfg.obstacle_width;

    // cleared once the upper barrier's trailing edge is behind the
    // entity's leading edge
    if right < cfg.entity_x {
        result.scored = true;
        result.next_obstacle_id += 1;
    }

    let entity_box = Rect::new(
        cfg.entity_x,
        entity.y,
        cfg.entity_x + cfg.entity_width,
        entity.y + cfg.entity_height,
    );
    let upper = Rect::new(left, 0.0, right, obstacle.gap_top);
    let lower = Rect::new(left, obstacle.gap_top + cfg.gap_height, right, cfg.arena_height);

    if entity_box.overlaps(&upper) || entity_box.overlaps(&lower) {
        result.collided = true;
    }

    result
}
