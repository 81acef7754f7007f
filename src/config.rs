//! Data-driven simulation tuning
//!
//! Every numeric constant the simulation consumes lives here, so hosts can
//! derive values from their viewport instead of forking the code for each
//! tuning. Defaults reproduce the reference tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected host configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error(
        "no legal gap position: arena {arena_height} cannot fit gap {gap_height} \
         between safe zones {safe_zone_top}/{safe_zone_bottom}"
    )]
    NoLegalGap {
        arena_height: f32,
        gap_height: f32,
        safe_zone_top: f32,
        safe_zone_bottom: f32,
    },
}

/// Simulation tuning constants.
///
/// All distances are in arena units (pixels on the reference host), with the
/// vertical axis growing downward from the arena top and the horizontal axis
/// growing rightward from the viewport's left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Vertical extent of the playfield; the floor collision bound
    pub arena_height: f32,
    /// Horizontal extent of the host viewport; obstacles spawn at its right edge
    pub viewport_width: f32,
    /// Vertical margin below the arena top where no gap may start
    pub safe_zone_top: f32,
    /// Vertical margin above the arena bottom where no gap may end
    pub safe_zone_bottom: f32,

    /// Constant downward acceleration per tick
    pub down_force: f32,
    /// Upward impulse magnitude; a jump replaces velocity with its negation
    pub jump_force: f32,
    /// Horizontal world scroll per tick
    pub scroll_speed: f32,

    /// Horizontal width of each obstacle barrier pair
    pub obstacle_width: f32,
    /// Horizontal clearance between consecutive obstacle pairs
    pub obstacle_gap: f32,
    /// Vertical opening between an obstacle's upper and lower barriers
    pub gap_height: f32,
    /// Maximum vertical change between consecutive gap levels
    pub gap_max_step: f32,
    /// Gap level the random walk starts from
    pub initial_gap_level: f32,

    /// Left edge of the entity's bounding box (fixed; the world scrolls)
    pub entity_x: f32,
    pub entity_width: f32,
    pub entity_height: f32,
    /// Top edge of the entity at the start of a run
    pub entity_start_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_height: 480.0,
            viewport_width: 800.0,
            safe_zone_top: 100.0,
            safe_zone_bottom: 50.0,
            down_force: 0.2,
            jump_force: 4.0,
            scroll_speed: 3.0,
            obstacle_width: 60.0,
            obstacle_gap: 150.0,
            gap_height: 90.0,
            gap_max_step: 100.0,
            initial_gap_level: 80.0,
            entity_x: 80.0,
            entity_width: 40.0,
            entity_height: 30.0,
            entity_start_y: 180.0,
        }
    }
}

impl SimConfig {
    /// Tuning derived from the host viewport, the way the reference host
    /// sizes its playfield: 70% of the viewport height (at least 300), with
    /// a wider top safe zone on tall arenas.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let arena_height = (height * 0.7).max(300.0);
        Self {
            arena_height,
            viewport_width: width,
            safe_zone_top: if arena_height > 450.0 { 100.0 } else { 50.0 },
            entity_start_y: arena_height * 0.4,
            ..Self::default()
        }
    }

    /// Horizontal distance between consecutive spawns
    pub fn spawn_spacing(&self) -> f32 {
        self.obstacle_width + self.obstacle_gap
    }

    /// Width across which obstacles stay live before they are culled
    pub fn visible_width(&self) -> f32 {
        self.viewport_width + 2.0 * self.spawn_spacing()
    }

    /// Bottommost legal gap level
    pub fn max_gap_level(&self) -> f32 {
        self.arena_height - self.gap_height - self.safe_zone_bottom
    }

    /// Reject tunings the simulation cannot run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_height", self.arena_height),
            ("viewport_width", self.viewport_width),
            ("down_force", self.down_force),
            ("jump_force", self.jump_force),
            ("scroll_speed", self.scroll_speed),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap", self.obstacle_gap),
            ("gap_height", self.gap_height),
            ("gap_max_step", self.gap_max_step),
            ("entity_width", self.entity_width),
            ("entity_height", self.entity_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.safe_zone_top > self.max_gap_level() {
            return Err(ConfigError::NoLegalGap {
                arena_height: self.arena_height,
                gap_height: self.gap_height,
                safe_zone_top: self.safe_zone_top,
                safe_zone_bottom: self.safe_zone_bottom,
            });
        }

        Ok(())
    }
}
