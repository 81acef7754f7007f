//! Obstacle lifecycle: scroll, spawn, cull
//!
//! The track owns the world scroll offset and the ordered obstacle registry.
//! Spawning triggers on each crossing of a `spawn_spacing` boundary, so a
//! scroll step that never lands exactly on a multiple still spawns every
//! obstacle. Culling drops obstacles, oldest first, once their trailing edge
//! has scrolled a full visible-window behind the entity.

use std::collections::VecDeque;

use rand::Rng;

use super::gap;
use super::state::Obstacle;
use crate::config::SimConfig;

#[derive(Debug, Clone, Default)]
pub struct ObstacleTrack {
    scroll: f32,
    spawned: u64,
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative scroll magnitude: how far the world has moved leftward
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Live obstacles in increasing id order
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Registry lookup by id
    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Advance the world by one tick: scroll, spawn for every spacing
    /// boundary crossed, then cull everything out of the visible window.
    pub fn advance<R: Rng + ?Sized>(&mut self, cfg: &SimConfig, gap_level: &mut f32, rng: &mut R) {
        self.scroll += cfg.scroll_speed;

        let boundaries = (self.scroll / cfg.spawn_spacing()).floor() as u64;
        while self.spawned < boundaries {
            self.spawn(cfg, gap_level, rng);
        }

        while let Some(front) = self.obstacles.front() {
            let trailing_edge = front.screen_x(self.scroll) + cfg.obstacle_width;
            if trailing_edge < cfg.entity_x - cfg.visible_width() {
                log::debug!("culled obstacle {}", front.id);
                self.obstacles.pop_front();
            } else {
                break;
            }
        }
    }

    /// Hand-built track for geometry tests, bypassing the generator
    #[cfg(test)]
    pub(crate) fn with_obstacles(scroll: f32, obstacles: Vec<Obstacle>) -> Self {
        let spawned = obstacles.last().map_or(0, |o| o.id as u64);
        Self {
            scroll,
            spawned,
            obstacles: obstacles.into(),
        }
    }

    fn spawn<R: Rng + ?Sized>(&mut self, cfg: &SimConfig, gap_level: &mut f32, rng: &mut R) {
        self.spawned += 1;
        let id = self.spawned as u32;
        *gap_level = gap::next_gap_level(*gap_level, rng, cfg);

        debug_assert!(self.obstacles.back().is_none_or(|o| o.id < id));
        self.obstacles.push_back(Obstacle {
            id,
            gap_top: *gap_level,
            spawn_x: cfg.viewport_width + id as f32 * cfg.spawn_spacing(),
        });
        log::debug!("spawned obstacle {id} at gap level {gap_level}");
    }
}
