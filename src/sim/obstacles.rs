//! Static wall layout
//!
//! The obstacle set is built once from [`OBSTACLE_LAYOUT`] and never changes.
//! Spawning relies on the layout leaving free space: sampling retries without
//! a bound.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::{ARENA_SIZE, OBSTACLE_LAYOUT};

/// Immutable set of wall rectangles
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    walls: Vec<Rect>,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new(
            OBSTACLE_LAYOUT
                .iter()
                .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
                .collect(),
        )
    }
}

impl ObstacleSet {
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// True if `rect` overlaps any wall
    pub fn any_intersects(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.intersects(rect))
    }

    /// Sample whole-unit positions until an actor of `radius` fits between the walls
    ///
    /// Positions keep the full radius inside the arena.
    pub fn find_free_position<R: Rng>(&self, radius: f32, rng: &mut R) -> Vec2 {
        let lo = radius.ceil() as i32;
        let hi = (ARENA_SIZE - radius).floor() as i32;
        loop {
            let pos = Vec2::new(
                rng.random_range(lo..=hi) as f32,
                rng.random_range(lo..=hi) as f32,
            );
            if !self.any_intersects(&Rect::square_around(pos, radius)) {
                return pos;
            }
        }
    }
}
