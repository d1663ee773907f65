//! Adversaries
//!
//! Adversaries do not chase. Every frame each one teleports to a random spot
//! clear of the walls, independent of where the player is.

use glam::Vec2;
use rand::Rng;

use super::obstacles::ObstacleSet;
use super::rect::Rect;
use crate::consts::{ADVERSARY_RADIUS, NORMAL_SPEED};

#[derive(Debug, Clone)]
pub struct Adversary {
    pub id: u32,
    pub pos: Vec2,
    /// Carried for parity with the player; relocation ignores it
    pub speed: f32,
    /// Adversary-side power timer. Nothing writes it, so it stays 0 and the
    /// collision guard that reads it always passes.
    pub power_timer_ms: u32,
    pub radius: f32,
}

impl Adversary {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            speed: NORMAL_SPEED,
            power_timer_ms: 0,
            radius: ADVERSARY_RADIUS,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::square_around(self.pos, self.radius)
    }

    /// Whether the adversary can currently be touched by the player
    pub fn is_vulnerable(&self) -> bool {
        self.power_timer_ms == 0
    }

    /// Jump to a random position clear of the walls
    pub fn relocate<R: Rng>(&mut self, obstacles: &ObstacleSet, rng: &mut R) {
        self.pos = obstacles.find_free_position(self.radius, rng);
    }
}
