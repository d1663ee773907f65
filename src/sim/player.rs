//! The player agent
//!
//! Grid-free movement: one axis per frame, chosen by a fixed key priority.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleSet;
use super::rect::Rect;
use crate::consts::{BOOSTED_SPEED, NORMAL_SPEED, PLAYER_RADIUS};
use crate::{inside_arena, step};

/// Facing direction (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Order in which held keys are tried each frame
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen space
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Sprite rotation in degrees, counter-clockwise from facing right
    pub fn angle_degrees(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::Up => 90.0,
            Direction::Left => 180.0,
            Direction::Down => 270.0,
        }
    }
}

/// Directional keys held during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn only(dir: Direction) -> Self {
        let mut keys = Self::default();
        keys.set(dir, true);
        keys
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Speed mode, toggled by the power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    Normal,
    Boosted,
}

/// Units moved per frame in each speed mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTable {
    pub normal: f32,
    pub boosted: f32,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            normal: NORMAL_SPEED,
            boosted: BOOSTED_SPEED,
        }
    }
}

/// The player-controlled agent
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub direction: Direction,
    pub speed: SpeedMode,
    /// Remaining power state (milliseconds)
    pub power_timer_ms: u32,
    pub radius: f32,
    speeds: SpeedTable,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(SpeedTable::default())
    }
}

impl Player {
    /// Unplaced player; call [`Player::spawn`] before the first frame
    pub fn new(speeds: SpeedTable) -> Self {
        Self {
            pos: Vec2::ZERO,
            direction: Direction::Right,
            speed: SpeedMode::Normal,
            power_timer_ms: 0,
            radius: PLAYER_RADIUS,
            speeds,
        }
    }

    /// Units per frame for the current speed mode
    pub fn current_speed(&self) -> f32 {
        match self.speed {
            SpeedMode::Normal => self.speeds.normal,
            SpeedMode::Boosted => self.speeds.boosted,
        }
    }

    pub fn is_powered(&self) -> bool {
        self.power_timer_ms > 0
    }

    pub fn bounds(&self) -> Rect {
        Rect::square_around(self.pos, self.radius)
    }

    /// Whether stepping one frame toward `dir` is legal
    fn can_step(&self, dir: Direction, obstacles: &ObstacleSet) -> Option<Vec2> {
        let dest = step(self.pos, dir.vector(), self.current_speed());
        if !inside_arena(dest, self.radius) {
            return None;
        }
        if obstacles.any_intersects(&Rect::square_around(dest, self.radius)) {
            return None;
        }
        Some(dest)
    }

    /// Apply at most one single-axis step for the held keys
    ///
    /// Held directions are tried in [`Direction::PRIORITY`] order and the
    /// first legal one wins. Returns the direction moved, if any.
    pub fn move_with(&mut self, keys: HeldKeys, obstacles: &ObstacleSet) -> Option<Direction> {
        let (dir, dest) = Direction::PRIORITY
            .into_iter()
            .filter(|&dir| keys.is_held(dir))
            .find_map(|dir| self.can_step(dir, obstacles).map(|dest| (dir, dest)))?;
        self.pos = dest;
        self.direction = dir;
        Some(dir)
    }

    /// Place the player at a random spot clear of every wall
    pub fn spawn<R: Rng>(&mut self, obstacles: &ObstacleSet, rng: &mut R) {
        self.pos = obstacles.find_free_position(self.radius, rng);
    }

    /// Count the power timer down, returning to normal speed when it runs out
    pub fn tick_power(&mut self, delta_ms: u32) {
        if self.power_timer_ms == 0 {
            return;
        }
        self.power_timer_ms = self.power_timer_ms.saturating_sub(delta_ms);
        if self.power_timer_ms == 0 {
            self.speed = SpeedMode::Normal;
        }
    }

    /// Enter the power state; replaces any remaining time
    pub fn empower(&mut self, duration_ms: u32) {
        self.power_timer_ms = duration_ms;
        self.speed = SpeedMode::Boosted;
    }

    /// Leave the power state entirely (level transitions)
    pub fn clear_power(&mut self) {
        self.power_timer_ms = 0;
        self.speed = SpeedMode::Normal;
    }
}
