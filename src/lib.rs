//! Pellet Chase - A maze chase arcade game
//!
//! Core modules:
//! - `sim`: Simulation (movement, collisions, round state)
//! - `platform`: Input, frame clock and scene output abstractions
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{PowerCountdown, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (square, origin top-left, y grows downward)
    pub const ARENA_SIZE: f32 = 600.0;

    /// Wall layout as (x, y, width, height)
    pub const OBSTACLE_LAYOUT: [(f32, f32, f32, f32); 5] = [
        (50.0, 50.0, 100.0, 400.0),
        (150.0, 250.0, 300.0, 100.0),
        (450.0, 50.0, 100.0, 400.0),
        (150.0, 50.0, 300.0, 50.0),
        (150.0, 500.0, 300.0, 50.0),
    ];

    /// Seed pellets placed at every level start as (x, y, is_power)
    pub const SEED_PELLETS: [(f32, f32, bool); 5] = [
        (70.0, 70.0, false),
        (130.0, 130.0, false),
        (300.0, 300.0, true),
        (470.0, 470.0, false),
        (530.0, 530.0, false),
    ];

    /// Actor radii (bounding square side = 2 * radius)
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const ADVERSARY_RADIUS: f32 = 15.0;
    pub const PELLET_RADIUS: f32 = 5.0;
    pub const POWER_PELLET_RADIUS: f32 = 10.0;

    /// Movement speeds (units per frame)
    pub const NORMAL_SPEED: f32 = 3.0;
    pub const BOOSTED_SPEED: f32 = 6.0;

    /// Power state length
    pub const POWER_DURATION_MS: u32 = 500;

    /// Frame cadence
    pub const FRAME_RATE: u32 = 30;
    /// Power countdown applied per frame (one 30 Hz frame, truncated)
    pub const POWER_TICK_MS: u32 = 33;

    pub const STARTING_LIVES: u32 = 3;
    pub const ADVERSARY_COUNT: usize = 3;
    /// Random pellets added on top of the seed layout (50 total)
    pub const RANDOM_PELLET_COUNT: usize = 45;
}

/// Offset a position one step of `speed` in a screen-space direction
#[inline]
pub fn step(pos: Vec2, dir: Vec2, speed: f32) -> Vec2 {
    pos + dir * speed
}

/// Whether an actor of `radius` centered at `pos` lies fully inside the arena
#[inline]
pub fn inside_arena(pos: Vec2, radius: f32) -> bool {
    let lo = radius;
    let hi = consts::ARENA_SIZE - radius;
    pos.x >= lo && pos.x <= hi && pos.y >= lo && pos.y <= hi
}
