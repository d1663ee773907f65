//! Input sources for headless play and tests

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::InputSource;
use crate::sim::{Direction, HeldKeys, TickInput};

/// Replays a fixed list of inputs, then requests quit
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Hold the same keys for `count` frames
    pub fn repeat(keys: HeldKeys, count: usize) -> Self {
        Self::new(vec![TickInput::hold(keys); count])
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> TickInput {
        let input = self
            .frames
            .get(self.cursor)
            .copied()
            .unwrap_or_else(TickInput::quit);
        self.cursor += 1;
        input
    }
}

/// Wanders by holding a random direction for a random number of frames
#[derive(Debug, Clone)]
pub struct WanderInput {
    rng: Pcg32,
    held: Direction,
    frames_left: u32,
}

impl WanderInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: Direction::Right,
            frames_left: 0,
        }
    }
}

impl InputSource for WanderInput {
    fn sample(&mut self) -> TickInput {
        if self.frames_left == 0 {
            self.held = Direction::PRIORITY[self.rng.random_range(0..Direction::PRIORITY.len())];
            self.frames_left = self.rng.random_range(10..60);
        }
        self.frames_left -= 1;
        TickInput::hold(HeldKeys::only(self.held))
    }
}
