//! Platform abstraction layer
//!
//! The simulation never touches devices or clocks directly. This module holds
//! the seams it is driven through:
//! - Input sampling ([`InputSource`])
//! - Frame pacing ([`FrameClock`])
//! - Scene output ([`SceneSink`])

pub mod input;
pub mod output;
pub mod time;

pub use input::{ScriptedInput, WanderInput};
pub use output::{LogSink, RecordingSink};
pub use time::{FixedRateClock, ManualClock};

use serde::Serialize;

use crate::sim::{GameEvent, GamePhase, GameState, RoundState, Scene, TickInput, tick};

/// Supplies the held keys and quit flag for each frame
pub trait InputSource {
    fn sample(&mut self) -> TickInput;
}

/// Measures frame time and holds the loop to its cadence
pub trait FrameClock {
    /// Milliseconds since the previous call
    fn elapsed_ms(&mut self) -> u32;
    /// Block until the next frame boundary
    fn wait_for_next_frame(&mut self);
}

/// Consumes one scene per frame
pub trait SceneSink {
    fn present(&mut self, scene: &Scene);
}

/// How a run ended
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub phase: GamePhase,
    pub round: RoundState,
    pub levels_cleared: u32,
    pub adversaries_eaten: u32,
}

/// Drive the game until it ends or `max_frames` frames have run
pub fn run(
    state: &mut GameState,
    input: &mut dyn InputSource,
    clock: &mut dyn FrameClock,
    sink: &mut dyn SceneSink,
    max_frames: Option<u64>,
) -> RunSummary {
    let mut frames = 0;
    let mut levels_cleared = 0;
    let mut adversaries_eaten = 0;

    while !state.phase.is_terminal() && max_frames.is_none_or(|max| frames < max) {
        let mut frame_input = input.sample();
        frame_input.elapsed_ms = clock.elapsed_ms();

        for event in tick(state, &frame_input) {
            match event {
                GameEvent::LevelCleared { .. } => levels_cleared += 1,
                GameEvent::AdversaryEaten { .. } => adversaries_eaten += 1,
                _ => {}
            }
        }

        sink.present(&Scene::capture(state));
        frames += 1;

        if !state.phase.is_terminal() {
            clock.wait_for_next_frame();
        }
    }

    RunSummary {
        frames,
        phase: state.phase,
        round: state.round,
        levels_cleared,
        adversaries_eaten,
    }
}
