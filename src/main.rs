//! Pellet Chase entry point
//!
//! Runs the game headless: a wandering input drives the player and scenes go
//! to the log. Set `RUST_LOG=debug` to follow the HUD, `trace` for every frame.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pellet_chase::Tuning;
use pellet_chase::platform::{self, FixedRateClock, FrameClock, LogSink, ManualClock, WanderInput};
use pellet_chase::sim::{GameState, Scene};

#[derive(Debug, Parser)]
#[command(name = "pellet-chase", about = "Headless maze chase game loop")]
struct Cli {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,
    /// Run frames back to back instead of at the fixed frame rate
    #[arg(long)]
    unpaced: bool,
    /// Print the final scene as JSON
    #[arg(long)]
    dump_scene: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("Pellet Chase starting with seed: {}", seed);

    let mut clock: Box<dyn FrameClock> = if cli.unpaced {
        Box::new(ManualClock::new(tuning.frame_ms()))
    } else {
        Box::new(FixedRateClock::new(tuning.frame_rate))
    };
    let mut state = GameState::with_tuning(seed, tuning);
    let mut input = WanderInput::new(seed.wrapping_add(1));
    let mut sink = LogSink::default();

    let summary = platform::run(
        &mut state,
        &mut input,
        clock.as_mut(),
        &mut sink,
        cli.max_frames,
    );
    log::info!(
        "Run ended after {} frames ({:?}): level {}, score {}, lives {}",
        summary.frames,
        summary.phase,
        summary.round.level,
        summary.round.score,
        summary.round.lives
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if cli.dump_scene {
        println!("{}", serde_json::to_string_pretty(&Scene::capture(&state))?);
    }
    Ok(())
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
