//! Data-driven game balance
//!
//! Geometry (arena, walls, seed pellets) is fixed in [`crate::consts`]; the
//! numbers here can be overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::player::SpeedTable;

/// How the power timer is counted down each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerCountdown {
    /// Subtract `power_tick_ms` every frame regardless of wall time
    #[default]
    FixedPerTick,
    /// Subtract the elapsed time reported by the frame clock
    Elapsed,
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(&'static str),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub normal_speed: f32,
    pub boosted_speed: f32,
    pub power_duration_ms: u32,
    pub power_countdown: PowerCountdown,
    /// Per-frame decrement for [`PowerCountdown::FixedPerTick`]
    pub power_tick_ms: u32,
    pub starting_lives: u32,
    pub adversary_count: usize,
    pub random_pellet_count: usize,
    pub frame_rate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            normal_speed: NORMAL_SPEED,
            boosted_speed: BOOSTED_SPEED,
            power_duration_ms: POWER_DURATION_MS,
            power_countdown: PowerCountdown::FixedPerTick,
            power_tick_ms: POWER_TICK_MS,
            starting_lives: STARTING_LIVES,
            adversary_count: ADVERSARY_COUNT,
            random_pellet_count: RANDOM_PELLET_COUNT,
            frame_rate: FRAME_RATE,
        }
    }
}

impl Tuning {
    /// Parse and validate; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.frame_rate == 0 {
            return Err(TuningError::Invalid("frame_rate must be positive"));
        }
        if !(self.normal_speed > 0.0) || !(self.boosted_speed > 0.0) {
            return Err(TuningError::Invalid("speeds must be positive"));
        }
        if self.power_tick_ms == 0 {
            return Err(TuningError::Invalid("power_tick_ms must be positive"));
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid("starting_lives must be positive"));
        }
        Ok(())
    }

    pub fn speeds(&self) -> SpeedTable {
        SpeedTable {
            normal: self.normal_speed,
            boosted: self.boosted_speed,
        }
    }

    /// Nominal frame length in milliseconds
    pub fn frame_ms(&self) -> u32 {
        1000 / self.frame_rate
    }

    /// Power countdown for a frame that took `elapsed_ms`
    pub fn power_decrement(&self, elapsed_ms: u32) -> u32 {
        match self.power_countdown {
            PowerCountdown::FixedPerTick => self.power_tick_ms,
            PowerCountdown::Elapsed => elapsed_ms,
        }
    }
}
