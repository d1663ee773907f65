//! Renderable scene snapshot
//!
//! A [`Scene`] is an owned copy of everything a renderer needs for one frame.
//! It shares nothing with the live [`GameState`], so it can be handed to
//! another thread.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Direction;
use super::rect::Rect;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversaryView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PelletView {
    pub pos: Vec2,
    pub radius: f32,
    pub is_power: bool,
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Remaining power time in seconds, absent when unpowered
    pub power_secs: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub tick: u64,
    pub phase: GamePhase,
    pub obstacles: Vec<Rect>,
    pub adversaries: Vec<AdversaryView>,
    pub pellets: Vec<PelletView>,
    pub player: PlayerView,
    pub hud: Hud,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            obstacles: state.obstacles.walls().to_vec(),
            adversaries: state
                .adversaries
                .iter()
                .map(|a| AdversaryView {
                    pos: a.pos,
                    radius: a.radius,
                })
                .collect(),
            pellets: state
                .pellets
                .pellets()
                .iter()
                .map(|p| PelletView {
                    pos: p.pos,
                    radius: p.radius,
                    is_power: p.is_power,
                })
                .collect(),
            player: PlayerView {
                pos: player.pos,
                radius: player.radius,
                direction: player.direction,
            },
            hud: Hud {
                score: state.round.score,
                lives: state.round.lives,
                level: state.round.level,
                power_secs: player
                    .is_powered()
                    .then(|| player.power_timer_ms as f32 / 1000.0),
            },
        }
    }

    /// One-line HUD text
    pub fn hud_line(&self) -> String {
        let mut line = format!(
            "Score: {}  Lives: {}  Level: {}",
            self.hud.score, self.hud.lives, self.hud.level
        );
        if let Some(secs) = self.hud.power_secs {
            line.push_str(&format!("  Invincible: {secs} s"));
        }
        line
    }
}
