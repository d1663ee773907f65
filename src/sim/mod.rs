//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (insertion / entity ID)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod obstacles;
pub mod pellets;
pub mod player;
pub mod rect;
pub mod scene;
pub mod state;
pub mod tick;

pub use adversary::Adversary;
pub use obstacles::ObstacleSet;
pub use pellets::{Pellet, PelletField};
pub use player::{Direction, HeldKeys, Player, SpeedMode, SpeedTable};
pub use rect::{Rect, intersects};
pub use scene::{Hud, Scene};
pub use state::{GameEvent, GamePhase, GameState, RoundState};
pub use tick::{TickInput, tick};
