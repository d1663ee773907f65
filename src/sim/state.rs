//! Game state and core simulation types
//!
//! [`GameState`] owns everything that changes during a run. All randomness
//! comes from its seeded RNG, so equal seeds and inputs replay identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::adversary::Adversary;
use super::obstacles::ObstacleSet;
use super::pellets::PelletField;
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Last life lost
    GameOver,
    /// Player asked to quit
    Quit,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PelletEaten { power: bool },
    AdversaryEaten { id: u32 },
    LifeLost { lives_left: u32 },
    /// Pellet field exhausted; `level` is the level now starting
    LevelCleared { level: u32 },
    GameOver,
    Quit,
}

/// Score, lives and level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
}

impl RoundState {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            level: 1,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub round: RoundState,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub obstacles: ObstacleSet,
    pub player: Player,
    /// Surviving adversaries (sorted by id)
    pub adversaries: Vec<Adversary>,
    pub pellets: PelletField,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game: spawn the player, place adversaries, lay out pellets
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleSet::default();

        let mut player = Player::new(tuning.speeds());
        player.spawn(&obstacles, &mut rng);

        let adversaries: Vec<Adversary> = (1..=tuning.adversary_count as u32)
            .map(|id| {
                let mut adversary = Adversary::new(id);
                adversary.relocate(&obstacles, &mut rng);
                adversary
            })
            .collect();

        let pellets = PelletField::populate(tuning.random_pellet_count, &mut rng);

        Self {
            seed,
            round: RoundState::new(tuning.starting_lives),
            tuning,
            phase: GamePhase::Playing,
            time_ticks: 0,
            obstacles,
            player,
            adversaries,
            pellets,
            rng,
        }
    }

    /// Put the player somewhere clear of the walls
    pub fn respawn_player(&mut self) {
        self.player.spawn(&self.obstacles, &mut self.rng);
    }

    /// Move every surviving adversary to a fresh random spot
    pub fn relocate_adversaries(&mut self) {
        for adversary in &mut self.adversaries {
            adversary.relocate(&self.obstacles, &mut self.rng);
        }
    }

    /// Advance to the next level: fresh pellets, score and power reset
    pub fn start_next_level(&mut self) {
        self.round.level += 1;
        self.round.score = 0;
        self.player.clear_power();
        self.respawn_player();
        self.pellets = PelletField::populate(self.tuning.random_pellet_count, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STARTING_LIVES;

    #[test]
    fn test_new_game() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.round, RoundState::new(STARTING_LIVES));
        assert_eq!(state.round.level, 1);
        assert_eq!(state.adversaries.len(), 3);
        assert_eq!(state.pellets.len(), 50);
        assert!(!state.obstacles.any_intersects(&state.player.bounds()));
        for adversary in &state.adversaries {
            assert!(!state.obstacles.any_intersects(&adversary.bounds()));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.pellets.pellets(), b.pellets.pellets());
    }

    #[test]
    fn test_start_next_level() {
        let mut state = GameState::new(5);
        state.round.score = 12;
        state.player.empower(500);
        state.pellets = PelletField::default();

        state.start_next_level();
        assert_eq!(state.round.level, 2);
        assert_eq!(state.round.score, 0);
        assert_eq!(state.player.power_timer_ms, 0);
        assert!(!state.player.is_powered());
        assert_eq!(state.pellets.len(), 50);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Quit.is_terminal());
    }
}
