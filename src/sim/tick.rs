//! Per-frame simulation tick
//!
//! Core game loop step: movement, pellets, adversaries, then level bookkeeping.

use serde::{Deserialize, Serialize};

use super::player::{HeldKeys, SpeedMode};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Directional keys held this frame
    pub keys: HeldKeys,
    /// Window closed / quit key
    pub quit: bool,
    /// Wall time since the previous frame (milliseconds)
    pub elapsed_ms: u32,
}

impl TickInput {
    pub fn hold(keys: HeldKeys) -> Self {
        Self {
            keys,
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_terminal() {
        return events;
    }

    // Quit is only honoured between frames
    if input.quit {
        log::info!(
            "Quit at level {} with score {}",
            state.round.level,
            state.round.score
        );
        state.phase = GamePhase::Quit;
        events.push(GameEvent::Quit);
        return events;
    }

    state.time_ticks += 1;

    // Power countdown runs before anything can refill it this frame
    let decrement = state.tuning.power_decrement(input.elapsed_ms);
    state.player.tick_power(decrement);

    state.player.move_with(input.keys, &state.obstacles);

    // Pellets
    let eaten = state.pellets.consume(&state.player.bounds());
    for pellet in &eaten {
        state.round.score += 1;
        events.push(GameEvent::PelletEaten {
            power: pellet.is_power,
        });
    }
    if eaten.iter().any(|p| p.is_power) {
        log::debug!("Power pellet eaten at tick {}", state.time_ticks);
        state.player.empower(state.tuning.power_duration_ms);
    }

    state.relocate_adversaries();

    // Adversary contact: eaten ones are marked here and filtered afterwards
    let mut eaten_ids = Vec::new();
    for i in 0..state.adversaries.len() {
        let (id, touching) = {
            let adversary = &state.adversaries[i];
            (
                adversary.id,
                adversary.is_vulnerable()
                    && adversary.bounds().intersects(&state.player.bounds()),
            )
        };
        if !touching {
            continue;
        }

        if state.player.is_powered() {
            log::debug!("Adversary {} eaten", id);
            eaten_ids.push(id);
            events.push(GameEvent::AdversaryEaten { id });
            continue;
        }

        state.round.lives = state.round.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: state.round.lives,
        });
        if state.round.lives == 0 {
            log::info!(
                "Game over at level {} with score {}",
                state.round.level,
                state.round.score
            );
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
            break;
        }

        log::debug!("Life lost, {} remaining", state.round.lives);
        state.respawn_player();
        // Speed drops back but the power timer is left to run out on its own
        state.player.speed = SpeedMode::Normal;
    }
    if !eaten_ids.is_empty() {
        state.adversaries.retain(|a| !eaten_ids.contains(&a.id));
    }

    if state.phase == GamePhase::GameOver {
        return events;
    }

    if state.pellets.is_empty() {
        log::info!("Completed level {}", state.round.level);
        state.start_next_level();
        events.push(GameEvent::LevelCleared {
            level: state.round.level,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::adversary::Adversary;
    use crate::sim::obstacles::ObstacleSet;
    use crate::sim::pellets::{Pellet, PelletField};
    use crate::sim::player::Direction;
    use glam::Vec2;

    /// A state with no adversaries and a single far-away pellet, player in the left corridor
    fn quiet_state() -> GameState {
        let mut state = GameState::new(2024);
        state.adversaries.clear();
        state.player.pos = Vec2::new(25.0, 300.0);
        state.pellets = PelletField::new(vec![Pellet::regular(Vec2::new(575.0, 575.0))]);
        state
    }

    /// Adversary whose bounds cover the whole arena wherever it lands.
    /// Only usable with an empty obstacle set.
    fn arena_filling_adversary(id: u32) -> Adversary {
        let mut adversary = Adversary::new(id);
        adversary.radius = 300.0;
        adversary
    }

    /// Quiet state with no walls, so the arena-filling adversary can be placed
    fn contact_state(adversary_ids: &[u32]) -> GameState {
        let mut state = quiet_state();
        state.obstacles = ObstacleSet::new(Vec::new());
        state.adversaries = adversary_ids
            .iter()
            .map(|&id| arena_filling_adversary(id))
            .collect();
        state
    }

    #[test]
    fn test_tick_moves_player() {
        let mut state = quiet_state();
        let events = tick(&mut state, &TickInput::hold(HeldKeys::only(Direction::Down)));
        assert!(events.is_empty());
        assert_eq!(state.player.pos, Vec2::new(25.0, 303.0));
        assert_eq!(state.player.direction, Direction::Down);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_pellet_scores() {
        let mut state = quiet_state();
        state.pellets = PelletField::new(vec![
            Pellet::regular(Vec2::new(25.0, 310.0)),
            Pellet::regular(Vec2::new(30.0, 290.0)),
            Pellet::regular(Vec2::new(575.0, 575.0)),
        ]);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.round.score, 2);
        assert_eq!(state.pellets.len(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::PelletEaten { power: false },
                GameEvent::PelletEaten { power: false }
            ]
        );
    }

    #[test]
    fn test_power_pellet_overwrites_timer() {
        let mut state = quiet_state();
        state.player.empower(100);
        state.player.pos = Vec2::new(320.0, 300.0);
        state.obstacles = ObstacleSet::new(Vec::new());
        state.pellets = PelletField::new(vec![
            Pellet::power(Vec2::new(300.0, 300.0)),
            Pellet::regular(Vec2::new(575.0, 575.0)),
        ]);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.power_timer_ms, 500);
        assert_eq!(state.player.speed, SpeedMode::Boosted);
        assert_eq!(state.round.score, 1);
    }

    #[test]
    fn test_power_runs_out() {
        let mut state = quiet_state();
        state.player.empower(500);
        let mut frames = 0;
        while state.player.is_powered() {
            tick(&mut state, &TickInput::default());
            frames += 1;
        }
        // 500 ms at 33 ms per frame
        assert_eq!(frames, 16);
        assert_eq!(state.player.speed, SpeedMode::Normal);
    }

    #[test]
    fn test_level_clear() {
        let mut state = quiet_state();
        state.round.score = 7;
        state.pellets = PelletField::new(vec![Pellet::regular(Vec2::new(25.0, 300.0))]);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.round.level, 2);
        assert_eq!(state.round.score, 0);
        assert_eq!(state.pellets.len(), 50);
        assert_eq!(state.player.power_timer_ms, 0);
        assert_eq!(
            events.last(),
            Some(&GameEvent::LevelCleared { level: 2 })
        );
    }

    #[test]
    fn test_life_lost_respawns_player() {
        let mut state = contact_state(&[1]);
        state.player.power_timer_ms = 0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.round.lives, 2);
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.adversaries.len(), 1);
        assert!(crate::inside_arena(state.player.pos, state.player.radius));
    }

    #[test]
    fn test_life_loss_resets_speed_only() {
        let mut state = contact_state(&[1]);
        state.player.speed = SpeedMode::Boosted;
        state.player.power_timer_ms = 0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.speed, SpeedMode::Normal);
    }

    #[test]
    fn test_last_life_ends_round() {
        let mut state = contact_state(&[1, 2]);
        state.round.lives = 1;
        // The last pellet is eaten in the same frame
        state.pellets = PelletField::new(vec![Pellet::regular(state.player.pos)]);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.round.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events,
            vec![
                GameEvent::PelletEaten { power: false },
                GameEvent::LifeLost { lives_left: 0 },
                GameEvent::GameOver
            ]
        );
        // Level clear is skipped once the round is lost
        assert_eq!(state.round.level, 1);

        // Later frames do nothing
        let ticks = state.time_ticks;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_powered_player_eats_adversaries() {
        let mut state = contact_state(&[1, 2]);
        state.player.empower(500);

        let events = tick(&mut state, &TickInput::default());
        assert!(state.adversaries.is_empty());
        assert_eq!(state.round.lives, 3);
        assert_eq!(
            events,
            vec![
                GameEvent::AdversaryEaten { id: 1 },
                GameEvent::AdversaryEaten { id: 2 }
            ]
        );

        // Eaten adversaries stay gone
        tick(&mut state, &TickInput::default());
        assert!(state.adversaries.is_empty());
    }

    #[test]
    fn test_stale_timer_still_protects() {
        let mut state = contact_state(&[1]);
        // Timer left over from before a life loss, speed already normal
        state.player.power_timer_ms = 200;
        state.player.speed = SpeedMode::Normal;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.round.lives, 3);
        assert!(state.adversaries.is_empty());
    }

    #[test]
    fn test_guarded_adversary_ignored() {
        let mut state = contact_state(&[1]);
        state.adversaries[0].power_timer_ms = 1;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.round.lives, 3);
        assert_eq!(state.adversaries.len(), 1);
    }

    #[test]
    fn test_quit_stops_before_frame() {
        let mut state = quiet_state();
        let pos = state.player.pos;
        let mut input = TickInput::quit();
        input.keys = HeldKeys::only(Direction::Down);

        let events = tick(&mut state, &input);
        assert_eq!(events, vec![GameEvent::Quit]);
        assert_eq!(state.phase, GamePhase::Quit);
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput::hold(HeldKeys::only(Direction::Up)),
            TickInput::hold(HeldKeys::only(Direction::Left)),
            TickInput::default(),
            TickInput::hold(HeldKeys::only(Direction::Right)),
        ];

        for input in inputs.iter().cycle().take(200) {
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.round, state2.round);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.pellets.len(), state2.pellets.len());
    }
}
