//! Pellet field
//!
//! Holds the uncollected pellets of the current level. Random pellets are
//! placed anywhere in the arena, walls included.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{ARENA_SIZE, PELLET_RADIUS, POWER_PELLET_RADIUS, SEED_PELLETS};

/// A consumable pellet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec2,
    pub radius: f32,
    /// Power pellets grant the timed power state
    pub is_power: bool,
}

impl Pellet {
    pub fn regular(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PELLET_RADIUS,
            is_power: false,
        }
    }

    pub fn power(pos: Vec2) -> Self {
        Self {
            pos,
            radius: POWER_PELLET_RADIUS,
            is_power: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::square_around(self.pos, self.radius)
    }
}

/// Uncollected pellets, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct PelletField {
    pellets: Vec<Pellet>,
}

impl PelletField {
    pub fn new(pellets: Vec<Pellet>) -> Self {
        Self { pellets }
    }

    /// Build a fresh level layout: the seed pellets followed by `random_count` random ones
    pub fn populate<R: Rng>(random_count: usize, rng: &mut R) -> Self {
        let mut pellets = Vec::with_capacity(SEED_PELLETS.len() + random_count);
        pellets.extend(SEED_PELLETS.iter().map(|&(x, y, is_power)| {
            let pos = Vec2::new(x, y);
            if is_power {
                Pellet::power(pos)
            } else {
                Pellet::regular(pos)
            }
        }));

        let max = ARENA_SIZE as i32;
        pellets.extend((0..random_count).map(|_| {
            Pellet::regular(Vec2::new(
                rng.random_range(0..=max) as f32,
                rng.random_range(0..=max) as f32,
            ))
        }));

        Self { pellets }
    }

    /// Remove and return every pellet whose bounds touch `player_rect`
    ///
    /// Matches are collected over the whole field before anything is removed,
    /// so adjacent overlapping pellets are all eaten in the same frame.
    pub fn consume(&mut self, player_rect: &Rect) -> Vec<Pellet> {
        let (eaten, kept): (Vec<Pellet>, Vec<Pellet>) = std::mem::take(&mut self.pellets)
            .into_iter()
            .partition(|p| p.bounds().intersects(player_rect));
        self.pellets = kept;
        eaten
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn len(&self) -> usize {
        self.pellets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pellets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RANDOM_PELLET_COUNT;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_populate_layout() {
        let mut rng = Pcg32::seed_from_u64(42);
        let field = PelletField::populate(RANDOM_PELLET_COUNT, &mut rng);
        assert_eq!(field.len(), 50);

        let seeds = &field.pellets()[..5];
        assert_eq!(seeds[0].pos, Vec2::new(70.0, 70.0));
        assert_eq!(seeds[4].pos, Vec2::new(530.0, 530.0));
        assert!(seeds[2].is_power);
        assert_eq!(seeds[2].radius, POWER_PELLET_RADIUS);

        let power_count = field.pellets().iter().filter(|p| p.is_power).count();
        assert_eq!(power_count, 1);

        for pellet in &field.pellets()[5..] {
            assert!(!pellet.is_power);
            assert!((0.0..=ARENA_SIZE).contains(&pellet.pos.x));
            assert!((0.0..=ARENA_SIZE).contains(&pellet.pos.y));
        }
    }

    #[test]
    fn test_consume_adjacent_pellets_together() {
        let mut field = PelletField::new(vec![
            Pellet::regular(Vec2::new(100.0, 100.0)),
            Pellet::regular(Vec2::new(104.0, 100.0)),
            Pellet::regular(Vec2::new(300.0, 100.0)),
            Pellet::regular(Vec2::new(108.0, 100.0)),
        ]);
        let player = Rect::square_around(Vec2::new(110.0, 100.0), 20.0);

        let eaten = field.consume(&player);
        assert_eq!(eaten.len(), 3);
        // Insertion order is kept
        assert_eq!(eaten[0].pos.x, 100.0);
        assert_eq!(eaten[1].pos.x, 104.0);
        assert_eq!(eaten[2].pos.x, 108.0);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pellets()[0].pos.x, 300.0);
    }

    #[test]
    fn test_consume_nothing() {
        let mut field = PelletField::new(vec![Pellet::power(Vec2::new(300.0, 300.0))]);
        let eaten = field.consume(&Rect::square_around(Vec2::new(20.0, 20.0), 20.0));
        assert!(eaten.is_empty());
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_power_pellet_reach() {
        // Power pellet bounds extend 10 units, player bounds 20: centers 30 apart touch
        let mut field = PelletField::new(vec![Pellet::power(Vec2::new(300.0, 300.0))]);
        let eaten = field.consume(&Rect::square_around(Vec2::new(330.0, 300.0), 20.0));
        assert_eq!(eaten.len(), 1);
        assert!(field.is_empty());
    }
}
