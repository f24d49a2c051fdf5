//! Randomized map generation and player assignment.
//!
//! Generation is a validated, finite, lazy sequence: all preconditions are
//! checked up front, then bases are produced one at a time. A generator is
//! one-shot; restarting means building a fresh one.

// Sequential uids and the validated level bound are small by construction
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use rand::Rng;

use crate::error::{Axis, GameError, GameResult, PlayerId};
use crate::game::base::{Base, Position, NEUTRAL};
use crate::game::levels::{LevelEntry, MAX_LEVEL};

/// Lazy producer of randomized bases inside fixed bounds.
///
/// Yields exactly `base_count` bases with sequential uids starting at 1,
/// all unclaimed, levels uniform in `[1, max_level]`, population uniform in
/// `[1, cap]` for the drawn level, and coordinates uniform (inclusive) per
/// axis. Display names come from the supplied name source; the engine
/// treats them as opaque labels.
#[derive(Debug)]
pub struct MapGenerator<'a, R: Rng, F: FnMut(&mut R) -> String> {
    rng: &'a mut R,
    name_source: F,
    base_count: usize,
    max_level: u8,
    x: (i64, i64),
    y: (i64, i64),
    z: (i64, i64),
    produced: usize,
}

impl<'a, R: Rng, F: FnMut(&mut R) -> String> MapGenerator<'a, R, F> {
    /// Validate bounds and build a generator.
    ///
    /// # Errors
    ///
    /// - [`GameError::InsufficientBases`] if `base_count <= 2`
    /// - [`GameError::InvalidLevelBound`] if no level can be drawn from
    ///   `[1, max_level]` (the bound is 0, negative, or above 14)
    /// - [`GameError::InvalidCoordinateRange`] if any axis range spans 1 or
    ///   less, tagged with the axis
    pub fn new(
        rng: &'a mut R,
        name_source: F,
        base_count: usize,
        max_level: i64,
        x: (i64, i64),
        y: (i64, i64),
        z: (i64, i64),
    ) -> GameResult<Self> {
        if base_count <= 2 {
            return Err(GameError::InsufficientBases {
                requested: base_count,
            });
        }
        if !(1..=i64::from(MAX_LEVEL)).contains(&max_level) {
            return Err(GameError::InvalidLevelBound { given: max_level });
        }
        for (axis, range) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if range.1 - range.0 <= 1 {
                return Err(GameError::InvalidCoordinateRange {
                    axis,
                    min: range.0,
                    max: range.1,
                });
            }
        }

        Ok(Self {
            rng,
            name_source,
            base_count,
            max_level: max_level as u8,
            x,
            y,
            z,
            produced: 0,
        })
    }
}

impl<R: Rng, F: FnMut(&mut R) -> String> Iterator for MapGenerator<'_, R, F> {
    type Item = Base;

    fn next(&mut self) -> Option<Base> {
        if self.produced >= self.base_count {
            return None;
        }
        self.produced += 1;

        let level = self.rng.gen_range(1..=self.max_level);
        let entry = LevelEntry::of(level)?;
        let population = self.rng.gen_range(1..=entry.max_population);
        let position = Position::new(
            self.rng.gen_range(self.x.0..=self.x.1),
            self.rng.gen_range(self.y.0..=self.y.1),
            self.rng.gen_range(self.z.0..=self.z.1),
        );
        let name = (self.name_source)(self.rng);

        Some(Base {
            uid: self.produced as u32,
            name,
            owner: NEUTRAL,
            population,
            units_until_upgrade: entry.upgrade_cost,
            position,
            level,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.base_count - self.produced;
        (remaining, Some(remaining))
    }
}

impl<R: Rng, F: FnMut(&mut R) -> String> ExactSizeIterator for MapGenerator<'_, R, F> {}

/// Claim one distinct base for each player, leaving the rest neutral.
///
/// Bases are drawn uniformly without replacement, so every player ends up
/// with exactly one base and no base hosts two players.
///
/// # Errors
///
/// Returns [`GameError::PlayerCount`] if the player count is outside
/// `[2, bases.len()]`.
pub fn assign_players<R: Rng>(
    rng: &mut R,
    bases: &mut [Base],
    players: &[PlayerId],
) -> GameResult<()> {
    if players.len() < 2 || players.len() > bases.len() {
        return Err(GameError::PlayerCount {
            players: players.len(),
            bases: bases.len(),
        });
    }

    let picks = rand::seq::index::sample(rng, bases.len(), players.len());
    for (idx, &player) in picks.iter().zip(players) {
        bases[idx].owner = player;
    }
    Ok(())
}
