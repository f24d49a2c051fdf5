//! Base entities and positions.

use serde::{Deserialize, Serialize};

use crate::error::{BaseId, BaseRole, GameError, GameResult, PlayerId};
use crate::game::levels::MAX_LEVEL;

/// Owner value marking a base as unclaimed.
pub const NEUTRAL: PlayerId = 0;

/// A point in the match's 3D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to another position.
    ///
    /// This is the canonical travel metric: one tick of movement covers one
    /// unit of it, and the targeting strategy prices conquests with it. It
    /// is intentionally not square-rooted.
    #[must_use]
    #[allow(clippy::cast_sign_loss)] // squared terms are non-negative
    pub const fn travel_distance(&self, other: &Position) -> u64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz) as u64
    }

    /// Straight-line Euclidean distance to another position, floored.
    ///
    /// Used only by the attrition/reinforcement estimate helpers. Note that
    /// travel time does NOT use this metric; the engine keeps the two
    /// definitions separate on purpose (see `game::strategy`).
    #[must_use]
    pub fn line_distance(&self, other: &Position) -> u64 {
        self.travel_distance(other).isqrt()
    }
}

/// A player- or unclaimed-owned location with population, level, and position.
///
/// Bases are created by the map generator and mutated by the order resolver
/// and the movement simulator. They are never destroyed within a match: a
/// depopulated base simply becomes capturable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    /// Unique identifier, stable for the lifetime of a match.
    pub uid: BaseId,
    /// Display name. Opaque to the engine.
    pub name: String,
    /// Owning player, or [`NEUTRAL`] for an unclaimed base.
    #[serde(rename = "player")]
    pub owner: PlayerId,
    /// Current number of troops in the base.
    pub population: u32,
    /// Troops still needed to complete the next upgrade.
    pub units_until_upgrade: u32,
    /// Location in the match's coordinate space.
    pub position: Position,
    /// Current level, in `[0, 14]`. Levels 1 and up index the level table.
    pub level: u8,
}

impl Base {
    /// Create a new base, validating raw field values.
    ///
    /// Population, units and level arrive as raw integers because callers
    /// construct bases from untrusted transport input.
    ///
    /// # Errors
    ///
    /// - [`GameError::NegativePopulation`] if `population` is negative or
    ///   unrepresentable
    /// - [`GameError::NegativeUnits`] if `units_until_upgrade` is negative or
    ///   unrepresentable
    /// - [`GameError::InvalidLevel`] if `level` is outside `[0, 14]`
    pub fn new(
        uid: BaseId,
        name: impl Into<String>,
        owner: PlayerId,
        population: i64,
        units_until_upgrade: i64,
        position: Position,
        level: i64,
    ) -> GameResult<Self> {
        let population = u32::try_from(population)
            .map_err(|_| GameError::NegativePopulation { value: population })?;
        let units_until_upgrade = u32::try_from(units_until_upgrade).map_err(|_| {
            GameError::NegativeUnits {
                value: units_until_upgrade,
            }
        })?;
        if !(0..=i64::from(MAX_LEVEL)).contains(&level) {
            return Err(GameError::InvalidLevel { value: level });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = level as u8;

        Ok(Self {
            uid,
            name: name.into(),
            owner,
            population,
            units_until_upgrade,
            position,
            level,
        })
    }

    /// Whether the base is owned by a player.
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.owner != NEUTRAL
    }

    /// Apply a signed population change.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NegativePopulation`] if the result would go
    /// below zero; the base is left unchanged in that case.
    pub fn adjust_population(&mut self, delta: i64) -> GameResult<()> {
        let updated = i64::from(self.population) + delta;
        if updated < 0 {
            return Err(GameError::NegativePopulation { value: updated });
        }
        self.population = u32::try_from(updated).unwrap_or(u32::MAX);
        Ok(())
    }
}

/// Find a base by uid in the live collection.
///
/// # Errors
///
/// Returns [`GameError::BaseNotFound`] tagged with `role` if no base
/// carries the uid.
pub fn base_by_uid(bases: &[Base], uid: BaseId, role: BaseRole) -> GameResult<&Base> {
    bases
        .iter()
        .find(|b| b.uid == uid)
        .ok_or(GameError::BaseNotFound { base: uid, role })
}

/// Find a base by uid in the live collection, mutably.
///
/// # Errors
///
/// Returns [`GameError::BaseNotFound`] tagged with `role` if no base
/// carries the uid.
pub fn base_by_uid_mut(
    bases: &mut [Base],
    uid: BaseId,
    role: BaseRole,
) -> GameResult<&mut Base> {
    bases
        .iter_mut()
        .find(|b| b.uid == uid)
        .ok_or(GameError::BaseNotFound { base: uid, role })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_base(uid: BaseId, owner: PlayerId, population: i64) -> Base {
        Base::new(
            uid,
            format!("base-{uid}"),
            owner,
            population,
            10,
            Position::new(0, 0, 0),
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_travel_distance_is_squared() {
        let a = Position::new(0, 0, 0);
        let b = Position::new(3, 4, 0);
        assert_eq!(a.travel_distance(&b), 25);
    }

    #[test]
    fn test_travel_distance_symmetric() {
        let a = Position::new(-5, 2, 7);
        let b = Position::new(3, -4, 1);
        assert_eq!(a.travel_distance(&b), b.travel_distance(&a));
    }

    #[test]
    fn test_line_distance_floors() {
        let a = Position::new(0, 0, 0);
        let b = Position::new(3, 4, 0);
        assert_eq!(a.line_distance(&b), 5);

        // sqrt(2) floors to 1
        let c = Position::new(1, 1, 0);
        assert_eq!(a.line_distance(&c), 1);
    }

    #[test]
    fn test_new_rejects_negative_population() {
        let result = Base::new(1, "a", NEUTRAL, -1, 0, Position::new(0, 0, 0), 1);
        assert_eq!(
            result.unwrap_err(),
            GameError::NegativePopulation { value: -1 }
        );
    }

    #[test]
    fn test_new_rejects_negative_units() {
        let result = Base::new(1, "a", NEUTRAL, 0, -3, Position::new(0, 0, 0), 1);
        assert_eq!(result.unwrap_err(), GameError::NegativeUnits { value: -3 });
    }

    #[test]
    fn test_new_rejects_out_of_range_level() {
        for level in [-1, 15] {
            let result = Base::new(1, "a", NEUTRAL, 0, 0, Position::new(0, 0, 0), level);
            assert_eq!(result.unwrap_err(), GameError::InvalidLevel { value: level });
        }
    }

    #[test]
    fn test_level_zero_is_valid() {
        let base = Base::new(1, "a", NEUTRAL, 0, 0, Position::new(0, 0, 0), 0).unwrap();
        assert_eq!(base.level, 0);
        assert!(!base.is_claimed());
    }

    #[test]
    fn test_adjust_population() {
        let mut base = test_base(1, 1, 10);
        base.adjust_population(5).unwrap();
        assert_eq!(base.population, 15);
        base.adjust_population(-15).unwrap();
        assert_eq!(base.population, 0);
    }

    #[test]
    fn test_adjust_population_rejects_underflow() {
        let mut base = test_base(1, 1, 10);
        let result = base.adjust_population(-11);
        assert_eq!(
            result.unwrap_err(),
            GameError::NegativePopulation { value: -1 }
        );
        assert_eq!(base.population, 10, "base must be unchanged on failure");
    }

    #[test]
    fn test_base_by_uid() {
        let bases = vec![test_base(1, 1, 10), test_base(2, 2, 10)];
        assert_eq!(base_by_uid(&bases, 2, BaseRole::Source).unwrap().uid, 2);
        assert_eq!(
            base_by_uid(&bases, 9, BaseRole::Destination).unwrap_err(),
            GameError::BaseNotFound {
                base: 9,
                role: BaseRole::Destination
            }
        );
    }
}
