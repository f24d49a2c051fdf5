//! Error types for the game rules engine.

use std::fmt;

/// Unique identifier for a player. Zero marks an unclaimed base.
pub type PlayerId = u32;

/// Unique identifier for a base within a match.
pub type BaseId = u32;

/// Coordinate axis, for tagging range validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Role a base plays in an order or movement, for tagging lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRole {
    /// The base troops depart from.
    Source,
    /// The base troops are headed to.
    Destination,
}

impl fmt::Display for BaseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseRole::Source => write!(f, "source"),
            BaseRole::Destination => write!(f, "destination"),
        }
    }
}

/// Validation failures raised by the rules engine.
///
/// Every failure is local and synchronous: the offending call returns the
/// error and no partial mutation is left behind. Callers branch on the
/// variant; nothing here is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Map generation requested with too few bases.
    InsufficientBases {
        /// The rejected base count.
        requested: usize,
    },
    /// Map generation requested with a level bound no level can be drawn from.
    InvalidLevelBound {
        /// The rejected bound.
        given: i64,
    },
    /// A coordinate range too narrow to place bases in.
    InvalidCoordinateRange {
        /// Which axis the range belongs to.
        axis: Axis,
        /// Lower end of the rejected range.
        min: i64,
        /// Upper end of the rejected range.
        max: i64,
    },
    /// Player assignment with a player count outside `[2, base_count]`.
    PlayerCount {
        /// Number of players requested.
        players: usize,
        /// Number of bases available.
        bases: usize,
    },
    /// The acting player owns no base at all.
    NoBasesForPlayer {
        /// The player without bases.
        player: PlayerId,
    },
    /// The acting player does not own the source base of their order.
    NotBaseOwner {
        /// The acting player.
        player: PlayerId,
        /// The base they tried to act on.
        base: BaseId,
    },
    /// A referenced base uid is absent from the live collection.
    BaseNotFound {
        /// The missing uid.
        base: BaseId,
        /// Whether it was referenced as source or destination.
        role: BaseRole,
    },
    /// An order resolved against a base that no longer holds enough troops.
    NotEnoughTroops {
        /// Troops the order asks for.
        requested: u32,
        /// Troops currently in the base.
        available: u32,
    },
    /// Upgrade attempted on a base already at the maximum level.
    NoFurtherUpgrades {
        /// The base at the level cap.
        base: BaseId,
    },
    /// A population value or update that would go negative.
    NegativePopulation {
        /// The rejected value.
        value: i64,
    },
    /// A negative units-until-upgrade value.
    NegativeUnits {
        /// The rejected value.
        value: i64,
    },
    /// A base level outside `[0, 14]`.
    InvalidLevel {
        /// The rejected value.
        value: i64,
    },
    /// An order submitted with a non-positive troop amount.
    InvalidTroopAmount {
        /// The rejected amount.
        amount: i64,
    },
    /// An order submitted for more troops than the source base holds.
    InsufficientTroops {
        /// Troops the order asks for.
        requested: i64,
        /// Troops in the base at submission time.
        available: u32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientBases { requested } => {
                write!(f, "need more than 2 bases, got {requested}")
            }
            GameError::InvalidLevelBound { given } => {
                write!(f, "max base level must be in [1, 14], got {given}")
            }
            GameError::InvalidCoordinateRange { axis, min, max } => {
                write!(f, "{axis} range [{min}, {max}] must span more than 1")
            }
            GameError::PlayerCount { players, bases } => {
                write!(f, "player count {players} outside [2, {bases}]")
            }
            GameError::NoBasesForPlayer { player } => {
                write!(f, "player {player} owns no bases")
            }
            GameError::NotBaseOwner { player, base } => {
                write!(f, "player {player} is not allowed to act on base {base}")
            }
            GameError::BaseNotFound { base, role } => {
                write!(f, "{role} base {base} not found")
            }
            GameError::NotEnoughTroops {
                requested,
                available,
            } => {
                write!(
                    f,
                    "not enough troops in base: requested {requested}, available {available}"
                )
            }
            GameError::NoFurtherUpgrades { base } => {
                write!(f, "base {base} is already at the maximum level")
            }
            GameError::NegativePopulation { value } => {
                write!(f, "population cannot be negative, got {value}")
            }
            GameError::NegativeUnits { value } => {
                write!(f, "cannot have negative units, got {value}")
            }
            GameError::InvalidLevel { value } => {
                write!(f, "base level must be between 0 and 14, got {value}")
            }
            GameError::InvalidTroopAmount { amount } => {
                write!(f, "cannot send {amount} troops (must be positive)")
            }
            GameError::InsufficientTroops {
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient troops: requested {requested}, but only {available} available"
                )
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for rules-engine operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_identifiers() {
        let err = GameError::BaseNotFound {
            base: 9999,
            role: BaseRole::Destination,
        };
        let text = err.to_string();
        assert!(text.contains("9999"));
        assert!(text.contains("destination"));
    }

    #[test]
    fn test_display_troop_counts() {
        let err = GameError::NotEnoughTroops {
            requested: 10,
            available: 5,
        };
        let text = err.to_string();
        assert!(text.contains("10"));
        assert!(text.contains('5'));
    }
}
