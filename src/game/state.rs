//! Match-level records and in-flight movement state.

use serde::{Deserialize, Serialize};

use crate::error::{BaseId, GameError, GameResult, PlayerId};
use crate::game::base::{Base, Position};

/// Unique identifier for an in-flight movement.
///
/// Ids are allocated monotonically per session, so ascending id order is
/// ascending creation order. Tick processing iterates movements in that
/// order to stay deterministic across runs.
pub type MovementId = u64;

/// Troop movement mechanics shared by the simulator and the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRules {
    /// Ticks a movement may travel before attrition starts.
    pub grace_period: u64,
    /// Troops lost per tick once the grace period is exceeded.
    pub death_rate: u32,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self {
            grace_period: 10,
            death_rate: 1,
        }
    }
}

/// Bookkeeping for whose match and whose turn an order applies to.
///
/// The engine is agnostic to turn-order policy; this record only tracks
/// context. Invariants (at least two players, a positive active player,
/// `remaining_players <= player_count`) hold by construction because
/// sessions build it from the same validated player list they assign
/// bases from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Unique match identifier.
    #[serde(rename = "uid")]
    pub match_id: u64,
    /// Current tick, monotonically increasing.
    pub tick: u64,
    /// Total number of players in the match.
    pub player_count: u32,
    /// Players still in the match.
    pub remaining_players: u32,
    /// The player current orders apply to.
    #[serde(rename = "player")]
    pub active_player: PlayerId,
}

impl MatchState {
    /// Create the state record for a fresh match.
    ///
    /// `players` must be the validated, non-empty id list the match was
    /// created with; the first entry becomes the active player.
    #[must_use]
    pub fn new(match_id: u64, players: &[PlayerId]) -> Self {
        debug_assert!(players.len() >= 2, "matches need at least two players");
        #[allow(clippy::cast_possible_truncation)]
        let player_count = players.len() as u32;
        Self {
            match_id,
            tick: 0,
            player_count,
            remaining_players: player_count,
            active_player: players.first().copied().unwrap_or(1),
        }
    }

    /// Advance the tick counter after a full tick pass.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

/// A player's validated intent to move troops.
///
/// Construction enforces the submission-time checks: the amount is positive
/// and does not exceed the source population *right now*. Population may
/// change before the order resolves, so the resolver re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Base the troops depart from.
    #[serde(rename = "src")]
    pub source: BaseId,
    /// Base the troops are headed to.
    pub dest: BaseId,
    /// Number of troops to move.
    pub amount: u32,
}

impl OrderRequest {
    /// Validate and build an order against the current source base.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidTroopAmount`] if `amount` is not positive
    /// - [`GameError::InsufficientTroops`] if `amount` exceeds the source
    ///   base's population at submission time
    pub fn new(source: &Base, dest: &Base, amount: i64) -> GameResult<Self> {
        if amount <= 0 {
            return Err(GameError::InvalidTroopAmount { amount });
        }
        if i64::from(source.population) < amount {
            return Err(GameError::InsufficientTroops {
                requested: amount,
                available: source.population,
            });
        }
        let amount =
            u32::try_from(amount).map_err(|_| GameError::InvalidTroopAmount { amount })?;
        Ok(Self {
            source: source.uid,
            dest: dest.uid,
            amount,
        })
    }
}

/// Troops in transit between two bases.
///
/// Positions are snapshotted at creation so later base mutations do not
/// alter a movement already under way. `amount` only ever decreases;
/// `travelled` increases by exactly one per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier for this movement.
    pub id: MovementId,
    /// Uid of the base the troops departed from.
    #[serde(rename = "src")]
    pub source: BaseId,
    /// Uid of the base the troops are headed to.
    pub dest: BaseId,
    /// Source position at dispatch time.
    pub source_position: Position,
    /// Destination position at dispatch time.
    pub dest_position: Position,
    /// Player the troops belong to.
    #[serde(rename = "player")]
    pub owner: PlayerId,
    /// Troops still alive in transit.
    pub amount: u32,
    /// Ticks of travel completed.
    pub travelled: u64,
}

impl Movement {
    /// Dispatch a new movement between two bases.
    #[must_use]
    pub fn new(id: MovementId, owner: PlayerId, source: &Base, dest: &Base, amount: u32) -> Self {
        Self {
            id,
            source: source.uid,
            dest: dest.uid,
            source_position: source.position,
            dest_position: dest.position,
            owner,
            amount,
            travelled: 0,
        }
    }

    /// Total travel distance for this movement, on the squared metric.
    #[must_use]
    pub const fn total_distance(&self) -> u64 {
        self.source_position.travel_distance(&self.dest_position)
    }

    /// Build the wire-shape progress report for this movement.
    #[must_use]
    pub const fn report(&self) -> MovementReport {
        MovementReport {
            id: self.id,
            source: self.source,
            dest: self.dest,
            owner: self.owner,
            amount: self.amount,
            progress: MovementProgress {
                distance: self.total_distance(),
                amount: self.travelled,
            },
        }
    }
}

/// Travel progress of a movement, as transmitted to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementProgress {
    /// Total travel distance (squared metric).
    pub distance: u64,
    /// Ticks of travel completed.
    pub amount: u64,
}

/// Serialized shape of an in-flight movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementReport {
    /// Movement identifier.
    pub id: MovementId,
    /// Source base uid.
    #[serde(rename = "src")]
    pub source: BaseId,
    /// Destination base uid.
    pub dest: BaseId,
    /// Owning player.
    #[serde(rename = "player")]
    pub owner: PlayerId,
    /// Troops still alive in transit.
    pub amount: u32,
    /// Travel progress.
    pub progress: MovementProgress,
}
