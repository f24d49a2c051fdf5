//! Match session: the caller-owned context for one running game.
//!
//! The rules engine itself is stateless between calls; everything mutable
//! about a match (bases, in-flight movements, tick counter) lives here and
//! is passed by reference into the core operations. One session is one
//! match; concurrent sessions must not share collections, and access to a
//! single session must be serialized by the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BaseId, BaseRole, GameResult, PlayerId};
use crate::game::base::{base_by_uid, Base};
use crate::game::mapgen::{assign_players, MapGenerator};
use crate::game::movement::{advance, MovementOutcome};
use crate::game::orders::{resolve, OrderOutcome};
use crate::game::state::{
    MatchState, Movement, MovementId, MovementReport, MovementRules, OrderRequest,
};
use crate::game::strategy::plan_orders;

/// Parameters for creating a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of bases to generate (must exceed 2).
    pub base_count: usize,
    /// Highest base level the generator may draw, in `[1, 14]`.
    pub max_level: i64,
    /// Inclusive x coordinate range.
    pub x: (i64, i64),
    /// Inclusive y coordinate range.
    pub y: (i64, i64),
    /// Inclusive z coordinate range.
    pub z: (i64, i64),
    /// Movement mechanics for the match.
    #[serde(default)]
    pub rules: MovementRules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            base_count: 12,
            max_level: 5,
            x: (-50, 50),
            y: (-50, 50),
            z: (-50, 50),
            rules: MovementRules::default(),
        }
    }
}

/// All mutable state of one match.
#[derive(Debug, Clone)]
pub struct GameState {
    match_state: MatchState,
    bases: Vec<Base>,
    movements: Vec<Movement>,
    rules: MovementRules,
    next_movement_id: MovementId,
}

impl GameState {
    /// Build a session around an already-generated, already-assigned base
    /// collection.
    #[must_use]
    pub fn new(
        match_id: u64,
        bases: Vec<Base>,
        players: &[PlayerId],
        rules: MovementRules,
    ) -> Self {
        Self {
            match_state: MatchState::new(match_id, players),
            bases,
            movements: Vec::new(),
            rules,
            next_movement_id: 1,
        }
    }

    /// Generate a fresh match: random map, then one base per player.
    ///
    /// # Errors
    ///
    /// Propagates the generator's and the assignment's validation failures.
    pub fn generate<R: Rng, F: FnMut(&mut R) -> String>(
        rng: &mut R,
        name_source: F,
        config: &MatchConfig,
        players: &[PlayerId],
        match_id: u64,
    ) -> GameResult<Self> {
        let mut bases: Vec<Base> = MapGenerator::new(
            rng,
            name_source,
            config.base_count,
            config.max_level,
            config.x,
            config.y,
            config.z,
        )?
        .collect();
        assign_players(rng, &mut bases, players)?;
        Ok(Self::new(match_id, bases, players, config.rules))
    }

    /// The match bookkeeping record.
    #[must_use]
    pub const fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// The live base collection.
    #[must_use]
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Movements currently in flight, in creation order.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// The movement mechanics this match runs under.
    #[must_use]
    pub const fn rules(&self) -> &MovementRules {
        &self.rules
    }

    /// Wire-shape reports for every in-flight movement.
    #[must_use]
    pub fn movement_reports(&self) -> Vec<MovementReport> {
        self.movements.iter().map(Movement::report).collect()
    }

    /// Validate and apply one player order.
    ///
    /// Dispatched movements are retained by the session and advanced on
    /// subsequent ticks; upgrades mutate the base in place.
    ///
    /// # Errors
    ///
    /// Propagates submission-time validation
    /// ([`OrderRequest::new`]) and resolution failures
    /// ([`resolve`]).
    pub fn submit_order(
        &mut self,
        player: PlayerId,
        source: BaseId,
        dest: BaseId,
        amount: i64,
    ) -> GameResult<OrderOutcome> {
        let source_base = base_by_uid(&self.bases, source, BaseRole::Source)?;
        let dest_base = base_by_uid(&self.bases, dest, BaseRole::Destination)?;
        let request = OrderRequest::new(source_base, dest_base, amount)?;

        let outcome = resolve(&mut self.bases, &request, player, self.next_movement_id)?;
        if let OrderOutcome::Dispatched(movement) = &outcome {
            self.movements.push(*movement);
            self.next_movement_id += 1;
        }
        Ok(outcome)
    }

    /// Advance every in-flight movement by one tick, in creation order,
    /// then bump the tick counter.
    ///
    /// Arrived and perished movements are dropped; arrivals are credited to
    /// their destination base.
    ///
    /// # Errors
    ///
    /// Fails only if a movement references a base missing from the live
    /// collection, which cannot happen for movements this session created.
    pub fn tick(&mut self) -> GameResult<()> {
        let mut survivors = Vec::with_capacity(self.movements.len());
        for movement in &self.movements {
            match advance(&mut self.bases, *movement, &self.rules)? {
                MovementOutcome::EnRoute(updated) => survivors.push(updated),
                MovementOutcome::Arrived(_) | MovementOutcome::Perished => {}
            }
        }
        self.movements = survivors;
        self.match_state.advance_tick();
        Ok(())
    }

    /// Compute the automated order batch for one player.
    #[must_use]
    pub fn plan_for(&self, player: PlayerId) -> Vec<OrderRequest> {
        plan_orders(&self.bases, player, &self.rules)
    }
}
