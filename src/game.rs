//! Rules core for the territorial strategy game.
//!
//! Implements the game rules over caller-owned collections:
//! - Level table (population caps, upgrade costs, spawn rates)
//! - Bases positioned in 3D space, map generation and player assignment
//! - Order classification and resolution (transfer / upgrade / attack)
//! - Per-tick movement with grace-period attrition
//! - Automated targeting for AI-controlled players

mod base;
mod levels;
mod mapgen;
mod movement;
mod orders;
mod session;
mod state;
mod strategy;

pub use base::{base_by_uid, base_by_uid_mut, Base, Position, NEUTRAL};
pub use levels::{LevelEntry, LEVEL_TABLE, MAX_LEVEL};
pub use mapgen::{assign_players, MapGenerator};
pub use movement::{advance, MovementOutcome};
pub use orders::{classify, resolve, OrderKind, OrderOutcome};
pub use session::{GameState, MatchConfig};
pub use state::{
    MatchState, Movement, MovementId, MovementProgress, MovementReport, MovementRules,
    OrderRequest,
};
pub use strategy::{conquest_cost, defenders_at_arrival, plan_orders, projected_survivors};
