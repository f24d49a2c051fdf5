// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Outpost: the rules engine of a tick-driven territorial strategy game.
//!
//! Players own bases distributed in 3D space, send troops between bases,
//! attack rivals, and upgrade base levels. Movement is continuous over
//! tick-discretized time with distance-based attrition past a grace
//! period. An automated targeting module can play a seat by pricing every
//! candidate conquest and greedily assigning the cheapest profitable
//! attacks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Session (GameState)            │
//! ├──────────┬──────────┬───────────────┤
//! │  Orders  │ Movement │   Targeting   │
//! ├──────────┴──────────┴───────────────┤
//! │  Entities (bases, levels, match)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! The core is single-threaded and stateless between calls: every
//! operation works on collections owned by the caller's session, and every
//! failure is a typed [`GameError`] variant rather than a panic.

pub mod error;
pub mod game;
pub mod names;

pub use error::{Axis, BaseId, BaseRole, GameError, GameResult, PlayerId};

// Re-export key game types at crate root for convenience
pub use game::{
    Base, GameState, MatchConfig, MatchState, Movement, MovementRules, OrderKind, OrderOutcome,
    OrderRequest, Position,
};
