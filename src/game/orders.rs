//! Order classification and resolution.
//!
//! A request is classified once into one of three kinds, then applied:
//! upgrades mutate the source base in place, transfers and attacks deduct
//! troops immediately and put them in flight. Validation happens fully
//! before any mutation.

use serde::{Deserialize, Serialize};

use crate::error::{BaseRole, GameError, GameResult, PlayerId};
use crate::game::base::{base_by_uid, base_by_uid_mut, Base};
use crate::game::levels::{LevelEntry, MAX_LEVEL};
use crate::game::state::{Movement, MovementId, OrderRequest};

/// The three things an order can mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Source and destination are the same base: commit troops to its
    /// upgrade.
    Upgrade,
    /// Destination is another base of the requesting player.
    Transfer,
    /// Destination is not owned by the requesting player (enemy or
    /// unclaimed).
    Attack,
}

/// What resolving an order produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The source base after an upgrade order was applied.
    Upgraded(Base),
    /// Troops put in flight by a transfer or attack order.
    Dispatched(Movement),
}

/// Classify a request for the given player.
///
/// # Errors
///
/// - [`GameError::NoBasesForPlayer`] if the player owns no base at all
/// - [`GameError::BaseNotFound`] if source or destination uid is absent,
///   tagged with the role that failed
/// - [`GameError::NotBaseOwner`] if the player does not own the source
pub fn classify(bases: &[Base], request: &OrderRequest, player: PlayerId) -> GameResult<OrderKind> {
    if !bases.iter().any(|b| b.owner == player) {
        return Err(GameError::NoBasesForPlayer { player });
    }
    let source = base_by_uid(bases, request.source, BaseRole::Source)?;
    let dest = base_by_uid(bases, request.dest, BaseRole::Destination)?;
    if source.owner != player {
        return Err(GameError::NotBaseOwner {
            player,
            base: source.uid,
        });
    }

    if request.source == request.dest {
        Ok(OrderKind::Upgrade)
    } else if dest.owner == player {
        Ok(OrderKind::Transfer)
    } else {
        Ok(OrderKind::Attack)
    }
}

/// Classify and apply a request for the given player.
///
/// Upgrades mutate the source base and return it; transfers and attacks
/// deduct the troops from the source immediately (troops leave on dispatch,
/// not on arrival) and return the created movement, which the caller owns
/// from then on. `movement_id` is the id to stamp on a dispatched movement.
///
/// # Errors
///
/// Everything [`classify`] raises, plus:
///
/// - [`GameError::NotEnoughTroops`] if the source no longer holds the
///   requested amount (population may have changed since submission)
/// - [`GameError::NoFurtherUpgrades`] for an upgrade at the maximum level
pub fn resolve(
    bases: &mut [Base],
    request: &OrderRequest,
    player: PlayerId,
    movement_id: MovementId,
) -> GameResult<OrderOutcome> {
    let kind = classify(bases, request, player)?;

    let source = base_by_uid(bases, request.source, BaseRole::Source)?;
    if request.amount > source.population {
        return Err(GameError::NotEnoughTroops {
            requested: request.amount,
            available: source.population,
        });
    }

    match kind {
        OrderKind::Upgrade => {
            let source = base_by_uid_mut(bases, request.source, BaseRole::Source)?;
            if source.level >= MAX_LEVEL {
                return Err(GameError::NoFurtherUpgrades { base: source.uid });
            }

            // The committed amount tops up the population before the cost
            // check, so a transfer-into-self can fund an upgrade in progress.
            let total = source.population.saturating_add(request.amount);
            if total >= source.units_until_upgrade {
                source.level += 1;
                source.population = total - source.units_until_upgrade;
                source.units_until_upgrade =
                    LevelEntry::of(source.level).map_or(0, |e| e.upgrade_cost);
            } else {
                source.population = total;
            }
            Ok(OrderOutcome::Upgraded(source.clone()))
        }
        OrderKind::Transfer | OrderKind::Attack => {
            let dest = base_by_uid(bases, request.dest, BaseRole::Destination)?.clone();
            let source = base_by_uid_mut(bases, request.source, BaseRole::Source)?;
            source.adjust_population(-i64::from(request.amount))?;
            let movement = Movement::new(movement_id, player, source, &dest, request.amount);
            Ok(OrderOutcome::Dispatched(movement))
        }
    }
}
