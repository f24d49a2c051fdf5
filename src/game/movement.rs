//! Per-tick movement advancement.
//!
//! One call advances exactly one in-flight movement by one tick; the
//! caller's tick loop drives every live movement once per tick. Travel
//! time is measured on the squared-distance metric: a movement arrives
//! once it has travelled that many ticks.

use crate::error::{BaseRole, GameResult};
use crate::game::base::{base_by_uid, base_by_uid_mut, Base};
use crate::game::state::{Movement, MovementRules};

/// What one tick of travel did to a movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementOutcome {
    /// Still travelling; the updated movement replaces the old one.
    EnRoute(Movement),
    /// Arrived; the destination base after the troops were delivered. The
    /// movement is done and must be dropped by the caller.
    Arrived(Base),
    /// Every troop died in transit; the movement is done and must be
    /// dropped by the caller.
    Perished,
}

/// Advance one movement by one tick.
///
/// Past the grace period, `death_rate` troops die each en-route tick.
/// On arrival the surviving amount is added to the destination's
/// population; arrival takes precedence over attrition on the same tick.
///
/// # Errors
///
/// Returns [`GameError::BaseNotFound`](crate::error::GameError::BaseNotFound)
/// tagged source or destination if either base has left the live
/// collection.
pub fn advance(
    bases: &mut [Base],
    movement: Movement,
    rules: &MovementRules,
) -> GameResult<MovementOutcome> {
    base_by_uid(bases, movement.source, BaseRole::Source)?;
    base_by_uid(bases, movement.dest, BaseRole::Destination)?;

    let total = movement.total_distance();
    let mut movement = movement;
    movement.travelled += 1;

    if movement.travelled < total {
        if movement.travelled > rules.grace_period {
            movement.amount = movement.amount.saturating_sub(rules.death_rate);
            if movement.amount == 0 {
                return Ok(MovementOutcome::Perished);
            }
        }
        return Ok(MovementOutcome::EnRoute(movement));
    }

    let dest = base_by_uid_mut(bases, movement.dest, BaseRole::Destination)?;
    dest.adjust_population(i64::from(movement.amount))?;
    Ok(MovementOutcome::Arrived(dest.clone()))
}
