//! Run command implementation: a seeded AI-vs-AI match.

use super::{CliError, OutputFormat};
use outpost::game::{projected_survivors, MovementReport};
use outpost::names;
use outpost::{Base, GameState, MatchConfig, MatchState, PlayerId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

/// Full-session report for JSON output.
#[derive(Serialize)]
struct JsonMatchReport<'a> {
    game_state: &'a MatchState,
    bases: &'a [Base],
    actions: Vec<MovementReport>,
}

/// Execute the run command.
///
/// Every seat is played by the targeting strategy: each tick, every player
/// plans and submits a batch of orders, then all movements advance once.
///
/// # Errors
///
/// Returns an error if match creation or an order fails.
#[allow(clippy::cast_possible_truncation)] // nanosecond seed folding is intentional
pub(crate) fn execute(
    seed: Option<u64>,
    ticks: u64,
    players: u32,
    base_count: usize,
    max_level: i64,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let player_ids: Vec<PlayerId> = (1..=players).collect();
    let config = MatchConfig {
        base_count,
        max_level,
        ..MatchConfig::default()
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = GameState::generate(&mut rng, names::slug, &config, &player_ids, 1)?;

    if !quiet {
        println!("Running match with seed {seed}...");
        println!("Players: {players}, bases: {base_count}, ticks: {ticks}");
        println!();
    }

    for _ in 0..ticks {
        for &player in &player_ids {
            let orders = state.plan_for(player);
            for order in orders {
                if !quiet && order.source != order.dest {
                    report_attack(&state, player, order.source, order.dest, order.amount);
                }
                state.submit_order(player, order.source, order.dest, i64::from(order.amount))?;
            }
        }
        state.tick()?;

        if !quiet {
            println!(
                "tick {:>4}: {} movements in flight",
                state.match_state().tick,
                state.movements().len()
            );
        }
    }

    match format {
        OutputFormat::Text => print_summary(&state),
        OutputFormat::Json => {
            let report = JsonMatchReport {
                game_state: state.match_state(),
                bases: state.bases(),
                actions: state.movement_reports(),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Print a planned attack with its straight-line survivor estimate.
fn report_attack(state: &GameState, player: PlayerId, source: u32, dest: u32, amount: u32) {
    let source_base = state.bases().iter().find(|b| b.uid == source);
    let dest_base = state.bases().iter().find(|b| b.uid == dest);
    if let (Some(src), Some(dst)) = (source_base, dest_base) {
        let survivors = projected_survivors(src, dst, state.rules(), amount);
        println!(
            "player {player}: {} -> {} ({amount} troops, ~{survivors} expected on arrival)",
            src.name, dst.name
        );
    }
}

/// Print the final standing per player.
fn print_summary(state: &GameState) {
    println!();
    println!("=== FINAL STATE (tick {}) ===", state.match_state().tick);
    println!();

    let mut owners: Vec<PlayerId> = state.bases().iter().map(|b| b.owner).collect();
    owners.sort_unstable();
    owners.dedup();

    for owner in owners {
        let held: Vec<&Base> = state.bases().iter().filter(|b| b.owner == owner).collect();
        let troops: u64 = held.iter().map(|b| u64::from(b.population)).sum();
        let label = if owner == outpost::game::NEUTRAL {
            "neutral".to_string()
        } else {
            format!("player {owner}")
        };
        println!("{label}: {} bases, {troops} troops garrisoned", held.len());
        for base in held {
            println!(
                "  [{:>3}] {:<24} level {:>2}, population {:>5} at ({}, {}, {})",
                base.uid,
                base.name,
                base.level,
                base.population,
                base.position.x,
                base.position.y,
                base.position.z
            );
        }
    }
}
