//! Gen command implementation: generate and print a map.

use super::{CliError, OutputFormat};
use outpost::game::{assign_players, MapGenerator};
use outpost::names;
use outpost::{Base, MatchConfig, PlayerId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Execute the gen command.
///
/// # Errors
///
/// Returns an error if the generation parameters are invalid.
pub(crate) fn execute(
    seed: u64,
    base_count: usize,
    max_level: i64,
    players: u32,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = MatchConfig {
        base_count,
        max_level,
        ..MatchConfig::default()
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut bases: Vec<Base> = MapGenerator::new(
        &mut rng,
        names::slug,
        config.base_count,
        config.max_level,
        config.x,
        config.y,
        config.z,
    )?
    .collect();

    if players >= 2 {
        let player_ids: Vec<PlayerId> = (1..=players).collect();
        assign_players(&mut rng, &mut bases, &player_ids)?;
    }

    match format {
        OutputFormat::Text => {
            for base in &bases {
                println!(
                    "[{:>3}] {:<24} owner {:>2}, level {:>2}, population {:>5} at ({}, {}, {})",
                    base.uid,
                    base.name,
                    base.owner,
                    base.level,
                    base.population,
                    base.position.x,
                    base.position.y,
                    base.position.z
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&bases)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
