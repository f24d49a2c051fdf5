//! Outpost CLI - Create and simulate territorial strategy matches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Outpost - a tick-driven territorial strategy rules engine
#[derive(Parser, Debug)]
#[command(name = "outpost")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a match with every seat played by the targeting AI
    Run {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "100")]
        ticks: u64,

        /// Number of players (2 or more)
        #[arg(short, long, default_value = "2")]
        players: u32,

        /// Number of bases to generate
        #[arg(short, long, default_value = "12")]
        bases: usize,

        /// Highest base level the generator may draw (1-14)
        #[arg(short, long, default_value = "5")]
        max_level: i64,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress tick-by-tick output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate a map and print it
    Gen {
        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of bases to generate
        #[arg(short, long, default_value = "12")]
        bases: usize,

        /// Highest base level the generator may draw (1-14)
        #[arg(short, long, default_value = "5")]
        max_level: i64,

        /// Claim one base each for this many players (0 = leave all neutral)
        #[arg(short, long, default_value = "0")]
        players: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            seed,
            ticks,
            players,
            bases,
            max_level,
            format,
            quiet,
        } => cli::run::execute(seed, ticks, players, bases, max_level, format, quiet),

        Commands::Gen {
            seed,
            bases,
            max_level,
            players,
            format,
        } => cli::gen::execute(seed, bases, max_level, players, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
