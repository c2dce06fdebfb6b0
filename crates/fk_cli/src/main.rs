//! Quick-match CLI
//!
//! Runs the engine on a JSON match request, either once or as a seeded batch
//! for balancing goals per match.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fk_core::{BatchRunner, GoalStats, MatchRequest, SimulationConfig};

#[derive(Parser)]
#[command(name = "fk")]
#[command(about = "Simulate quick matches from JSON requests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one match and print the JSON response
    Simulate {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Override the request's seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate the request's fixture many times and print goal statistics
    Stats {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Number of matches to simulate
        #[arg(long, default_value_t = 1000)]
        matches: u32,

        /// Base seed (defaults to the request's seed)
        #[arg(long)]
        seed: Option<u64>,

        /// YAML simulation config, replaces the request's config
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { request, seed } => {
            let mut req = load_request(&request)?;
            if let Some(seed) = seed {
                req.seed = seed;
            }
            let response = fk_core::api::simulate_request(req);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Stats { request, matches, seed, config } => {
            let req = load_request(&request)?;
            let config = match config {
                Some(path) => SimulationConfig::from_yaml_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => req.simulation_config(),
            };
            let seed = seed.unwrap_or(req.seed);
            log::info!("config: {:?}", config);

            let runner = BatchRunner::new(config, seed);
            let stats = runner.stats(&req.into_fixture(), matches);
            print_summary(&stats);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

fn load_request(path: &Path) -> Result<MatchRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading request {}", path.display()))?;
    MatchRequest::from_json(&text).with_context(|| format!("parsing request {}", path.display()))
}

fn print_summary(stats: &GoalStats) {
    eprintln!("matches:        {}", stats.matches);
    eprintln!(
        "goals/match:    {:.2} ({:.2} - {:.2})",
        stats.mean_total_goals, stats.mean_home_goals, stats.mean_away_goals
    );
    eprintln!(
        "home/draw/away: {:.1}% / {:.1}% / {:.1}%",
        stats.home_win_rate * 100.0,
        stats.draw_rate * 100.0,
        stats.away_win_rate * 100.0
    );
    eprintln!("shootouts:      {:.1}%", stats.shootout_rate * 100.0);
}
