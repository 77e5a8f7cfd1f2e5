//! squad CLI
//!
//! Roster JSON → two balanced teams

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use squad_core::api::{
    balance_teams, request_schema_json, BalanceRequest, BalanceResponse, PlayerData, SCHEMA_VERSION,
};
use squad_core::{assess_roster, validate_roster, BalanceConfig, Player, Team};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squad")]
#[command(about = "Split a pickup-football roster into two balanced teams", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate two teams from a roster file
    Split {
        /// Roster JSON file (array of players)
        #[arg(long)]
        roster: PathBuf,

        /// Seed for a reproducible split
        #[arg(long)]
        seed: Option<u64>,

        /// Balancer config (.yaml/.yml/.json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the JSON response instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Validate a roster and report advisories without splitting
    Check {
        /// Roster JSON file (array of players)
        #[arg(long)]
        roster: PathBuf,

        /// Balancer config (.yaml/.yml/.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the JSON schema of a balance request
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Split { roster, seed, config, json } => {
            let players = load_roster(&roster)?;
            let config = load_config(config.as_deref())?;
            debug!("Loaded {} players from {}", players.len(), roster.display());

            let request = BalanceRequest {
                schema_version: SCHEMA_VERSION,
                seed,
                players,
                config: Some(config),
            };
            let response = balance_teams(request).context("Failed to balance roster")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }

        Commands::Check { roster, config } => {
            let players = resolve_players(load_roster(&roster)?)?;
            let config = load_config(config.as_deref())?;

            validate_roster(&players).context("Roster validation failed")?;
            println!("✅ {} players valid", players.len());

            let advisories = assess_roster(&players, &config.advisory);
            for advisory in &advisories {
                println!("⚠️  {}", advisory);
            }
        }

        Commands::Schema => {
            println!("{}", request_schema_json()?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_roster(path: &Path) -> Result<Vec<PlayerData>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    let players: Vec<PlayerData> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster file: {}", path.display()))?;
    Ok(players)
}

fn resolve_players(players: Vec<PlayerData>) -> Result<Vec<Player>> {
    players
        .into_iter()
        .map(|p| p.into_player().map_err(anyhow::Error::from))
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<BalanceConfig> {
    match path {
        Some(path) => BalanceConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(BalanceConfig::default()),
    }
}

fn print_response(response: &BalanceResponse) {
    println!("🎲 Seed: {}", response.seed);
    print_team("Team 1", &response.team1);
    print_team("Team 2", &response.team2);

    if !response.advisories.is_empty() {
        println!();
        for advisory in &response.advisories {
            println!("⚠️  {}", advisory);
        }
    }
}

fn print_team(label: &str, team: &Team) {
    println!("\n{} ({} players, rating {})", label, team.len(), team.rating);
    for line in team_lines(team) {
        println!("   {}", line);
    }
}

/// One line per player, grouped by slot (GK, DF, MF, FW).
fn team_lines(team: &Team) -> Vec<String> {
    let mut players: Vec<_> = team.players.iter().collect();
    players.sort_by_key(|p| (p.assigned_position, std::cmp::Reverse(p.rating())));

    players
        .into_iter()
        .map(|p| {
            let marker = if p.is_out_of_position() {
                format!(" (from {})", p.player.position.short_name())
            } else {
                String::new()
            };
            format!(
                "{:<2}  {:<24} {:>3}{}",
                p.assigned_position.short_name(),
                p.player.name,
                p.rating(),
                marker
            )
        })
        .collect()
}
