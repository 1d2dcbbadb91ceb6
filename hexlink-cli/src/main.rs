//! HEXLINK CLI - Command-line interface
//!
//! Commands:
//! - play: Play in the terminal against the AI (or another human)
//! - match: Run an AI vs AI series
//! - init-config: Write a config file with default settings

mod match_cmd;
mod play_cmd;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use hexlink_core::GameConfig;

#[derive(Parser)]
#[command(name = "hexlink")]
#[command(about = "HEXLINK hex connection game with an alpha-beta AI")]
struct Cli {
    /// Random seed for obstacles and bonus draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Game config JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play_cmd::PlayArgs),
    /// Play AI against AI
    Match(match_cmd::MatchArgs),
    /// Write the default config
    InitConfig {
        #[arg(long, value_name = "FILE", default_value = "hexlink.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, load_config(cli.config.as_deref())?, cli.seed),
        Commands::Match(args) => match_cmd::run(args, load_config(cli.config.as_deref())?, cli.seed),
        Commands::InitConfig { output } => {
            GameConfig::default().save(&output)?;
            tracing::info!("Wrote default config to {}", output.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

/// Create RNG from seed or random
pub(crate) fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_rng_deterministic() {
        use rand::Rng;
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_parse_play_args() {
        let cli = Cli::try_parse_from(["hexlink", "--seed", "7", "play", "--rows", "5", "--ai", "none"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Play(args) => {
                assert_eq!(args.rows, Some(5));
                assert_eq!(args.ai, Some(play_cmd::AiSide::None));
            }
            _ => panic!("expected play"),
        }
    }
}
