use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cherry_snake::app::SnakeApp;
use cherry_snake::{GameConfig, MovePolicy};

#[derive(Parser)]
#[command(name = "cherry-snake")]
#[command(version, about = "Move the snake one key at a time and eat cherries")]
struct Cli {
    /// Grid width, border included
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(i32).range(3..))]
    width: i32,

    /// Grid height, border included
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(i32).range(3..))]
    height: i32,

    /// What happens when the snake is steered into the border or itself
    #[arg(long, value_enum, default_value = "contained")]
    policy: Policy,

    /// Seed for cherry placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here. The screen belongs to the game, so there is no
    /// logging without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Moves into the border or the body are ignored
    Contained,
    /// Such moves happen and end the game
    Permissive,
}

impl From<Policy> for MovePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Contained => MovePolicy::Contained,
            Policy::Permissive => MovePolicy::Permissive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = GameConfig::new(cli.width, cli.height).with_policy(cli.policy.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut app = SnakeApp::new(config)?;
    let summary = app.run()?;

    println!("\nGame over!!!");
    println!("cherries eaten: {}\n", summary.eaten);
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let cli = Cli::try_parse_from(["cherry-snake"]).unwrap();
        assert_eq!((cli.width, cli.height), (80, 24));
    }

    #[test]
    fn test_grid_size_must_be_positive() {
        assert!(Cli::try_parse_from(["cherry-snake", "--width", "-2147483648"]).is_err());
        assert!(Cli::try_parse_from(["cherry-snake", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["cherry-snake", "--width", "2"]).is_err());
        assert!(Cli::try_parse_from(["cherry-snake", "--width", "3", "--height", "3"]).is_ok());
    }
}
