//! Headless arena match: random decisions on both sides, logbook on disk.
//!
//! Environment:
//! - `ARENA_CONFIG`: TOML match configuration
//! - `ARENA_CATALOG`: RON content catalog
//! - `ARENA_SEED`, `ARENA_PARTIES`, `ARENA_PARTY_SIZE`, `ARENA_TURN_LIMIT`,
//!   `ARENA_LOG_PATH`: overrides on top of the above
//! - `RUST_LOG`: tracing filter
use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use arena_content::{ArenaRules, Catalog, CatalogLoader, ConfigLoader};
use arena_core::MatchRng;
use arena_runtime::{
    FileLogbookRepository, FlowOutcome, RandomProvider, Runtime, RuntimeConfig, RuntimeError,
};

const DEFAULT_TURN_LIMIT: usize = 1_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = RuntimeConfig::default();
    if let Ok(path) = env::var("ARENA_CONFIG") {
        config.game = ConfigLoader::load(Path::new(&path))?;
    }
    let mut config = config.with_env_overrides();
    config.turn_limit.get_or_insert(DEFAULT_TURN_LIMIT);

    let catalog = match env::var("ARENA_CATALOG") {
        Ok(path) => CatalogLoader::load(Path::new(&path))?,
        Err(_) => Catalog::builtin(),
    };

    let (player, npc) = match config.game.seed {
        Some(seed) => (
            RandomProvider::new(seed.wrapping_add(1)),
            RandomProvider::new(seed.wrapping_add(2)),
        ),
        None => (
            RandomProvider::from_rng(MatchRng::from_entropy()),
            RandomProvider::from_rng(MatchRng::from_entropy()),
        ),
    };

    let log_path = config.log_path_or_default();
    let repository = FileLogbookRepository::new(&log_path)
        .with_context(|| format!("Failed to prepare logbook at {}", log_path.display()))?;

    let mut runtime: Runtime<ArenaRules> = Runtime::builder()
        .config(config)
        .rules(ArenaRules::new(catalog))
        .player_provider(player.avoiding(["Quit", "Inspect"]))
        .npc_provider(npc)
        .repository(repository)
        .build()?;

    match runtime.run() {
        Ok(FlowOutcome::Defeat) => println!("Defeated after {} turns.", runtime.turns()),
        Ok(FlowOutcome::Exit) => println!("Left the arena after {} turns.", runtime.turns()),
        Err(RuntimeError::TurnLimitReached { turns }) => {
            println!("Still standing after {turns} turns.")
        }
        Err(error) => return Err(error.into()),
    }
    println!(
        "Logbook: {} ({} entries)",
        log_path.display(),
        runtime.logbook().len()
    );

    Ok(())
}
