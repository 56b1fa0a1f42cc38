//! Spaceship Survival - Entry Point
//!
//! Loads the configuration, builds the ship and runs the game on the
//! terminal.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

use spaceship_survival::config::DEFAULT_CONFIG_PATH;
use spaceship_survival::save::{load_profile, save_profile};
use spaceship_survival::ui::Console;
use spaceship_survival::{Game, GameConfig};

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Spaceship Survival v{}", env!("CARGO_PKG_VERSION"));

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("Could not load configuration from {:?}", config_path))?;
    let mut game = Game::new(&config).context("Could not build the ship")?;

    let mut console = Console::stdio();
    console.print_welcome()?;

    let outcome = game.run(&mut console);
    console.print_messages(game.take_pending())?;
    console.print_outcome(&outcome)?;

    let mut profile = load_profile();
    profile.record_outcome(&outcome);
    if let Err(e) = save_profile(&profile) {
        log::warn!("Failed to save profile: {}", e);
    }

    log::info!("Spaceship Survival shut down cleanly");
    Ok(())
}

/// Log to a file so records never interleave with the game narrative
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("spaceship-survival.log")
    {
        Ok(log_file) => {
            builder.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}
