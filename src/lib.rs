//! Spaceship Survival - A turn-based text survival game
//!
//! Creep through a derelict ship one room at a time, dodge its hazards,
//! scavenge weapons and supplies, and hunt down the alien before it
//! finds you.

pub mod config;
pub mod entities;
pub mod game;
pub mod save;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use game::{Command, CommandSource, Game, GameOutcome, GameState};
pub use world::ShipGrid;
