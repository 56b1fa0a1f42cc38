//! Configuration errors
//!
//! Everything that can make a game impossible to start. These are raised
//! while loading the config or building the ship and are never produced
//! once the turn loop is running.

use std::path::PathBuf;

/// A fatal problem with the map or the entity parameters
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("map has no rooms")]
    EmptyMap,

    #[error("map row {row} has {found} rooms, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has no player start ('+')")]
    MissingPlayerStart,

    #[error("map has a second player start at ({x}, {y})")]
    MultiplePlayerStarts { x: usize, y: usize },

    #[error("invalid {label}: {reason}")]
    InvalidEntity { label: String, reason: String },

    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    /// Shorthand for a rejected entity parameter
    pub fn invalid_entity(label: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidEntity {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
