//! RON config loader
//!
//! Reads the game configuration from a RON file, falling back to the
//! built-in defaults when no file exists. A file that exists but cannot be
//! read or parsed is an error: starting with half a config would be worse
//! than not starting.

use std::fs;
use std::path::Path;

use super::{ConfigError, GameConfig};

/// Where the binary looks for a config when none is given
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

impl GameConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("No config at {:?}, using built-in defaults", path);
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate a config from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content).map_err(|e| ConfigError::Parse {
            path: Default::default(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

/// Write the default configuration to `path` for easy editing
pub fn export_default_config(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {:?}: {}", parent, e))?;
        }
    }

    let ron = GameConfig::default()
        .to_ron()
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, ron).map_err(|e| format!("Failed to write {:?}: {}", path, e))?;

    Ok(())
}
