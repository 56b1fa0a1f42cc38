//! Configuration: map layout, entity parameters and the RON loader

mod error;
mod loader;
mod settings;

pub use error::ConfigError;
pub use loader::{export_default_config, DEFAULT_CONFIG_PATH};
pub use settings::{
    default_layout, AlienSpec, GameConfig, HazardConfig, HazardSpec, PlacementQuotas,
    PlayerConfig, TreasureConfig, TreasureSpec, WeaponConfig, WeaponSpec,
};
