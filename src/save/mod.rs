//! Save system
//!
//! Persistent player profile shared across runs.

pub mod profile;

pub use profile::{
    all_achievements, load_profile, load_profile_from, profile_path, save_profile,
    save_profile_to, Achievement, PlayerProfile, ProfileError, ProfileStats,
};
