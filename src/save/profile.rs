//! Player profile
//!
//! Tracks statistics and achievements across runs. The engine knows nothing
//! about it; the binary records each finished game here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::game::{GameOutcome, GameState};

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Profile storage failures
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent player profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Version for compatibility checking
    pub version: u32,
    /// Player statistics
    pub stats: ProfileStats,
    /// Unlocked achievements
    pub achievements: HashSet<String>,
}

/// Profile statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Total runs finished
    pub total_runs: u32,
    pub deaths: u32,
    pub victories: u32,
    pub quits: u32,
    /// Total turns played over all runs
    pub turns_played: u64,
    pub survivors_rescued: u32,
    /// Fewest turns needed to kill the alien
    pub fastest_victory: Option<u32>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            stats: ProfileStats::default(),
            achievements: HashSet::new(),
        }
    }
}

impl PlayerProfile {
    /// Create a new profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run into the statistics
    pub fn record_outcome(&mut self, outcome: &GameOutcome) {
        self.stats.total_runs += 1;
        self.stats.turns_played += outcome.turns as u64;
        self.stats.survivors_rescued += outcome.survivors_rescued;

        match outcome.state {
            GameState::PlayerDead => self.stats.deaths += 1,
            GameState::AlienDefeated => {
                self.stats.victories += 1;
                self.stats.fastest_victory = Some(
                    self.stats
                        .fastest_victory
                        .map_or(outcome.turns, |best| best.min(outcome.turns)),
                );
            }
            GameState::Quit => self.stats.quits += 1,
            GameState::Ongoing => {}
        }

        self.check_achievements(outcome);
    }

    /// Check if an achievement is unlocked
    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.contains(achievement_id)
    }

    /// Unlock an achievement
    pub fn unlock_achievement(&mut self, achievement_id: &str) -> bool {
        if self.achievements.insert(achievement_id.to_string()) {
            log::info!("Achievement unlocked: {}", achievement_id);
            true
        } else {
            false
        }
    }

    fn check_achievements(&mut self, outcome: &GameOutcome) {
        if outcome.state == GameState::AlienDefeated {
            self.unlock_achievement("first_victory");
            if outcome.survivors_rescued > 0 {
                self.unlock_achievement("rescuer");
            }
        }
        if self.stats.victories >= 5 {
            self.unlock_achievement("five_victories");
        }
        if outcome.state == GameState::PlayerDead && outcome.turns <= 3 {
            self.unlock_achievement("short_shift");
        }
    }
}

// ============================================================================
// Profile Storage
// ============================================================================

/// Get the profile file path
pub fn profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "spaceship-survival", "SpaceshipSurvival") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load the player profile from the default location (or create default)
pub fn load_profile() -> PlayerProfile {
    load_profile_from(&profile_path())
}

/// Load a profile from `path`, starting fresh if it is missing or corrupt
pub fn load_profile_from(path: &Path) -> PlayerProfile {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile");
    PlayerProfile::new()
}

/// Save the player profile to the default location
pub fn save_profile(profile: &PlayerProfile) -> Result<(), ProfileError> {
    save_profile_to(profile, &profile_path())
}

pub fn save_profile_to(profile: &PlayerProfile, path: &Path) -> Result<(), ProfileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}

// ============================================================================
// Achievement Definitions
// ============================================================================

/// Achievement definition
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub hidden: bool,
}

/// Get all achievement definitions
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_victory",
            name: "Exterminator",
            description: "Kill the alien",
            hidden: false,
        },
        Achievement {
            id: "five_victories",
            name: "Veteran",
            description: "Kill the alien 5 times",
            hidden: false,
        },
        Achievement {
            id: "rescuer",
            name: "No One Left Behind",
            description: "Win with at least one survivor rescued",
            hidden: false,
        },
        Achievement {
            id: "short_shift",
            name: "Short Shift",
            description: "Die within three turns",
            hidden: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(state: GameState, turns: u32, survivors_rescued: u32) -> GameOutcome {
        GameOutcome {
            state,
            turns,
            health: 5,
            survivors_rescued,
        }
    }

    #[test]
    fn test_record_outcomes() {
        let mut profile = PlayerProfile::new();
        profile.record_outcome(&outcome(GameState::AlienDefeated, 12, 1));
        profile.record_outcome(&outcome(GameState::AlienDefeated, 9, 0));
        profile.record_outcome(&outcome(GameState::PlayerDead, 20, 0));
        profile.record_outcome(&outcome(GameState::Quit, 2, 0));

        assert_eq!(profile.stats.total_runs, 4);
        assert_eq!(profile.stats.victories, 2);
        assert_eq!(profile.stats.deaths, 1);
        assert_eq!(profile.stats.quits, 1);
        assert_eq!(profile.stats.turns_played, 43);
        assert_eq!(profile.stats.survivors_rescued, 1);
        assert_eq!(profile.stats.fastest_victory, Some(9));
    }

    #[test]
    fn test_achievements() {
        let mut profile = PlayerProfile::new();
        profile.record_outcome(&outcome(GameState::PlayerDead, 3, 0));
        assert!(profile.has_achievement("short_shift"));
        assert!(!profile.has_achievement("first_victory"));

        profile.record_outcome(&outcome(GameState::AlienDefeated, 10, 2));
        assert!(profile.has_achievement("first_victory"));
        assert!(profile.has_achievement("rescuer"));
        assert!(!profile.unlock_achievement("rescuer"));

        let known: HashSet<_> = all_achievements().iter().map(|a| a.id).collect();
        assert!(profile.achievements.iter().all(|id| known.contains(id.as_str())));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join("spaceship-survival-profile-test")
            .join("profile.json");
        let mut profile = PlayerProfile::new();
        profile.record_outcome(&outcome(GameState::AlienDefeated, 8, 1));

        save_profile_to(&profile, &path).unwrap();
        assert_eq!(load_profile_from(&path), profile);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_profile_starts_fresh() {
        let path = std::env::temp_dir().join("spaceship-survival-corrupt-profile.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_profile_from(&path), PlayerProfile::new());
        let _ = fs::remove_file(&path);
    }
}
