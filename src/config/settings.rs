//! Game configuration
//!
//! Map layout, player stats and every entity parameter. All numeric
//! parameters live here so a config file can rebalance the ship without
//! touching the engine.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::entities::{
    Alien, Hazard, HazardKind, Person, PersonId, Treasure, TreasureKind, Weapon, WeaponKind,
};
use crate::world::RoomId;

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ship layout, one string per row of rooms
    pub layout: Vec<String>,
    pub player: PlayerConfig,
    pub hazards: HazardConfig,
    pub weapons: WeaponConfig,
    pub treasures: TreasureConfig,
    pub alien: AlienSpec,
    pub placement: PlacementQuotas,
}

/// Starting player stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub label: String,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardConfig {
    pub exposed_wires: HazardSpec,
    pub low_oxygen: HazardSpec,
}

/// Weapon parameters; `ammo: None` marks a melee weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub label: String,
    pub power: i32,
    pub ammo: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// The weapon every player starts with
    pub knife: WeaponSpec,
    pub gun: WeaponSpec,
    pub flamethrower: WeaponSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasureSpec {
    pub label: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasureConfig {
    pub ammo: TreasureSpec,
    pub medkit: TreasureSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlienSpec {
    pub label: String,
    /// Minimum weapon power needed to kill it
    pub toughness: i32,
    /// Damage dealt to the player every turn spent in its room
    pub damage: i32,
}

/// How many of each category become the first sub-variant before the
/// builder switches to the second one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementQuotas {
    pub guns: u32,
    pub exposed_wires: u32,
    pub ammo: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            player: PlayerConfig::default(),
            hazards: HazardConfig::default(),
            weapons: WeaponConfig::default(),
            treasures: TreasureConfig::default(),
            alien: AlienSpec::default(),
            placement: PlacementQuotas::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { health: 10 }
    }
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            exposed_wires: HazardSpec {
                label: "exposed wires".to_string(),
                damage: 5,
            },
            low_oxygen: HazardSpec {
                label: "low oxygen".to_string(),
                damage: 4,
            },
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            knife: WeaponSpec {
                label: "knife".to_string(),
                power: 1,
                ammo: None,
            },
            gun: WeaponSpec {
                label: "gun".to_string(),
                power: 2,
                ammo: Some(3),
            },
            flamethrower: WeaponSpec {
                label: "flamethrower".to_string(),
                power: 3,
                ammo: Some(3),
            },
        }
    }
}

impl Default for TreasureConfig {
    fn default() -> Self {
        Self {
            ammo: TreasureSpec {
                label: "ammo".to_string(),
                amount: 3,
            },
            medkit: TreasureSpec {
                label: "medkit".to_string(),
                amount: 3,
            },
        }
    }
}

impl Default for AlienSpec {
    fn default() -> Self {
        Self {
            label: "alien".to_string(),
            toughness: 2,
            damage: 5,
        }
    }
}

impl Default for PlacementQuotas {
    fn default() -> Self {
        Self {
            guns: 2,
            exposed_wires: 2,
            ammo: 1,
        }
    }
}

/// The stock ship: four hazards, four weapons, two supply caches,
/// one survivor and the alien
pub fn default_layout() -> Vec<String> {
    ["..@+.>", ".?...>", "@..!.@", ">...?.", "..@.>#"]
        .iter()
        .map(|row| row.to_string())
        .collect()
}

impl GameConfig {
    /// Check every entity parameter by constructing one of each.
    ///
    /// The layout itself is checked when the ship is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.health <= 0 {
            return Err(ConfigError::InvalidPlayer(format!(
                "starting health must be positive, got {}",
                self.player.health
            )));
        }
        self.exposed_wires()?;
        self.low_oxygen()?;
        self.knife()?;
        self.gun()?;
        self.flamethrower()?;
        self.ammo_cache()?;
        self.medkit()?;
        self.alien()?;
        Ok(())
    }

    pub fn exposed_wires(&self) -> Result<Hazard, ConfigError> {
        let spec = &self.hazards.exposed_wires;
        Hazard::new(HazardKind::ExposedWires, &spec.label, spec.damage)
    }

    pub fn low_oxygen(&self) -> Result<Hazard, ConfigError> {
        let spec = &self.hazards.low_oxygen;
        Hazard::new(HazardKind::LowOxygen, &spec.label, spec.damage)
    }

    pub fn knife(&self) -> Result<Weapon, ConfigError> {
        let spec = &self.weapons.knife;
        Weapon::new(WeaponKind::Knife, &spec.label, spec.power, spec.ammo)
    }

    pub fn gun(&self) -> Result<Weapon, ConfigError> {
        let spec = &self.weapons.gun;
        Weapon::new(WeaponKind::Gun, &spec.label, spec.power, spec.ammo)
    }

    pub fn flamethrower(&self) -> Result<Weapon, ConfigError> {
        let spec = &self.weapons.flamethrower;
        Weapon::new(WeaponKind::Flamethrower, &spec.label, spec.power, spec.ammo)
    }

    pub fn ammo_cache(&self) -> Result<Treasure, ConfigError> {
        let spec = &self.treasures.ammo;
        Treasure::new(TreasureKind::Ammo, &spec.label, spec.amount)
    }

    pub fn medkit(&self) -> Result<Treasure, ConfigError> {
        let spec = &self.treasures.medkit;
        Treasure::new(TreasureKind::Medkit, &spec.label, spec.amount)
    }

    pub fn alien(&self) -> Result<Alien, ConfigError> {
        let spec = &self.alien;
        Alien::new(&spec.label, spec.toughness, spec.damage)
    }

    /// A fresh player standing in `room`, armed with the knife
    pub fn spawn_player(&self, id: PersonId, room: RoomId) -> Result<Person, ConfigError> {
        let mut person = Person::new(id, self.player.health, room)?;
        person.equip(self.knife()?);
        Ok(person)
    }
}
