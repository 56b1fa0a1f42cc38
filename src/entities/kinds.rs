//! Entity kinds
//!
//! The concrete things a room can hold. Each kind carries its own
//! parameters; constructors reject values that would make the kind
//! meaningless (a hazard that does no damage, a weapon with no power).

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

// ============================================================================
// Hazards
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    ExposedWires,
    LowOxygen,
}

impl HazardKind {
    pub fn glyph(&self) -> char {
        match self {
            HazardKind::ExposedWires => 'x',
            HazardKind::LowOxygen => 'o',
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            HazardKind::ExposedWires => "You hear electricity crackling nearby.",
            HazardKind::LowOxygen => "The air feels thin nearby.",
        }
    }
}

/// A room hazard that hurts the player every turn they stay in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hazard {
    kind: HazardKind,
    label: String,
    damage: i32,
}

impl Hazard {
    pub fn new(kind: HazardKind, label: &str, damage: i32) -> Result<Self, ConfigError> {
        if damage <= 0 {
            return Err(ConfigError::invalid_entity(
                label,
                format!("damage must be positive, got {}", damage),
            ));
        }
        Ok(Self {
            kind,
            label: label.to_string(),
            damage,
        })
    }

    pub fn kind(&self) -> HazardKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }
}

// ============================================================================
// Treasures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureKind {
    Ammo,
    Medkit,
}

impl TreasureKind {
    pub fn glyph(&self) -> char {
        match self {
            TreasureKind::Ammo => 'a',
            TreasureKind::Medkit => 'm',
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            TreasureKind::Ammo => "You spot a supply crate nearby.",
            TreasureKind::Medkit => "You smell antiseptic nearby.",
        }
    }
}

/// A one-shot consumable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treasure {
    kind: TreasureKind,
    label: String,
    amount: u32,
}

impl Treasure {
    pub fn new(kind: TreasureKind, label: &str, amount: u32) -> Result<Self, ConfigError> {
        if amount == 0 {
            return Err(ConfigError::invalid_entity(label, "amount must be positive"));
        }
        Ok(Self {
            kind,
            label: label.to_string(),
            amount,
        })
    }

    pub fn kind(&self) -> TreasureKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

// ============================================================================
// Weapons
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Knife,
    Gun,
    Flamethrower,
}

impl WeaponKind {
    pub fn glyph(&self) -> char {
        match self {
            WeaponKind::Knife => 'k',
            WeaponKind::Gun => 'g',
            WeaponKind::Flamethrower => 'f',
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            WeaponKind::Knife => "Something sharp glints nearby.",
            WeaponKind::Gun => "You spot a weapons locker nearby.",
            WeaponKind::Flamethrower => "You smell fuel nearby.",
        }
    }
}

/// A weapon. Ranged weapons carry a magazine; melee weapons never run dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    kind: WeaponKind,
    label: String,
    power: i32,
    /// `None` for melee weapons
    ammo: Option<u32>,
}

impl Weapon {
    pub fn new(
        kind: WeaponKind,
        label: &str,
        power: i32,
        ammo: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if power <= 0 {
            return Err(ConfigError::invalid_entity(
                label,
                format!("power must be positive, got {}", power),
            ));
        }
        Ok(Self {
            kind,
            label: label.to_string(),
            power,
            ammo,
        })
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    /// Rounds left, or `None` for melee weapons
    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }

    pub fn is_ranged(&self) -> bool {
        self.ammo.is_some()
    }

    /// Add rounds to the magazine. Returns false for melee weapons.
    pub fn load(&mut self, rounds: u32) -> bool {
        match self.ammo.as_mut() {
            Some(ammo) => {
                *ammo = ammo.saturating_add(rounds);
                true
            }
            None => false,
        }
    }

    /// Use the weapon once. Ranged weapons spend a round and fail when empty.
    pub fn fire(&mut self) -> bool {
        match self.ammo.as_mut() {
            Some(0) => false,
            Some(ammo) => {
                *ammo -= 1;
                true
            }
            None => true,
        }
    }
}

// ============================================================================
// Alien & survivors
// ============================================================================

/// The hostile alien. Only a weapon with at least `toughness` power kills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alien {
    label: String,
    toughness: i32,
    damage: i32,
}

impl Alien {
    pub const GLYPH: char = '#';

    pub fn new(label: &str, toughness: i32, damage: i32) -> Result<Self, ConfigError> {
        if toughness <= 0 {
            return Err(ConfigError::invalid_entity(
                label,
                format!("toughness must be positive, got {}", toughness),
            ));
        }
        if damage <= 0 {
            return Err(ConfigError::invalid_entity(
                label,
                format!("damage must be positive, got {}", damage),
            ));
        }
        Ok(Self {
            label: label.to_string(),
            toughness,
            damage,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn toughness(&self) -> i32 {
        self.toughness
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn hint(&self) -> &'static str {
        "You hear something large moving in the vents nearby!"
    }

    /// Whether `weapon` is strong enough to kill this alien
    pub fn is_vulnerable_to(&self, weapon: &Weapon) -> bool {
        weapon.power() >= self.toughness
    }
}

/// A stranded crew member waiting to be found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Survivor;

impl Survivor {
    pub const GLYPH: char = '!';

    pub fn hint(&self) -> &'static str {
        "You hear a faint voice calling for help."
    }
}
