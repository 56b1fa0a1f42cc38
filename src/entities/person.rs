//! The player
//!
//! A `Person` knows which room it stands in; the room knows it is occupied.
//! Both sides of that link are only ever changed together, in `move_to`.

use super::entity::Entity;
use super::kinds::Weapon;
use crate::config::ConfigError;
use crate::world::{Direction, Room, RoomId, ShipGrid};

/// Handle a room uses to refer back to its occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub u32);

/// Result of pulling the trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    /// No alien in this room
    NoTarget,
    /// Nothing equipped
    Unarmed,
    /// Ranged weapon with an empty magazine
    OutOfAmmo { weapon: String },
    /// Hit the alien, but the weapon is too weak to kill it
    Ineffective { weapon: String },
    /// The alien is dead and gone from the room
    AlienDefeated { weapon: String },
}

impl AttackOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, AttackOutcome::AlienDefeated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    health: i32,
    max_health: i32,
    room: RoomId,
    weapon: Option<Weapon>,
    /// Rounds picked up while holding a melee weapon
    spare_ammo: u32,
    survivors_rescued: u32,
}

impl Person {
    pub fn new(id: PersonId, health: i32, room: RoomId) -> Result<Self, ConfigError> {
        if health <= 0 {
            return Err(ConfigError::InvalidPlayer(format!(
                "starting health must be positive, got {}",
                health
            )));
        }
        Ok(Self {
            id,
            health,
            max_health: health,
            room,
            weapon: None,
            spare_ammo: 0,
            survivors_rescued: 0,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn spare_ammo(&self) -> u32 {
        self.spare_ammo
    }

    pub fn survivors_rescued(&self) -> u32 {
        self.survivors_rescued
    }

    /// Step into the neighbouring room, if there is one.
    ///
    /// Returns false (and changes nothing) at the edge of the ship.
    pub fn move_to(&mut self, direction: Direction, grid: &mut ShipGrid) -> bool {
        let Some(next) = grid.room(self.room).neighbor(direction) else {
            return false;
        };

        grid.room_mut(self.room).clear_occupant();
        grid.room_mut(next).set_occupant(self.id);
        self.room = next;
        true
    }

    /// Attack whatever shares the room.
    ///
    /// The alien dies when the equipped weapon's power reaches its toughness.
    /// Ranged weapons spend one round per attack on the alien, hit or not.
    pub fn attack(&mut self, room: &mut Room) -> AttackOutcome {
        let alien = match room.entity() {
            Some(Entity::Alien(alien)) => alien,
            _ => return AttackOutcome::NoTarget,
        };
        let Some(weapon) = self.weapon.as_mut() else {
            return AttackOutcome::Unarmed;
        };
        let label = weapon.label().to_string();

        if !weapon.fire() {
            return AttackOutcome::OutOfAmmo { weapon: label };
        }
        if !alien.is_vulnerable_to(weapon) {
            return AttackOutcome::Ineffective { weapon: label };
        }

        room.take_entity();
        AttackOutcome::AlienDefeated { weapon: label }
    }

    /// Lose health, never dropping below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Restore health up to the starting maximum, returning the amount healed
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// Equip a weapon, returning the one it replaces.
    ///
    /// Spare rounds go straight into a ranged weapon.
    pub fn equip(&mut self, mut weapon: Weapon) -> Option<Weapon> {
        if self.spare_ammo > 0 && weapon.load(self.spare_ammo) {
            self.spare_ammo = 0;
        }
        self.weapon.replace(weapon)
    }

    /// Take on ammunition. Returns the label of the weapon it was loaded
    /// into, or `None` if it went into the spare pouch.
    pub fn add_ammo(&mut self, rounds: u32) -> Option<String> {
        if let Some(weapon) = self.weapon.as_mut() {
            if weapon.load(rounds) {
                return Some(weapon.label().to_string());
            }
        }
        self.spare_ammo = self.spare_ammo.saturating_add(rounds);
        None
    }

    pub fn rescue(&mut self) {
        self.survivors_rescued += 1;
    }
}
