//! Entities and the player

pub mod entity;
pub mod kinds;
pub mod person;

pub use entity::{Encounter, Entity};
pub use kinds::{
    Alien, Hazard, HazardKind, Survivor, Treasure, TreasureKind, Weapon, WeaponKind,
};
pub use person::{AttackOutcome, Person, PersonId};
