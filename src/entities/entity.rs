//! Room entities
//!
//! `Entity` is the closed set of things a room can hold. Every kind answers
//! the same three questions: how it looks on the debug map, what it hints to
//! a player in a neighbouring room, and what happens when the player shares
//! its room.

use super::kinds::{Alien, Hazard, HazardKind, Survivor, Treasure, TreasureKind, Weapon};
use super::person::Person;
use crate::game::{GameMessage, MessageCategory};

/// Anything that can sit in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Hazard(Hazard),
    Treasure(Treasure),
    Weapon(Weapon),
    Alien(Alien),
    Survivor(Survivor),
}

/// What an encounter did, and whether the entity is still there afterwards
#[derive(Debug)]
pub struct Encounter {
    pub message: GameMessage,
    /// The entity to put back in the room, `None` if it was consumed
    pub remaining: Option<Entity>,
}

impl Entity {
    pub fn glyph(&self) -> char {
        match self {
            Entity::Hazard(hazard) => hazard.kind().glyph(),
            Entity::Treasure(treasure) => treasure.kind().glyph(),
            Entity::Weapon(weapon) => weapon.kind().glyph(),
            Entity::Alien(_) => Alien::GLYPH,
            Entity::Survivor(_) => Survivor::GLYPH,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Entity::Hazard(hazard) => hazard.kind().hint(),
            Entity::Treasure(treasure) => treasure.kind().hint(),
            Entity::Weapon(weapon) => weapon.kind().hint(),
            Entity::Alien(alien) => alien.hint(),
            Entity::Survivor(survivor) => survivor.hint(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Entity::Hazard(hazard) => hazard.label(),
            Entity::Treasure(treasure) => treasure.label(),
            Entity::Weapon(weapon) => weapon.label(),
            Entity::Alien(alien) => alien.label(),
            Entity::Survivor(_) => "survivor",
        }
    }

    pub fn is_alien(&self) -> bool {
        matches!(self, Entity::Alien(_))
    }

    /// Apply this entity's effect to the person sharing its room.
    ///
    /// Hazards and the alien stay put and keep hurting; everything else is
    /// used up.
    pub fn encounter(self, person: &mut Person) -> Encounter {
        match self {
            Entity::Hazard(hazard) => {
                person.take_damage(hazard.damage());
                let text = match hazard.kind() {
                    HazardKind::ExposedWires => format!(
                        "Sparks leap from the {}! You take {} damage.",
                        hazard.label(),
                        hazard.damage()
                    ),
                    HazardKind::LowOxygen => format!(
                        "You gasp for air in the {} room. You take {} damage.",
                        hazard.label(),
                        hazard.damage()
                    ),
                };
                Encounter {
                    message: GameMessage::new(text, MessageCategory::Hazard),
                    remaining: Some(Entity::Hazard(hazard)),
                }
            }
            Entity::Treasure(treasure) => {
                let text = match treasure.kind() {
                    TreasureKind::Ammo => {
                        let loaded = person.add_ammo(treasure.amount());
                        match loaded {
                            Some(weapon) => format!(
                                "You found {} rounds of {} and loaded your {}.",
                                treasure.amount(),
                                treasure.label(),
                                weapon
                            ),
                            None => format!(
                                "You found {} rounds of {} and stowed them for later.",
                                treasure.amount(),
                                treasure.label()
                            ),
                        }
                    }
                    TreasureKind::Medkit => {
                        let amount = i32::try_from(treasure.amount()).unwrap_or(i32::MAX);
                        let healed = person.heal(amount);
                        format!(
                            "You used a {} and restored {} health.",
                            treasure.label(),
                            healed
                        )
                    }
                };
                Encounter {
                    message: GameMessage::new(text, MessageCategory::Item),
                    remaining: None,
                }
            }
            Entity::Weapon(weapon) => {
                let label = weapon.label().to_string();
                let text = match person.equip(weapon) {
                    Some(dropped) => format!(
                        "You picked up a {} and dropped your {}.",
                        label,
                        dropped.label()
                    ),
                    None => format!("You picked up a {}.", label),
                };
                Encounter {
                    message: GameMessage::new(text, MessageCategory::Item),
                    remaining: None,
                }
            }
            Entity::Alien(alien) => {
                person.take_damage(alien.damage());
                let text = format!(
                    "The {} lashes out at you! You take {} damage.",
                    alien.label(),
                    alien.damage()
                );
                Encounter {
                    message: GameMessage::new(text, MessageCategory::Combat),
                    remaining: Some(Entity::Alien(alien)),
                }
            }
            Entity::Survivor(_) => {
                person.rescue();
                Encounter {
                    message: GameMessage::new(
                        "You found a survivor! They follow you toward the escape pods.",
                        MessageCategory::Item,
                    ),
                    remaining: None,
                }
            }
        }
    }
}
