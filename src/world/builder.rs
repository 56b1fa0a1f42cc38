//! Map legend and room population
//!
//! Turns map symbols into room contents. Categories with two sub-variants
//! hand out the first one until its quota is used up, then switch to the
//! second, so the same map always yields the same ship.

use crate::config::{ConfigError, GameConfig, PlacementQuotas};
use crate::entities::{Entity, Survivor};

/// Map symbols
pub mod symbols {
    pub const HAZARD: char = '@';
    pub const WEAPON: char = '>';
    pub const SUPPLIES: char = '?';
    pub const ALIEN: char = '#';
    pub const SURVIVOR: char = '!';
    pub const PLAYER_START: char = '+';
    pub const EMPTY: char = '.';
}

/// How many of each sub-variant have been placed so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementCounters {
    pub guns: u32,
    pub flamethrowers: u32,
    pub exposed_wires: u32,
    pub low_oxygen: u32,
    pub ammo: u32,
    pub medkits: u32,
}

/// Builds room contents from symbols, tracking placement as it goes
pub struct RoomFactory<'a> {
    config: &'a GameConfig,
    quotas: PlacementQuotas,
    counters: PlacementCounters,
}

impl<'a> RoomFactory<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            quotas: config.placement,
            counters: PlacementCounters::default(),
        }
    }

    pub fn counters(&self) -> PlacementCounters {
        self.counters
    }

    /// The entity a room with this symbol starts with.
    ///
    /// Unknown symbols, the empty marker and the player start all give an
    /// empty room.
    pub fn entity_for(&mut self, symbol: char) -> Result<Option<Entity>, ConfigError> {
        let entity = match symbol {
            symbols::WEAPON => {
                if self.counters.guns < self.quotas.guns {
                    self.counters.guns += 1;
                    Entity::Weapon(self.config.gun()?)
                } else {
                    self.counters.flamethrowers += 1;
                    Entity::Weapon(self.config.flamethrower()?)
                }
            }
            symbols::HAZARD => {
                if self.counters.exposed_wires < self.quotas.exposed_wires {
                    self.counters.exposed_wires += 1;
                    Entity::Hazard(self.config.exposed_wires()?)
                } else {
                    self.counters.low_oxygen += 1;
                    Entity::Hazard(self.config.low_oxygen()?)
                }
            }
            symbols::SUPPLIES => {
                if self.counters.ammo < self.quotas.ammo {
                    self.counters.ammo += 1;
                    Entity::Treasure(self.config.ammo_cache()?)
                } else {
                    self.counters.medkits += 1;
                    Entity::Treasure(self.config.medkit()?)
                }
            }
            symbols::ALIEN => Entity::Alien(self.config.alien()?),
            symbols::SURVIVOR => Entity::Survivor(Survivor),
            _ => return Ok(None),
        };
        Ok(Some(entity))
    }
}
