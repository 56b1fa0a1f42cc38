//! Rooms and directions
//!
//! A room owns its entity outright. Its neighbours and its occupant are
//! plain handles into the grid and the engine, so nothing here forms an
//! ownership cycle.

use crate::entities::{Entity, Person, PersonId};
use crate::game::GameMessage;

/// Index of a room inside its `ShipGrid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// The four ways out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Order adjacent rooms are scouted in
    pub const HINT_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Grid offset as (dx, dy); north is towards row 0
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

/// One cell of the ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    entity: Option<Entity>,
    occupant: Option<PersonId>,
    /// Neighbours indexed by `Direction::slot`
    links: [Option<RoomId>; 4],
}

impl Room {
    pub const EMPTY_GLYPH: char = '.';
    pub const OCCUPANT_GLYPH: char = '+';

    /// A room holding `entity`, not yet linked to anything
    pub fn new(entity: Option<Entity>) -> Self {
        Self {
            entity,
            occupant: None,
            links: [None; 4],
        }
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Remove and return the entity
    pub fn take_entity(&mut self) -> Option<Entity> {
        self.entity.take()
    }

    /// Put an entity in the room, returning whatever was there before
    pub fn place_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.entity.replace(entity)
    }

    pub fn occupant(&self) -> Option<PersonId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn set_occupant(&mut self, person: PersonId) {
        self.occupant = Some(person);
    }

    pub fn clear_occupant(&mut self) {
        self.occupant = None;
    }

    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.links[direction.slot()]
    }

    pub(crate) fn link(&mut self, direction: Direction, room: RoomId) {
        self.links[direction.slot()] = Some(room);
    }

    /// Debug-map glyph: occupant first, then entity, then empty floor
    pub fn glyph(&self) -> char {
        if self.is_occupied() {
            Self::OCCUPANT_GLYPH
        } else if let Some(entity) = &self.entity {
            entity.glyph()
        } else {
            Self::EMPTY_GLYPH
        }
    }

    /// Run this room's entity against the person standing in it
    pub fn interact(&mut self, person: &mut Person) -> Option<GameMessage> {
        let entity = self.entity.take()?;
        let encounter = entity.encounter(person);
        self.entity = encounter.remaining;
        Some(encounter.message)
    }
}
