//! World module
//!
//! Rooms, the ship grid and the map builder.

pub mod builder;
pub mod grid;
pub mod room;

pub use builder::{symbols, PlacementCounters, RoomFactory};
pub use grid::ShipGrid;
pub use room::{Direction, Room, RoomId};
