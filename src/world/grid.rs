//! Ship grid
//!
//! The rectangular arena of rooms. Rooms are stored row-major and refer to
//! each other by `RoomId`, so the grid is the single owner of every room.

use super::builder::{symbols, RoomFactory};
use super::room::{Direction, Room, RoomId};
use crate::config::{ConfigError, GameConfig};
use crate::entities::{Person, PersonId};

/// The spaceship: a fixed-size grid of linked rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipGrid {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
}

impl ShipGrid {
    /// Split layout strings into a symbol matrix
    pub fn from_layout(rows: &[String]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    /// Build a fully linked grid from a symbol map, along with the player
    /// standing on the start symbol.
    pub fn build(map: &[Vec<char>], config: &GameConfig) -> Result<(Self, Person), ConfigError> {
        let (width, height) = Self::check_shape(map)?;
        let mut factory = RoomFactory::new(config);
        let mut rooms = Vec::with_capacity(width * height);
        let mut player: Option<Person> = None;

        for (y, row) in map.iter().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                let mut room = Room::new(factory.entity_for(symbol)?);

                if symbol == symbols::PLAYER_START {
                    if player.is_some() {
                        return Err(ConfigError::MultiplePlayerStarts { x, y });
                    }
                    let id = RoomId(rooms.len());
                    let person = config.spawn_player(PersonId(0), id)?;
                    room.set_occupant(person.id());
                    player = Some(person);
                }

                rooms.push(room);
            }
        }

        let player = player.ok_or(ConfigError::MissingPlayerStart)?;
        let mut grid = Self {
            width,
            height,
            rooms,
        };
        grid.link_rooms();

        log::info!(
            "Built {}x{} ship, player starts at {:?} with {} health ({:?})",
            width,
            height,
            grid.id_to_xy(player.room()),
            player.health(),
            factory.counters()
        );
        Ok((grid, player))
    }

    /// Reject empty and ragged maps, returning (width, height)
    fn check_shape(map: &[Vec<char>]) -> Result<(usize, usize), ConfigError> {
        let width = map.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(ConfigError::EmptyMap);
        }
        if let Some((row, found)) = map
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ConfigError::RaggedMap {
                row,
                expected: width,
                found,
            });
        }
        Ok((width, map.len()))
    }

    /// Point every room at its grid neighbours. Runs once all rooms exist.
    fn link_rooms(&mut self) {
        for idx in 0..self.rooms.len() {
            let (x, y) = self.id_to_xy(RoomId(idx));
            for direction in Direction::ALL {
                if let Some(neighbor) = self.offset(x, y, direction) {
                    self.rooms[idx].link(direction, neighbor);
                }
            }
        }
    }

    fn offset(&self, x: usize, y: usize, direction: Direction) -> Option<RoomId> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.xy_to_id(nx, ny)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Room id for coordinates, if they are on the ship
    #[inline]
    pub fn xy_to_id(&self, x: usize, y: usize) -> Option<RoomId> {
        if x < self.width && y < self.height {
            Some(RoomId(y * self.width + x))
        } else {
            None
        }
    }

    #[inline]
    pub fn id_to_xy(&self, id: RoomId) -> (usize, usize) {
        (id.0 % self.width, id.0 / self.width)
    }

    /// Room by id. Ids only come from this grid, so they are always valid.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn room_at(&self, x: usize, y: usize) -> Option<&Room> {
        self.xy_to_id(x, y).map(|id| self.room(id))
    }

    /// The room next to `id` in `direction`
    pub fn neighbor(&self, id: RoomId, direction: Direction) -> Option<&Room> {
        self.room(id).neighbor(direction).map(|n| self.room(n))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Ids of every room with someone in it
    pub fn occupied_rooms(&self) -> Vec<RoomId> {
        self.rooms()
            .filter(|(_, room)| room.is_occupied())
            .map(|(id, _)| id)
            .collect()
    }

    /// Debug view: one glyph per room, space separated, one line per row
    pub fn render(&self) -> String {
        self.rooms
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|room| room.glyph().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;

    fn map(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    fn build(rows: &[&str]) -> Result<(ShipGrid, Person), ConfigError> {
        ShipGrid::build(&map(rows), &GameConfig::default())
    }

    fn assert_symmetric(grid: &ShipGrid) {
        for (id, room) in grid.rooms() {
            let (x, y) = grid.id_to_xy(id);
            for direction in Direction::ALL {
                let expected = grid.offset(x, y, direction);
                assert_eq!(room.neighbor(direction), expected, "{:?} of {:?}", direction, id);
                if let Some(n) = expected {
                    assert_eq!(grid.room(n).neighbor(direction.opposite()), Some(id));
                }
            }
        }
    }

    #[test]
    fn test_links_are_symmetric() {
        for rows in [
            vec!["+"],
            vec!["+..."],
            vec!["+", ".", "#"],
            vec!["..@+.>", ".?...>", "@..!.@", ">...?.", "..@.>#"],
        ] {
            let (grid, _) = build(&rows).unwrap();
            assert_symmetric(&grid);
        }
    }

    #[test]
    fn test_single_occupant_matches_player() {
        let (grid, player) = build(&["...", ".+.", "..."]).unwrap();
        assert_eq!(grid.occupied_rooms(), vec![player.room()]);
        assert_eq!(grid.id_to_xy(player.room()), (1, 1));
        assert_eq!(grid.room(player.room()).occupant(), Some(player.id()));
        assert!(grid.room_at(1, 1).unwrap().is_occupied());
        assert!(grid.room_at(3, 0).is_none());
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let (grid, _) = build(&["+.", ".."]).unwrap();
        let corner = grid.room(RoomId(0));
        assert!(corner.neighbor(Direction::North).is_none());
        assert!(corner.neighbor(Direction::West).is_none());
        assert_eq!(corner.neighbor(Direction::East), Some(RoomId(1)));
        assert_eq!(corner.neighbor(Direction::South), Some(RoomId(2)));
    }

    #[test]
    fn test_rejects_empty_map() {
        assert!(matches!(build(&[]), Err(ConfigError::EmptyMap)));
        assert!(matches!(build(&["", ""]), Err(ConfigError::EmptyMap)));
    }

    #[test]
    fn test_rejects_ragged_map() {
        assert!(matches!(
            build(&["+..", "..", "..."]),
            Err(ConfigError::RaggedMap {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_requires_exactly_one_start() {
        assert!(matches!(build(&["...", "..."]), Err(ConfigError::MissingPlayerStart)));
        assert!(matches!(
            build(&["+..", "..+"]),
            Err(ConfigError::MultiplePlayerStarts { x: 2, y: 1 })
        ));
    }

    #[test]
    fn test_populates_from_symbols() {
        let (grid, _) = build(&["+#!?"]).unwrap();
        assert!(grid.room(RoomId(0)).entity().is_none());
        assert!(grid.room(RoomId(1)).entity().unwrap().is_alien());
        assert!(matches!(grid.room(RoomId(2)).entity(), Some(Entity::Survivor(_))));
        assert!(matches!(grid.room(RoomId(3)).entity(), Some(Entity::Treasure(_))));
    }

    #[test]
    fn test_render() {
        let (grid, _) = build(&[".+@", ">#."]).unwrap();
        assert_eq!(grid.render(), ". + x\ng # .");
    }

    #[test]
    fn test_from_layout() {
        let rows = vec!["+.".to_string(), "#.".to_string()];
        assert_eq!(ShipGrid::from_layout(&rows), map(&["+.", "#."]));
    }
}
