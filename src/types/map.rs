//! Map type: the room list, the current-room selector and the door graph.
//!
//! Doors are stored as `(x, y, source, destination)` records. Every record's
//! source cell holds the `Door` symbol; `add_door` and `remove_door` keep
//! the grid and the record list in step.
//!
//! # Example
//!
//! ```
//! use roomed::{Map, TileSymbol};
//!
//! let mut map = Map::new();
//! let hall = map.add_room(8, 8).unwrap();
//! map.add_door(5, 0, hall);
//!
//! assert_eq!(map.current().get_tile(5, 0), TileSymbol::Door);
//! assert_eq!(map.get_door_destination(5, 0), Some(hall));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

use super::{Room, RoomData, TileSymbol};

/// A connection from a cell of one room to another room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door {
    pub x: i32,
    pub y: i32,
    pub source: usize,
    pub destination: usize,
}

impl Door {
    pub fn new(x: i32, y: i32, source: usize, destination: usize) -> Self {
        Self {
            x,
            y,
            source,
            destination,
        }
    }
}

/// The full level: rooms plus door connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// Never empty.
    rooms: Vec<Room>,

    /// Source room for door operations.
    current_room: usize,

    doors: Vec<Door>,
}

impl Map {
    /// Create a map with a single default room.
    pub fn new() -> Self {
        Self {
            rooms: vec![Room::default()],
            current_room: 0,
            doors: Vec::new(),
        }
    }

    /// Assemble a map from parts. An empty room list gets one default room
    /// and an out-of-range `current_room` falls back to 0.
    pub(crate) fn from_parts(mut rooms: Vec<Room>, current_room: usize, doors: Vec<Door>) -> Self {
        if rooms.is_empty() {
            rooms.push(Room::default());
        }
        let current_room = if current_room < rooms.len() {
            current_room
        } else {
            0
        };
        Self {
            rooms,
            current_room,
            doors,
        }
    }

    /// Append a room and return its index.
    pub fn add_room(&mut self, width: usize, height: usize) -> Result<usize> {
        self.rooms.push(Room::new(width, height)?);
        Ok(self.rooms.len() - 1)
    }

    /// Append a 12x12 room and return its index.
    pub fn add_default_room(&mut self) -> usize {
        self.rooms.push(Room::default());
        self.rooms.len() - 1
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Mutable access to a room's tiles and decorations.
    ///
    /// Writing over a door cell through this handle leaves its door record
    /// in place; use `remove_door` to drop both.
    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }

    pub fn current_room(&self) -> usize {
        self.current_room
    }

    /// Select the current room. Returns false (and changes nothing) when the
    /// index is out of range.
    pub fn set_current_room(&mut self, index: usize) -> bool {
        if index < self.rooms.len() {
            self.current_room = index;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &Room {
        &self.rooms[self.current_room]
    }

    pub fn current_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_room]
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Overwrite a cell of the current room.
    ///
    /// Painting anything but `Door` over a door cell also drops that cell's
    /// door records, so no record is left on a non-door tile.
    pub fn paint_tile(&mut self, x: i32, y: i32, symbol: TileSymbol) {
        let source = self.current_room;
        if symbol != TileSymbol::Door {
            self.doors
                .retain(|d| !(d.x == x && d.y == y && d.source == source));
        }
        self.rooms[source].set_tile(x, y, symbol);
    }

    /// Turn a cell of the current room into a door leading to `destination`.
    ///
    /// The caller guarantees `destination` is a valid room index different
    /// from the current room; the map does not check it. A cell outside the
    /// current room is ignored.
    pub fn add_door(&mut self, x: i32, y: i32, destination: usize) {
        let source = self.current_room;
        if !self.rooms[source].contains(x, y) {
            return;
        }
        self.rooms[source].set_tile(x, y, TileSymbol::Door);
        self.doors.push(Door::new(x, y, source, destination));
    }

    /// Remove every door at `(x, y)` of the current room and clear the cell.
    pub fn remove_door(&mut self, x: i32, y: i32) {
        let source = self.current_room;
        self.doors
            .retain(|d| !(d.x == x && d.y == y && d.source == source));
        self.rooms[source].set_tile(x, y, TileSymbol::Empty);
    }

    /// Destination of the first door at `(x, y)` of the current room.
    pub fn get_door_destination(&self, x: i32, y: i32) -> Option<usize> {
        self.doors
            .iter()
            .find(|d| d.x == x && d.y == y && d.source == self.current_room)
            .map(|d| d.destination)
    }

    /// Convert to the editor-native structural form.
    pub fn to_data(&self) -> MapData {
        MapData {
            rooms: self.rooms.iter().map(Room::to_data).collect(),
            current_room: self.current_room,
            doors: self
                .doors
                .iter()
                .map(|d| (d.x, d.y, d.source, d.destination))
                .collect(),
        }
    }

    /// Build a map from the editor-native structural form.
    ///
    /// Every room must be well formed. Door records that point outside the
    /// room list are dropped.
    pub fn from_data(data: &MapData) -> Result<Self> {
        let rooms = data
            .rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                Room::from_data(room).map_err(|e| MapError::MalformedRoom {
                    message: format!("room {}: {}", i, malformed_message(&e)),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let count = rooms.len();
        let doors = data
            .doors
            .iter()
            .filter(|(_, _, source, destination)| *source < count && *destination < count)
            .map(|&(x, y, source, destination)| Door::new(x, y, source, destination))
            .collect();

        Ok(Self::from_parts(rooms, data.current_room, doors))
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

fn malformed_message(err: &MapError) -> String {
    match err {
        MapError::MalformedRoom { message } => message.clone(),
        other => other.to_string(),
    }
}

/// Editor-native form of a whole map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    pub rooms: Vec<RoomData>,
    #[serde(default)]
    pub current_room: usize,
    /// (x, y, source, destination)
    #[serde(default)]
    pub doors: Vec<(i32, i32, usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_new() {
        let map = Map::new();
        assert_eq!(map.room_count(), 1);
        assert_eq!(map.current_room(), 0);
        assert!(map.doors().is_empty());
        assert_eq!(map.current().size(), (12, 12));
    }

    #[test]
    fn test_add_room_returns_index() {
        let mut map = Map::new();
        assert_eq!(map.add_room(8, 8).unwrap(), 1);
        assert_eq!(map.add_default_room(), 2);
        assert_eq!(map.room(1).unwrap().size(), (8, 8));
        assert_eq!(map.room(2).unwrap().size(), (12, 12));
    }

    #[test]
    fn test_add_room_rejects_bad_size() {
        let mut map = Map::new();
        assert!(map.add_room(1, 8).is_err());
        assert_eq!(map.room_count(), 1);
    }

    #[test]
    fn test_add_door_outside_room_is_ignored() {
        let mut map = Map::new();
        map.add_default_room();

        map.add_door(40, 40, 1);
        map.add_door(-1, 3, 1);

        assert!(map.doors().is_empty());
        assert_eq!(map.get_door_destination(40, 40), None);
    }

    #[test]
    fn test_set_current_room() {
        let mut map = Map::new();
        map.add_default_room();

        assert!(map.set_current_room(1));
        assert_eq!(map.current_room(), 1);
        assert!(!map.set_current_room(5));
        assert_eq!(map.current_room(), 1);
    }

    #[test]
    fn test_add_door_writes_tile_and_record() {
        let mut map = Map::new();
        map.add_room(8, 8).unwrap();

        map.add_door(5, 0, 1);

        assert_eq!(map.current().get_tile(5, 0), TileSymbol::Door);
        assert_eq!(map.doors(), &[Door::new(5, 0, 0, 1)]);
        assert_eq!(map.get_door_destination(5, 0), Some(1));
    }

    #[test]
    fn test_door_lookup_uses_current_room() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_door(3, 3, 1);

        map.set_current_room(1);
        assert_eq!(map.get_door_destination(3, 3), None);
    }

    #[test]
    fn test_remove_door() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_door(4, 4, 1);

        map.remove_door(4, 4);

        assert_eq!(map.current().get_tile(4, 4), TileSymbol::Empty);
        assert_eq!(map.get_door_destination(4, 4), None);
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_remove_door_removes_all_duplicates() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_default_room();
        map.add_door(4, 4, 1);
        map.add_door(4, 4, 2);
        assert_eq!(map.get_door_destination(4, 4), Some(1));

        map.remove_door(4, 4);
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_remove_door_leaves_other_rooms() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_door(4, 4, 1);
        map.set_current_room(1);
        map.add_door(4, 4, 0);

        map.remove_door(4, 4);

        assert_eq!(map.doors(), &[Door::new(4, 4, 0, 1)]);
        assert_eq!(map.room(0).unwrap().get_tile(4, 4), TileSymbol::Door);
    }

    #[test]
    fn test_paint_over_door_drops_record() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_door(6, 6, 1);

        map.paint_tile(6, 6, TileSymbol::Wall);

        assert_eq!(map.current().get_tile(6, 6), TileSymbol::Wall);
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_paint_elsewhere_keeps_doors() {
        let mut map = Map::new();
        map.add_default_room();
        map.add_door(6, 6, 1);

        map.paint_tile(6, 7, TileSymbol::Wall);
        assert_eq!(map.doors().len(), 1);
    }

    #[test]
    fn test_remove_missing_door_clears_cell() {
        let mut map = Map::new();
        map.current_mut().set_tile(2, 2, TileSymbol::Skull);
        map.remove_door(2, 2);
        assert_eq!(map.current().get_tile(2, 2), TileSymbol::Empty);
    }

    #[test]
    fn test_from_parts_fills_defaults() {
        let map = Map::from_parts(vec![], 3, vec![]);
        assert_eq!(map.room_count(), 1);
        assert_eq!(map.current_room(), 0);
    }

    #[test]
    fn test_data_round_trip() {
        let mut map = Map::new();
        map.add_room(6, 6).unwrap();
        map.add_door(5, 0, 1);
        map.current_mut().add_decoration(2, 2, TileSymbol::Skull);
        map.set_current_room(1);

        let data = map.to_data();
        assert_eq!(data.doors, vec![(5, 0, 0, 1)]);
        assert_eq!(data.current_room, 1);

        let restored = Map::from_data(&data).unwrap();
        assert_eq!(restored, map);
    }

    #[test]
    fn test_from_data_drops_dangling_doors() {
        let mut data = Map::new().to_data();
        data.doors.push((1, 1, 0, 9));

        let map = Map::from_data(&data).unwrap();
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_from_data_reports_room_index() {
        let mut data = Map::new().to_data();
        data.rooms.push(Room::new(3, 3).unwrap().to_data());
        data.rooms[1].grid[0][0] = "Lava".to_string();

        let err = Map::from_data(&data).unwrap_err();
        assert!(err.to_string().contains("room 1"));
    }

    #[test]
    fn test_data_json_defaults() {
        let json = r#"{"rooms": []}"#;
        let data: MapData = serde_json::from_str(json).unwrap();
        let map = Map::from_data(&data).unwrap();

        assert_eq!(map.room_count(), 1);
        assert_eq!(map.current_room(), 0);
    }
}
