//! Engine wire format.
//!
//! The game engine reads maps as numeric JSON:
//!
//! ```json
//! {
//!   "rooms": [[[5, 1, 6], [2, 0, 3], [1, 1, 1]]],
//!   "current_room": 0,
//!   "doors": [[5, 0, 1]]
//! }
//! ```
//!
//! The projection is lossy in two ways. Decorations are not written at all,
//! and door entries carry only `(x, y, destination)`. On load the source
//! room of a door is recovered as the first room, in room order, that is not
//! the destination and holds a `Door` tile at `(x, y)`. Two rooms with a
//! door at the same position can therefore be confused; the
//! `ambiguous-door` validation check reports such layouts before saving.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::types::{
    Door, Map, Room, TileSymbol, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, MAX_ROOM_SIZE, MIN_ROOM_SIZE,
};

/// The engine's on-disk map structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMap {
    /// One row-major grid of wire codes per room.
    #[serde(default)]
    pub rooms: Vec<Vec<Vec<i64>>>,

    #[serde(default)]
    pub current_room: i64,

    /// `[x, y, destination]` triples.
    #[serde(default)]
    pub doors: Vec<Vec<i64>>,
}

impl Map {
    /// Project the map onto the engine format.
    pub fn to_engine(&self) -> EngineMap {
        EngineMap {
            rooms: self.rooms().iter().map(encode_room).collect(),
            current_room: self.current_room() as i64,
            doors: self
                .doors()
                .iter()
                .map(|d| vec![d.x as i64, d.y as i64, d.destination as i64])
                .collect(),
        }
    }

    /// Rebuild a map from the engine format.
    ///
    /// Never fails: missing pieces fall back to defaults and doors whose
    /// source room cannot be found are dropped.
    pub fn from_engine(engine: &EngineMap) -> Self {
        let rooms: Vec<Room> = engine.rooms.iter().map(|grid| decode_room(grid)).collect();

        let doors = engine
            .doors
            .iter()
            .filter_map(|entry| decode_door(entry, &rooms))
            .collect();

        let current_room = usize::try_from(engine.current_room).unwrap_or(0);

        Map::from_parts(rooms, current_room, doors)
    }
}

fn encode_room(room: &Room) -> Vec<Vec<i64>> {
    room.grid()
        .iter()
        .map(|row| row.iter().map(|t| t.wire_code() as i64).collect())
        .collect()
}

/// Decode one room grid. Width comes from the first row and height from the
/// row count; an empty grid gives a default-sized room. Short rows keep the
/// border defaults for their missing cells and cells past the width are
/// dropped.
fn decode_room(grid: &[Vec<i64>]) -> Room {
    let (width, height) = match grid.first() {
        Some(first) => (first.len(), grid.len()),
        None => (DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT),
    };

    let mut room = Room::new(
        width.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE),
        height.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE),
    )
    .unwrap_or_default();

    for (y, row) in grid.iter().enumerate() {
        for (x, &code) in row.iter().enumerate() {
            room.set_tile(x as i32, y as i32, TileSymbol::from_wire_code(code));
        }
    }

    room
}

fn decode_door(entry: &[i64], rooms: &[Room]) -> Option<Door> {
    let [x, y, destination, ..] = entry else {
        return None;
    };
    let x = i32::try_from(*x).ok()?;
    let y = i32::try_from(*y).ok()?;
    let destination = usize::try_from(*destination).ok()?;

    let source = door_source(rooms, x, y, destination)?;
    Some(Door::new(x, y, source, destination))
}

/// The room a `(x, y, destination)` door entry is attributed to on load:
/// the first room that is not the destination and has a `Door` tile there.
pub(crate) fn door_source(rooms: &[Room], x: i32, y: i32, destination: usize) -> Option<usize> {
    rooms
        .iter()
        .enumerate()
        .find(|(i, room)| *i != destination && room.get_tile(x, y) == TileSymbol::Door)
        .map(|(i, _)| i)
}

/// Parse engine JSON into a map.
pub fn parse_engine_json(source: &str) -> Result<Map> {
    let engine: EngineMap = serde_json::from_str(source).map_err(|e| MapError::Parse {
        message: format!("Invalid map file: {}", e),
        help: Some("Expected an object with rooms, current_room and doors".to_string()),
    })?;

    Ok(Map::from_engine(&engine))
}

/// Render a map as pretty-printed engine JSON.
pub fn to_engine_json(map: &Map) -> Result<String> {
    serde_json::to_string_pretty(&map.to_engine()).map_err(|e| MapError::Parse {
        message: format!("Failed to encode map: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_map() -> Map {
        let mut map = Map::new();
        assert_eq!(map.add_room(8, 8).unwrap(), 1);
        map.set_current_room(0);
        map.add_door(5, 0, 1);
        map
    }

    #[test]
    fn test_scenario_projection() {
        let map = scenario_map();
        assert_eq!(map.doors(), &[Door::new(5, 0, 0, 1)]);

        let engine = map.to_engine();
        assert_eq!(engine.rooms.len(), 2);
        assert_eq!(engine.rooms[0][0][5], 7);
        assert_eq!(engine.rooms[0][0][0], 5);
        assert_eq!(engine.rooms[0][0][11], 6);
        assert_eq!(engine.rooms[1].len(), 8);
        assert_eq!(engine.current_room, 0);
        assert_eq!(engine.doors, vec![vec![5, 0, 1]]);
    }

    #[test]
    fn test_round_trip() {
        let mut map = scenario_map();
        map.set_current_room(1);
        map.add_door(3, 7, 0);
        map.current_mut().set_tile(2, 2, TileSymbol::WallBottom);

        let restored = Map::from_engine(&map.to_engine());

        assert_eq!(restored.to_engine(), map.to_engine());
        assert_eq!(restored.current_room(), 1);
        assert_eq!(restored.doors(), map.doors());
    }

    #[test]
    fn test_decorations_are_dropped() {
        let mut map = Map::new();
        map.current_mut().add_decoration(3, 3, TileSymbol::Skull);

        let restored = Map::from_engine(&map.to_engine());
        assert!(restored.current().decorations().is_empty());
    }

    #[test]
    fn test_skull_tile_saved_as_empty() {
        let mut map = Map::new();
        map.current_mut().set_tile(4, 4, TileSymbol::Skull);

        let engine = map.to_engine();
        assert_eq!(engine.rooms[0][4][4], 0);
    }

    #[test]
    fn test_unknown_codes_load_as_empty() {
        let engine = EngineMap {
            rooms: vec![vec![vec![1, 8], vec![42, -3]]],
            current_room: 0,
            doors: vec![],
        };

        let map = Map::from_engine(&engine);
        let room = map.current();
        assert_eq!(room.get_tile(0, 0), TileSymbol::Wall);
        assert_eq!(room.get_tile(1, 0), TileSymbol::Empty);
        assert_eq!(room.get_tile(0, 1), TileSymbol::Empty);
        assert_eq!(room.get_tile(1, 1), TileSymbol::Empty);
    }

    #[test]
    fn test_size_inferred_from_grid() {
        let engine = EngineMap {
            rooms: vec![vec![vec![0; 5]; 3], vec![]],
            ..Default::default()
        };

        let map = Map::from_engine(&engine);
        assert_eq!(map.room(0).unwrap().size(), (5, 3));
        assert_eq!(map.room(1).unwrap().size(), (12, 12));
    }

    #[test]
    fn test_ragged_rows() {
        let engine = EngineMap {
            rooms: vec![vec![vec![1, 1, 1], vec![2], vec![1, 1, 1, 1, 1]]],
            ..Default::default()
        };

        let map = Map::from_engine(&engine);
        let room = map.current();
        assert_eq!(room.size(), (3, 3));
        assert_eq!(room.get_tile(0, 1), TileSymbol::WallLeft);
        assert_eq!(room.get_tile(1, 1), TileSymbol::Empty);
        assert_eq!(room.get_tile(2, 1), TileSymbol::WallRight);
        assert_eq!(room.get_tile(3, 2), TileSymbol::Empty);
        assert_eq!(map.to_engine().rooms[0][2], vec![1, 1, 1]);
    }

    #[test]
    fn test_oversized_grid_is_clamped() {
        let engine = EngineMap {
            rooms: vec![vec![vec![0; MAX_ROOM_SIZE + 5]; 3]],
            ..Default::default()
        };

        let map = Map::from_engine(&engine);
        assert_eq!(map.current().size(), (MAX_ROOM_SIZE, 3));
    }

    #[test]
    fn test_empty_room_list_gets_default_room() {
        let map = parse_engine_json("{}").unwrap();
        assert_eq!(map.room_count(), 1);
        assert_eq!(map.current_room(), 0);
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_missing_current_room_defaults_to_zero() {
        let map = parse_engine_json(r#"{"rooms": [[[1, 1], [1, 1]], [[1, 1], [1, 1]]]}"#).unwrap();
        assert_eq!(map.room_count(), 2);
        assert_eq!(map.current_room(), 0);
    }

    #[test]
    fn test_door_source_recovered_from_tiles() {
        let source = r#"{
            "rooms": [
                [[1, 1, 1], [1, 0, 1], [1, 1, 1]],
                [[1, 1, 1], [1, 7, 1], [1, 1, 1]]
            ],
            "current_room": 0,
            "doors": [[1, 1, 0]]
        }"#;

        let map = parse_engine_json(source).unwrap();
        assert_eq!(map.doors(), &[Door::new(1, 1, 1, 0)]);
    }

    #[test]
    fn test_door_without_source_tile_is_dropped() {
        let source = r#"{
            "rooms": [[[1, 1], [1, 1]], [[1, 1], [1, 1]]],
            "doors": [[0, 0, 1]]
        }"#;

        let map = parse_engine_json(source).unwrap();
        assert!(map.doors().is_empty());
    }

    #[test]
    fn test_short_door_entries_are_dropped() {
        let source = r#"{
            "rooms": [[[7, 1], [1, 1]], [[1, 1], [1, 1]]],
            "doors": [[0, 0], [0, 0, 1]]
        }"#;

        let map = parse_engine_json(source).unwrap();
        assert_eq!(map.doors(), &[Door::new(0, 0, 0, 1)]);
    }

    #[test]
    fn test_shared_door_position_takes_first_room() {
        // Rooms 0 and 1 both have a door at (1, 1); the one in room 1 leads
        // to room 2 but the loader attributes it to room 0.
        let mut map = Map::new();
        map.add_default_room();
        map.add_default_room();
        map.add_door(1, 1, 1);
        map.set_current_room(1);
        map.add_door(1, 1, 2);

        let restored = Map::from_engine(&map.to_engine());
        assert_eq!(
            restored.doors(),
            &[Door::new(1, 1, 0, 1), Door::new(1, 1, 0, 2)]
        );
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_engine_json("not json").unwrap_err();
        assert!(matches!(err, MapError::Parse { .. }));
    }

    #[test]
    fn test_json_layout() {
        let map = Map::from_engine(&EngineMap {
            rooms: vec![vec![vec![5, 6], vec![1, 1]]],
            current_room: 0,
            doors: vec![],
        });

        let json = to_engine_json(&map).unwrap();
        assert!(json.starts_with("{\n  \"rooms\": ["));
        assert!(json.contains("\"current_room\": 0"));
        assert!(json.contains("\"doors\": []"));
    }
}
