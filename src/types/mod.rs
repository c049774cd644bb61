//! Core domain types for roomed.
//!
//! - `TileSymbol` - the closed set of cell categories and their code tables
//! - `Room` - a bordered tile grid with a decoration overlay
//! - `Map` - rooms, the current-room selector and the door graph

mod map;
mod room;
mod tile;

pub use map::{Door, Map, MapData};
pub use room::{
    Decoration, Room, RoomData, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, MAX_ROOM_SIZE, MIN_ROOM_SIZE,
};
pub use tile::TileSymbol;
