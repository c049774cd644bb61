//! Sidebar-style actions dispatched by the session.

use crate::types::TileSymbol;

/// An editor action that changes selection or room structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Choose the tile placed by subsequent paints.
    SelectTile(TileSymbol),
    /// Append a room with the configured default size.
    AddRoom,
    /// Make a room current.
    SelectRoom(usize),
}

/// What a dispatched action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    TileSelected(TileSymbol),
    RoomAdded(usize),
    RoomSelected(usize),
    /// The action named a room that does not exist.
    NoSuchRoom(usize),
}
