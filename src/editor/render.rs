//! Text rendering of rooms for the terminal session.

use crate::types::{Map, Room, TileSymbol};

/// Draw a room as one line of glyphs per row. Decorations are drawn over
/// the grid, the most recent one winning.
pub fn render_room(room: &Room) -> String {
    room.grid()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, tile)| {
                    room.decoration_at(x as i32, y as i32)
                        .unwrap_or(*tile)
                        .glyph()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw the current room with each recorded door shown as its destination
/// number. Destinations past 9 keep the plain door glyph.
pub fn render_current_room(map: &Map) -> String {
    let room = map.current();
    render_room(room)
        .lines()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, glyph)| {
                    let (x, y) = (x as i32, y as i32);
                    let covered = room.decoration_at(x, y).is_some();
                    if covered || room.get_tile(x, y) != TileSymbol::Door {
                        return glyph;
                    }
                    map.get_door_destination(x, y)
                        .and_then(|d| u32::try_from(d).ok())
                        .and_then(|d| char::from_digit(d, 10))
                        .unwrap_or(glyph)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List the doors leaving the current room, one per line.
pub fn render_doors(map: &Map) -> String {
    let lines: Vec<String> = map
        .doors()
        .iter()
        .filter(|d| d.source == map.current_room())
        .map(|d| format!("({}, {}) -> room {}", d.x, d.y, d.destination))
        .collect();

    if lines.is_empty() {
        "no doors".to_string()
    } else {
        lines.join("\n")
    }
}

/// Legend of glyphs, in number-key order.
pub fn render_legend() -> String {
    TileSymbol::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {} {}", i + 1, t.glyph(), t.name()))
        .collect::<Vec<_>>()
        .join("\n")
}
