//! Validation checks for a map.
//!
//! Each check takes a `&Map` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::format::door_source;
use crate::types::{Map, TileSymbol};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Check that every door record sits on a `Door` tile of its source room.
pub fn check_door_tiles(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    for door in map.doors() {
        let tile = map
            .room(door.source)
            .map(|room| room.get_tile(door.x, door.y));

        if tile != Some(TileSymbol::Door) {
            result.push(
                Diagnostic::error(
                    "roomed::validate::door-tile-mismatch",
                    format!(
                        "door at ({}, {}) has no Door tile in its source room",
                        door.x, door.y
                    ),
                )
                .in_room(door.source)
                .with_help("Remove the door and place it again"),
            );
        }
    }

    result
}

/// Check that door destinations exist and differ from the source.
pub fn check_door_destinations(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    for door in map.doors() {
        let message = if door.destination >= map.room_count() {
            format!(
                "door at ({}, {}) leads to missing room {}",
                door.x, door.y, door.destination
            )
        } else if door.destination == door.source {
            format!("door at ({}, {}) leads back to its own room", door.x, door.y)
        } else {
            continue;
        };

        result.push(
            Diagnostic::error("roomed::validate::door-destination", message).in_room(door.source),
        );
    }

    result
}

/// Check for `Door` tiles that no door record uses.
pub fn check_orphan_door_tiles(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    let recorded: HashSet<(usize, i32, i32)> = map
        .doors()
        .iter()
        .map(|d| (d.source, d.x, d.y))
        .collect();

    for (index, room) in map.rooms().iter().enumerate() {
        for (x, y, tile) in room.iter_cells() {
            if tile == TileSymbol::Door && !recorded.contains(&(index, x, y)) {
                result.push(
                    Diagnostic::warning(
                        "roomed::validate::orphan-door-tile",
                        format!("Door tile at ({}, {}) has no destination", x, y),
                    )
                    .in_room(index)
                    .with_help("Place it with the door command to pick a destination"),
                );
            }
        }
    }

    result
}

/// Check for doors that will be attributed to a different room on reload.
pub fn check_ambiguous_doors(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    for door in map.doors() {
        match door_source(map.rooms(), door.x, door.y, door.destination) {
            Some(source) if source == door.source => {}
            recovered => {
                let outcome = match recovered {
                    Some(other) => format!("will reload as a door of room {}", other),
                    None => "will be dropped on reload".to_string(),
                };
                result.push(
                    Diagnostic::warning(
                        "roomed::validate::ambiguous-door",
                        format!(
                            "door at ({}, {}) to room {} {}",
                            door.x, door.y, door.destination, outcome
                        ),
                    )
                    .in_room(door.source)
                    .with_help("Move one of the doors sharing this position"),
                );
            }
        }
    }

    result
}

/// Check for `Skull` grid tiles, which the engine format cannot store.
pub fn check_skull_tiles(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, room) in map.rooms().iter().enumerate() {
        let count = room
            .iter_cells()
            .filter(|(_, _, tile)| *tile == TileSymbol::Skull)
            .count();

        if count > 0 {
            result.push(
                Diagnostic::warning(
                    "roomed::validate::skull-tile",
                    format!("{} Skull tile(s) will be saved as Empty", count),
                )
                .in_room(index)
                .with_help("Place skulls as decorations instead"),
            );
        }
    }

    result
}

/// Check for rooms (other than the first) that no door leads to.
pub fn check_unreachable_rooms(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    let targets: HashSet<usize> = map.doors().iter().map(|d| d.destination).collect();

    for index in 1..map.room_count() {
        if !targets.contains(&index) {
            result.push(
                Diagnostic::warning(
                    "roomed::validate::unreachable-room",
                    "no door leads to this room",
                )
                .in_room(index),
            );
        }
    }

    result
}
