//! Map file loading and saving.
//!
//! The engine format is the only on-disk format. Saves render the complete
//! document in memory and write it with a single call.

mod engine;

use std::fs;
use std::path::Path;

use crate::error::{MapError, Result};
use crate::types::Map;

pub(crate) use engine::door_source;
pub use engine::{parse_engine_json, to_engine_json, EngineMap};

/// Load a map from an engine-format JSON file.
pub fn load_map_file(path: &Path) -> Result<Map> {
    let source = fs::read_to_string(path).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read map: {}", e),
    })?;

    parse_engine_json(&source)
}

/// Save a map as an engine-format JSON file.
pub fn save_map_file(map: &Map, path: &Path) -> Result<()> {
    let json = to_engine_json(map)?;

    fs::write(path, json).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write map: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileSymbol;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("level.json");

        let mut map = Map::new();
        map.add_room(6, 4).unwrap();
        map.add_door(3, 0, 1);

        save_map_file(&map, &path).unwrap();
        let loaded = load_map_file(&path).unwrap();

        assert_eq!(loaded.room_count(), 2);
        assert_eq!(loaded.room(1).unwrap().size(), (6, 4));
        assert_eq!(loaded.current().get_tile(3, 0), TileSymbol::Door);
        assert_eq!(loaded.get_door_destination(3, 0), Some(1));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_map_file(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, MapError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ rooms: ").unwrap();

        assert!(matches!(load_map_file(&path), Err(MapError::Parse { .. })));
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("level.json");

        assert!(save_map_file(&Map::new(), &path).is_err());
        assert!(!path.exists());
    }
}
