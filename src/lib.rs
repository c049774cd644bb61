//! roomed - Room and door map editor
//!
//! A library for authoring multi-room tile maps and converting them to and
//! from the numeric JSON format read by the game engine.

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod output;
pub mod types;
pub mod validation;

pub use config::{EditorConfig, CONFIG_FILENAME};
pub use editor::{Action, EditorSession, RoomPrompt};
pub use error::{MapError, Result};
pub use format::{load_map_file, parse_engine_json, save_map_file, to_engine_json, EngineMap};
pub use types::{Decoration, Door, Map, MapData, Room, RoomData, TileSymbol};
pub use validation::{validate_map, Diagnostic, Severity, ValidationResult};
