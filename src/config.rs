//! Editor configuration (roomed.yaml) parsing.
//!
//! The config file is optional and lives in the working directory. Every
//! field has a default, so a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::types::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "roomed.yaml";

/// Editor settings loaded from roomed.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Save target when no map file is given on the command line.
    pub default_file: PathBuf,

    /// Width of rooms created by `add-room` without arguments.
    pub room_width: usize,

    /// Height of rooms created by `add-room` without arguments.
    pub room_height: usize,

    /// Run validation before every save and print its diagnostics.
    pub validate_on_save: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("new_map.json"),
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            validate_on_save: true,
        }
    }
}

impl EditorConfig {
    /// Load config from a roomed.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MapError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `roomed.yaml` from a directory, if present.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}
