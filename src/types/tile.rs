//! Tile symbols and their code tables.
//!
//! A tile symbol has three representations:
//! - an editor code (0-8, the enum order)
//! - a wire code used by the engine format (no code for `Skull`)
//! - a symbolic name used by the editor-native structural form

use std::fmt;
use std::str::FromStr;

use crate::error::{MapError, Result};

/// A grid cell category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileSymbol {
    #[default]
    Empty,
    Wall,
    WallLeft,
    WallRight,
    WallBottom,
    WallTopLeft,
    WallTopRight,
    Skull,
    Door,
}

impl TileSymbol {
    /// All symbols in editor-code order.
    pub const ALL: [TileSymbol; 9] = [
        TileSymbol::Empty,
        TileSymbol::Wall,
        TileSymbol::WallLeft,
        TileSymbol::WallRight,
        TileSymbol::WallBottom,
        TileSymbol::WallTopLeft,
        TileSymbol::WallTopRight,
        TileSymbol::Skull,
        TileSymbol::Door,
    ];

    /// Editor code (0-8).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a symbol by editor code. Unknown codes decode to `Empty`.
    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    /// Code written to the engine format.
    ///
    /// `Skull` has no wire code and is written as `0`: the engine decodes
    /// unknown codes as walls, and skulls are floor decorations there.
    pub fn wire_code(self) -> u8 {
        match self {
            TileSymbol::Empty | TileSymbol::Skull => 0,
            TileSymbol::Wall => 1,
            TileSymbol::WallLeft => 2,
            TileSymbol::WallRight => 3,
            TileSymbol::WallBottom => 4,
            TileSymbol::WallTopLeft => 5,
            TileSymbol::WallTopRight => 6,
            TileSymbol::Door => 7,
        }
    }

    /// Decode an engine wire code. Unknown codes decode to `Empty`.
    pub fn from_wire_code(code: i64) -> Self {
        match code {
            1 => TileSymbol::Wall,
            2 => TileSymbol::WallLeft,
            3 => TileSymbol::WallRight,
            4 => TileSymbol::WallBottom,
            5 => TileSymbol::WallTopLeft,
            6 => TileSymbol::WallTopRight,
            7 => TileSymbol::Door,
            _ => TileSymbol::Empty,
        }
    }

    /// Symbolic name used by the editor-native form.
    pub fn name(self) -> &'static str {
        match self {
            TileSymbol::Empty => "Empty",
            TileSymbol::Wall => "Wall",
            TileSymbol::WallLeft => "WallLeft",
            TileSymbol::WallRight => "WallRight",
            TileSymbol::WallBottom => "WallBottom",
            TileSymbol::WallTopLeft => "WallTopLeft",
            TileSymbol::WallTopRight => "WallTopRight",
            TileSymbol::Skull => "Skull",
            TileSymbol::Door => "Door",
        }
    }

    /// Single-character glyph for terminal rendering.
    pub fn glyph(self) -> char {
        match self {
            TileSymbol::Empty => '.',
            TileSymbol::Wall => '#',
            TileSymbol::WallLeft => '[',
            TileSymbol::WallRight => ']',
            TileSymbol::WallBottom => '_',
            TileSymbol::WallTopLeft => '/',
            TileSymbol::WallTopRight => '\\',
            TileSymbol::Skull => 's',
            TileSymbol::Door => 'D',
        }
    }

    /// Look up a symbol by glyph.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == glyph)
    }

    /// True for every wall-family symbol.
    pub fn is_wall(self) -> bool {
        matches!(
            self,
            TileSymbol::Wall
                | TileSymbol::WallLeft
                | TileSymbol::WallRight
                | TileSymbol::WallBottom
                | TileSymbol::WallTopLeft
                | TileSymbol::WallTopRight
        )
    }
}

impl fmt::Display for TileSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileSymbol {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| MapError::MalformedRoom {
                message: format!("unknown tile symbol '{}'", s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_codes_follow_enum_order() {
        for (i, tile) in TileSymbol::ALL.iter().enumerate() {
            assert_eq!(tile.code() as usize, i);
            assert_eq!(TileSymbol::from_code(i as i64), *tile);
        }
    }

    #[test]
    fn test_unknown_editor_code_is_empty() {
        assert_eq!(TileSymbol::from_code(9), TileSymbol::Empty);
        assert_eq!(TileSymbol::from_code(-1), TileSymbol::Empty);
    }

    #[test]
    fn test_wire_code_for_door_is_seven() {
        assert_eq!(TileSymbol::Door.wire_code(), 7);
        assert_eq!(TileSymbol::from_wire_code(7), TileSymbol::Door);
    }

    #[test]
    fn test_skull_has_no_wire_code() {
        assert_eq!(TileSymbol::Skull.wire_code(), 0);
        assert_eq!(TileSymbol::from_wire_code(8), TileSymbol::Empty);
    }

    #[test]
    fn test_wire_codes_round_trip_except_skull() {
        for tile in TileSymbol::ALL {
            if tile == TileSymbol::Skull {
                continue;
            }
            assert_eq!(TileSymbol::from_wire_code(tile.wire_code() as i64), tile);
        }
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("WallTopLeft".parse::<TileSymbol>().unwrap(), TileSymbol::WallTopLeft);
        assert_eq!(TileSymbol::Door.to_string(), "Door");
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Lava".parse::<TileSymbol>().unwrap_err();
        assert!(err.to_string().contains("Lava"));
    }

    #[test]
    fn test_glyphs_are_unique() {
        for tile in TileSymbol::ALL {
            assert_eq!(TileSymbol::from_glyph(tile.glyph()), Some(tile));
        }
    }

    #[test]
    fn test_is_wall() {
        assert!(TileSymbol::WallTopRight.is_wall());
        assert!(!TileSymbol::Door.is_wall());
        assert!(!TileSymbol::Skull.is_wall());
    }
}
