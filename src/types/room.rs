//! Room type: a fixed-size tile grid with a decoration overlay.
//!
//! A fresh room has its border filled in:
//!
//! ```text
//! /##########\
//! [..........]
//! [..........]
//! ############
//! ```
//!
//! The bottom corners stay plain `Wall`, the same as the rest of the top and
//! bottom rows. Callers may overwrite border cells freely afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

use super::TileSymbol;

/// Default room width in cells.
pub const DEFAULT_ROOM_WIDTH: usize = 12;

/// Default room height in cells.
pub const DEFAULT_ROOM_HEIGHT: usize = 12;

/// Smallest width or height that still has a border.
pub const MIN_ROOM_SIZE: usize = 2;

/// Largest width or height a room may have.
pub const MAX_ROOM_SIZE: usize = 1024;

/// A decoration placed over a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub x: i32,
    pub y: i32,
    pub symbol: TileSymbol,
}

/// A single rectangular area of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    width: usize,
    height: usize,

    /// Row-major: grid[y][x].
    grid: Vec<Vec<TileSymbol>>,

    /// Overlay entries in insertion order; duplicates allowed.
    decorations: Vec<Decoration>,
}

impl Room {
    /// Create a room with its border filled in. Each side must be between
    /// `MIN_ROOM_SIZE` and `MAX_ROOM_SIZE` cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let sizes = MIN_ROOM_SIZE..=MAX_ROOM_SIZE;
        if !sizes.contains(&width) || !sizes.contains(&height) {
            return Err(MapError::InvalidDimension { width, height });
        }

        Ok(Self::with_border(width, height))
    }

    /// Build a bordered room. Both dimensions must be at least `MIN_ROOM_SIZE`.
    fn with_border(width: usize, height: usize) -> Self {
        let mut grid = vec![vec![TileSymbol::Empty; width]; height];

        for x in 0..width {
            grid[0][x] = TileSymbol::Wall;
            grid[height - 1][x] = TileSymbol::Wall;
        }
        for row in grid.iter_mut().take(height - 1).skip(1) {
            row[0] = TileSymbol::WallLeft;
            row[width - 1] = TileSymbol::WallRight;
        }
        grid[0][0] = TileSymbol::WallTopLeft;
        grid[0][width - 1] = TileSymbol::WallTopRight;

        Self {
            width,
            height,
            grid,
            decorations: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert signed coordinates to a grid index, if in bounds.
    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Check whether a position lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Overwrite a cell. Out-of-bounds positions are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, symbol: TileSymbol) {
        if let Some((x, y)) = self.index(x, y) {
            self.grid[y][x] = symbol;
        }
    }

    /// Get the symbol at a position, `Empty` when out of bounds.
    pub fn get_tile(&self, x: i32, y: i32) -> TileSymbol {
        self.index(x, y)
            .map(|(x, y)| self.grid[y][x])
            .unwrap_or_default()
    }

    /// Get a reference to the grid.
    pub fn grid(&self) -> &[Vec<TileSymbol>] {
        &self.grid
    }

    /// Iterate over all cells with their positions.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, TileSymbol)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &t)| (x as i32, y as i32, t))
        })
    }

    /// Append a decoration, even if one already sits at this position.
    pub fn add_decoration(&mut self, x: i32, y: i32, symbol: TileSymbol) {
        self.decorations.push(Decoration { x, y, symbol });
    }

    /// Remove every decoration at this position.
    pub fn remove_decoration(&mut self, x: i32, y: i32) {
        self.decorations.retain(|d| d.x != x || d.y != y);
    }

    /// The decoration shown at a position: the most recently added one.
    pub fn decoration_at(&self, x: i32, y: i32) -> Option<TileSymbol> {
        self.decorations
            .iter()
            .rev()
            .find(|d| d.x == x && d.y == y)
            .map(|d| d.symbol)
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Convert to the editor-native structural form.
    pub fn to_data(&self) -> RoomData {
        RoomData {
            width: self.width,
            height: self.height,
            grid: self
                .grid
                .iter()
                .map(|row| row.iter().map(|t| t.name().to_string()).collect())
                .collect(),
            decorations: self
                .decorations
                .iter()
                .map(|d| (d.x, d.y, d.symbol.name().to_string()))
                .collect(),
        }
    }

    /// Build a room from the editor-native structural form.
    pub fn from_data(data: &RoomData) -> Result<Self> {
        let mut room = Self::new(data.width, data.height).map_err(|_| MapError::MalformedRoom {
            message: format!("invalid dimensions {}x{}", data.width, data.height),
        })?;

        if data.grid.len() != data.height {
            return Err(MapError::MalformedRoom {
                message: format!(
                    "expected {} rows, found {}",
                    data.height,
                    data.grid.len()
                ),
            });
        }

        for (y, row) in data.grid.iter().enumerate() {
            if row.len() != data.width {
                return Err(MapError::MalformedRoom {
                    message: format!(
                        "row {} has {} cells, expected {}",
                        y,
                        row.len(),
                        data.width
                    ),
                });
            }
            for (x, name) in row.iter().enumerate() {
                room.grid[y][x] = name.parse()?;
            }
        }

        room.decorations = data
            .decorations
            .iter()
            .map(|(x, y, name)| {
                Ok(Decoration {
                    x: *x,
                    y: *y,
                    symbol: name.parse()?,
                })
            })
            .collect::<Result<_>>()?;

        Ok(room)
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::with_border(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT)
    }
}

/// Editor-native form of a room: symbolic names instead of codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomData {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<String>>,
    #[serde(default)]
    pub decorations: Vec<(i32, i32, String)>,
}
