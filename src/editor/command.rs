//! Editor command line parsing.
//!
//! One command per line, whitespace separated:
//!
//! ```text
//! tile wall        select a tile by name, glyph or number key (1-9)
//! paint 3 4        place the selected tile
//! door 5 0         place a door, asking for its destination
//! room 1           switch rooms
//! add-room 8 8     append a room (size optional)
//! ```

use thiserror::Error;

use crate::types::TileSymbol;

/// A parsed editor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tile(TileSymbol),
    Paint { x: i32, y: i32 },
    Door { x: i32, y: i32 },
    RemoveDoor { x: i32, y: i32 },
    Decorate { x: i32, y: i32, symbol: TileSymbol },
    Undecorate { x: i32, y: i32 },
    Room(usize),
    AddRoom(Option<(usize, usize)>),
    Show,
    Doors,
    Dump,
    Validate,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unknown tile '{0}'")]
    UnknownTile(String),
}

type Result<T> = std::result::Result<T, CommandError>;

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  tile <name|glyph|1-9>   select the tile to paint
  paint <x> <y>           place the selected tile (Door asks for a destination)
  door <x> <y>            place a door, asking for its destination
  remove-door <x> <y>     remove a door and clear its cell
  decorate <x> <y> <tile> add a decoration
  undecorate <x> <y>      remove all decorations at a cell
  room <n>                switch to room n
  add-room [<w> <h>]      append a room
  show                    draw the current room
  doors                   list doors leaving the current room
  dump                    print the map in editor-native JSON
  validate                check the map for problems
  save                    write the map file
  help                    show this text
  quit                    leave the editor";

/// Parse a tile argument: a symbol name (any case), its glyph, or a number
/// key where 1 is `Empty` and 9 is `Door`.
pub fn parse_tile(arg: &str) -> Result<TileSymbol> {
    if let Some(tile) = TileSymbol::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(arg))
    {
        return Ok(tile);
    }

    let mut chars = arg.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = c.to_digit(10).filter(|d| (1..=9).contains(d)) {
            return Ok(TileSymbol::ALL[digit as usize - 1]);
        }
        if let Some(tile) = TileSymbol::from_glyph(c) {
            return Ok(tile);
        }
    }

    Err(CommandError::UnknownTile(arg.to_string()))
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T> {
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

fn position(command: &'static str, args: &[&str]) -> Result<(i32, i32)> {
    match args {
        [x, y, ..] => Ok((number(x)?, number(y)?)),
        _ => Err(CommandError::MissingArgument {
            command,
            what: "<x> <y>",
        }),
    }
}

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match name {
        "tile" => match args.first() {
            Some(arg) => Command::Tile(parse_tile(arg)?),
            None => {
                return Err(CommandError::MissingArgument {
                    command: "tile",
                    what: "a tile",
                })
            }
        },
        "paint" | "p" => {
            let (x, y) = position("paint", args)?;
            Command::Paint { x, y }
        }
        "door" => {
            let (x, y) = position("door", args)?;
            Command::Door { x, y }
        }
        "remove-door" => {
            let (x, y) = position("remove-door", args)?;
            Command::RemoveDoor { x, y }
        }
        "decorate" => {
            let (x, y) = position("decorate", args)?;
            let symbol = match args.get(2) {
                Some(arg) => parse_tile(arg)?,
                None => TileSymbol::Skull,
            };
            Command::Decorate { x, y, symbol }
        }
        "undecorate" => {
            let (x, y) = position("undecorate", args)?;
            Command::Undecorate { x, y }
        }
        "room" => match args.first() {
            Some(arg) => Command::Room(number(arg)?),
            None => {
                return Err(CommandError::MissingArgument {
                    command: "room",
                    what: "a room number",
                })
            }
        },
        "add-room" => match args {
            [] => Command::AddRoom(None),
            [w, h, ..] => Command::AddRoom(Some((number(w)?, number(h)?))),
            [_] => {
                return Err(CommandError::MissingArgument {
                    command: "add-room",
                    what: "both <w> and <h>",
                })
            }
        },
        "show" => Command::Show,
        "doors" => Command::Doors,
        "dump" => Command::Dump,
        "validate" => Command::Validate,
        "save" => Command::Save,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
