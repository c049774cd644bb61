//! Terminal front end for editing maps.
//!
//! The session reads one command per line, applies it to the map and draws
//! rooms as text. Door destinations are collected through `RoomPrompt`, so
//! the map only ever sees validated room indices.

mod action;
mod command;
mod prompt;
mod render;
mod session;

pub use action::{Action, ActionOutcome};
pub use command::{parse_command, parse_tile, Command, CommandError, HELP};
pub use prompt::{parse_room_index, LinePrompt, RoomInputError, RoomPrompt};
pub use render::{render_current_room, render_doors, render_legend, render_room};
pub use session::{EditorSession, Flow};
