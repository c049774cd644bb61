//! The interactive editing session.
//!
//! `EditorSession` is the application context: it owns the map, the save
//! path, the configuration, the selected tile and the status printer. It is
//! built once at startup and driven line by line from any reader/writer
//! pair.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::error::Result;
use crate::format::{load_map_file, save_map_file};
use crate::output::{display_path, plural, Printer};
use crate::types::{Map, TileSymbol};
use crate::validation::{print_diagnostics, validate_map};

use super::action::{Action, ActionOutcome};
use super::command::{parse_command, Command, HELP};
use super::prompt::{LinePrompt, RoomPrompt};
use super::render::{render_current_room, render_doors, render_legend};

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct EditorSession {
    map: Map,
    path: PathBuf,
    config: EditorConfig,
    selected: TileSymbol,
    printer: Printer,
}

impl EditorSession {
    pub fn new(map: Map, path: PathBuf, config: EditorConfig, printer: Printer) -> Self {
        Self {
            map,
            path,
            config,
            selected: TileSymbol::Wall,
            printer,
        }
    }

    /// Start a session on `path`.
    ///
    /// A missing path or file starts a new map; a file that cannot be read
    /// or parsed is reported and also starts a new map.
    pub fn open(path: Option<&Path>, config: EditorConfig, printer: Printer) -> Self {
        let target = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.default_file.clone());

        let map = match path {
            Some(path) if path.exists() => match load_map_file(path) {
                Ok(map) => {
                    printer.status(
                        "Loaded",
                        &format!("{} ({})", display_path(path), summary(&map)),
                    );
                    map
                }
                Err(e) => {
                    printer.error("Error", &e.to_string());
                    printer.warning("Starting", "with a new map");
                    Map::new()
                }
            },
            _ => {
                printer.info(
                    "Creating",
                    &format!("new map, saving to {}", display_path(&target)),
                );
                Map::new()
            }
        };

        Self::new(map, target, config, printer)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn selected(&self) -> TileSymbol {
        self.selected
    }

    /// Apply a selection or room-structure action.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome> {
        let outcome = match action {
            Action::SelectTile(tile) => {
                self.selected = tile;
                ActionOutcome::TileSelected(tile)
            }
            Action::AddRoom => {
                let index = self
                    .map
                    .add_room(self.config.room_width, self.config.room_height)?;
                ActionOutcome::RoomAdded(index)
            }
            Action::SelectRoom(index) => {
                if self.map.set_current_room(index) {
                    ActionOutcome::RoomSelected(index)
                } else {
                    ActionOutcome::NoSuchRoom(index)
                }
            }
        };
        Ok(outcome)
    }

    /// Place a door at `(x, y)` of the current room, asking `prompt` for the
    /// destination. Returns the destination when a door was placed.
    pub fn place_door(&mut self, x: i32, y: i32, prompt: &mut impl RoomPrompt) -> Option<usize> {
        let current = self.map.current_room();
        if !self.map.current().contains(x, y) || self.map.room_count() < 2 {
            return None;
        }

        let destination = prompt.prompt_for_room_index(0, self.map.room_count() - 1)?;
        if destination == current || destination >= self.map.room_count() {
            return None;
        }

        self.map.add_door(x, y, destination);
        Some(destination)
    }

    /// Place the selected tile. `Door` goes through the destination prompt.
    pub fn paint(&mut self, x: i32, y: i32, prompt: &mut impl RoomPrompt) {
        if self.selected == TileSymbol::Door {
            self.place_door(x, y, prompt);
        } else {
            self.map.paint_tile(x, y, self.selected);
        }
    }

    /// Write the map file, validating first when configured to.
    pub fn save(&self) -> Result<()> {
        if self.config.validate_on_save {
            let result = validate_map(&self.map);
            if !result.is_ok() {
                print_diagnostics(&result, &self.printer);
            }
        }

        save_map_file(&self.map, &self.path)?;
        self.printer.status(
            "Saved",
            &format!("{} ({})", display_path(&self.path), summary(&self.map)),
        );
        Ok(())
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "Type 'help' for commands.")?;
        self.show(output)?;

        loop {
            write!(output, "room {}> ", self.map.current_room())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match parse_command(&line) {
                Ok(Some(command)) => {
                    if self.execute(command, input, output)? == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(output, "{}", e)?,
            }
        }

        Ok(())
    }

    /// Execute one command. Data errors are reported on `output`; only I/O
    /// failures on the session streams are returned.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow> {
        match command {
            Command::Tile(tile) => {
                let outcome = self.dispatch(Action::SelectTile(tile))?;
                self.report(outcome, output)?;
            }
            Command::Paint { x, y } if self.selected == TileSymbol::Door => {
                self.door_command(x, y, input, output)?
            }
            Command::Paint { x, y } => self.map.paint_tile(x, y, self.selected),
            Command::Door { x, y } => self.door_command(x, y, input, output)?,
            Command::RemoveDoor { x, y } => self.map.remove_door(x, y),
            Command::Decorate { x, y, symbol } => {
                self.map.current_mut().add_decoration(x, y, symbol)
            }
            Command::Undecorate { x, y } => self.map.current_mut().remove_decoration(x, y),
            Command::Room(index) => {
                let outcome = self.dispatch(Action::SelectRoom(index))?;
                self.report(outcome, output)?;
            }
            Command::AddRoom(None) => match self.dispatch(Action::AddRoom) {
                Ok(outcome) => self.report(outcome, output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::AddRoom(Some((width, height))) => match self.map.add_room(width, height) {
                Ok(index) => self.report(ActionOutcome::RoomAdded(index), output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Show => self.show(output)?,
            Command::Doors => writeln!(output, "{}", render_doors(&self.map))?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.map.to_data())
                    .map_err(std::io::Error::other)?;
                writeln!(output, "{}", json)?;
            }
            Command::Validate => print_diagnostics(&validate_map(&self.map), &self.printer),
            Command::Save => {
                if let Err(e) = self.save() {
                    self.printer.error("Error", &e.to_string());
                }
            }
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                writeln!(output, "\nTiles:\n{}", render_legend())?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Place a door from a command line, explaining why when it cannot be.
    fn door_command<R: BufRead, W: Write>(
        &mut self,
        x: i32,
        y: i32,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        if self.map.room_count() < 2 {
            writeln!(output, "Add another room first")?;
        } else if !self.map.current().contains(x, y) {
            writeln!(output, "({}, {}) is outside the room", x, y)?;
        } else {
            let current = self.map.current_room();
            let mut prompt = LinePrompt::new(input, output).excluding(current);
            self.place_door(x, y, &mut prompt);
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: ActionOutcome, output: &mut W) -> Result<()> {
        match outcome {
            ActionOutcome::TileSelected(tile) => writeln!(output, "Selected {}", tile)?,
            ActionOutcome::RoomAdded(index) => writeln!(output, "Added room {}", index)?,
            ActionOutcome::RoomSelected(_) => self.show(output)?,
            ActionOutcome::NoSuchRoom(index) => writeln!(output, "No room {}", index)?,
        }
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<()> {
        let room = self.map.current();
        writeln!(
            output,
            "Room {} of {} ({}x{}), painting {}",
            self.map.current_room(),
            self.map.room_count(),
            room.width(),
            room.height(),
            self.selected
        )?;
        writeln!(output, "{}", render_current_room(&self.map))?;
        Ok(())
    }
}

fn summary(map: &Map) -> String {
    format!(
        "{}, {}",
        plural(map.room_count(), "room", "rooms"),
        plural(map.doors().len(), "door", "doors")
    )
}
