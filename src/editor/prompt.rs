//! Door destination prompt.
//!
//! The data model only ever receives a validated room index. Anything the
//! user types is checked here first, and bad input keeps the prompt open.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Asks the user which room a new door should lead to.
pub trait RoomPrompt {
    /// Return an index in `min..=max`, or `None` when the user cancels.
    fn prompt_for_room_index(&mut self, min: usize, max: usize) -> Option<usize>;
}

/// Why a typed room index was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomInputError {
    #[error("'{0}' is not a room number")]
    NotANumber(String),

    #[error("room {index} is out of range {min}-{max}")]
    OutOfRange { index: usize, min: usize, max: usize },

    #[error("a door cannot lead to its own room")]
    SameRoom,
}

/// Validate one line of user input as a room index.
pub fn parse_room_index(
    input: &str,
    min: usize,
    max: usize,
    exclude: Option<usize>,
) -> Result<usize, RoomInputError> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| RoomInputError::NotANumber(input.to_string()))?;

    if index < min || index > max {
        return Err(RoomInputError::OutOfRange { index, min, max });
    }
    if exclude == Some(index) {
        return Err(RoomInputError::SameRoom);
    }

    Ok(index)
}

/// Line-based prompt over any reader/writer pair.
///
/// A blank line or end of input cancels.
pub struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    exclude: Option<usize>,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            input,
            output,
            exclude: None,
        }
    }

    /// Reject this index as well, even when it is in range.
    pub fn excluding(mut self, index: usize) -> Self {
        self.exclude = Some(index);
        self
    }
}

impl<R: BufRead, W: Write> RoomPrompt for LinePrompt<'_, R, W> {
    fn prompt_for_room_index(&mut self, min: usize, max: usize) -> Option<usize> {
        loop {
            write!(self.output, "Door destination ({}-{}, blank to cancel): ", min, max).ok()?;
            self.output.flush().ok()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).ok()? == 0 || line.trim().is_empty() {
                return None;
            }

            match parse_room_index(&line, min, max, self.exclude) {
                Ok(index) => return Some(index),
                Err(e) => writeln!(self.output, "  {}", e).ok()?,
            }
        }
    }
}
