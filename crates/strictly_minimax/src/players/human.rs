//! Human player reading moves from a line-based input.

use super::Contestant;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{Action, Board, result};
use tracing::debug;

/// Parses a move typed by a human.
///
/// Accepts a cell number `1`-`9` as shown on the rendered board, or a
/// `row col` pair (0-based) separated by whitespace or a comma.
pub fn parse_action(input: &str) -> Option<Action> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => cell.parse().ok().and_then(Action::from_cell_number),
        [row, col] => Some(Action::new(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

/// Human player prompting on `output` and reading from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanPlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        loop {
            write!(self.output, "{}, your move (1-9 or \"row col\"): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed");
            }

            let Some(action) = parse_action(&line) else {
                writeln!(self.output, "Could not read {:?} as a move.", line.trim())?;
                continue;
            };

            match result(board, action) {
                Ok(_) => {
                    debug!(player = %self.name, %action, "Human chose move");
                    return Ok(action);
                }
                Err(e) => writeln!(self.output, "{}.", e)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
