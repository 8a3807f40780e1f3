//! Human player reading moves from a line-oriented input.

use super::Contestant;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_minimax::{Action, Board};
use tracing::debug;

/// Parses a move typed by a person.
///
/// Accepts a single key `1`-`9` (row-major, as shown by [`Board::render`]) or
/// a zero-based `row col` pair.
pub fn parse_action(input: &str) -> Option<Action> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [key] => {
            let key: usize = key.parse().ok()?;
            key.checked_sub(1).and_then(Action::from_index)
        }
        [row, col] => Action::new(row.parse().ok()?, col.parse().ok()?),
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
            write!(self.output, "Your move (1-9 or 'row col'): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_action(&line) {
                Some(action) if board.is_empty(action) => {
                    debug!(player = %self.name, %action, "Human chose action");
                    return Ok(action);
                }
                Some(action) => {
                    writeln!(self.output, "Cell {} is already taken.", action)?;
                }
                None => {
                    writeln!(self.output, "Could not read {:?} as a move.", line.trim())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_key_and_coordinates() {
        assert_eq!(parse_action("5"), Action::new(1, 1));
        assert_eq!(parse_action(" 1 1 \n"), Action::new(1, 1));
        assert_eq!(parse_action("9"), Action::new(2, 2));
        assert_eq!(parse_action("0 2"), Action::new(0, 2));
    }

    #[test]
    fn test_parse_rejects_off_board() {
        assert_eq!(parse_action("0"), None);
        assert_eq!(parse_action("10"), None);
        assert_eq!(parse_action("3 3"), None);
        assert_eq!(parse_action("a b"), None);
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_reprompts_until_valid_empty_cell() {
        let board: Board = "X../.../...".parse().unwrap();
        let input = Cursor::new("hello\n1\n2\n");
        let mut output = Vec::new();
        let action = HumanPlayer::new("Tester", input, &mut output)
            .choose(&board)
            .unwrap();
        assert_eq!(action, Action::new(0, 1).unwrap());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Could not read \"hello\""));
        assert!(transcript.contains("Cell (0, 0) is already taken."));
    }

    #[test]
    fn test_closed_input_is_error() {
        let board = Board::new();
        let mut player = HumanPlayer::new("Tester", Cursor::new(""), Vec::new());
        assert!(player.choose(&board).is_err());
    }
}
