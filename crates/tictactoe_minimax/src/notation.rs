//! Compact text notation for boards.
//!
//! A board is written as nine cells in row-major order, `X`, `O` or `.`,
//! optionally split into rows with `/`: `XX./OO./...`.

use crate::types::{Board, Cell, Player};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board from text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid cell character {:?} at cell {}", character, index)]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Row-major index of the cell being read.
        index: usize,
    },
    /// The notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongLength {
        /// Number of cells read.
        found: usize,
    },
}

fn parse_cell(character: char) -> Option<Cell> {
    match character {
        'X' | 'x' => Some(Cell::Occupied(Player::X)),
        'O' | 'o' => Some(Cell::Occupied(Player::O)),
        '.' | '-' | '_' | ' ' => Some(Cell::Empty),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = [[Cell::Empty; 3]; 3];
        let mut found = 0;
        for character in s.chars() {
            if matches!(character, '/' | '|' | '\n' | '\r') {
                continue;
            }
            let cell = parse_cell(character).ok_or(ParseBoardError::InvalidCell {
                character,
                index: found,
            })?;
            if found < 9 {
                rows[found / 3][found % 3] = cell;
            }
            found += 1;
        }
        if found != 9 {
            return Err(ParseBoardError::WrongLength { found });
        }
        Ok(Board::from_rows(rows))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(Action::ALL[0]), Cell::Occupied(Player::X));
        assert_eq!(board.get(Action::ALL[4]), Cell::Occupied(Player::O));
        assert_eq!(board.get(Action::ALL[2]), Cell::Empty);
        assert_eq!(board, "xx-oo----".parse::<Board>().unwrap());
    }

    #[test]
    fn test_display_round_trips() {
        let board: Board = "X.O|.X.|O..".parse().unwrap();
        assert_eq!(board.to_string(), "X.O/.X./O..");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_rejects_bad_character() {
        assert_eq!(
            "XX?/OO./...".parse::<Board>(),
            Err(ParseBoardError::InvalidCell {
                character: '?',
                index: 2
            })
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "XX./OO.".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 6 })
        );
        assert_eq!(
            "XX./OO./..../".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 10 })
        );
    }
}
