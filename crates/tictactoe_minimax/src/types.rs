//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Game-theoretic score of a position from X's perspective.
pub type Utility = i32;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: nothing in this crate mutates a board once it has been
/// handed out. Successors are built with [`crate::result`], which returns a
/// fresh board and leaves the original untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    rows: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.rows
    }

    /// Gets the cell at the given action's coordinates.
    pub fn get(&self, action: Action) -> Cell {
        self.rows[action.row()][action.col()]
    }

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action).is_empty()
    }

    /// Iterates over every cell with its coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::ALL.into_iter().map(|action| (action, self.get(action)))
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(player))
            .count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Builds the board that differs from `self` only at `action`.
    pub(crate) fn with_cell(&self, action: Action, cell: Cell) -> Self {
        let mut rows = self.rows;
        rows[action.row()][action.col()] = cell;
        Self { rows }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show the key (1-9) used to select them.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (r * 3 + c + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                out.push_str(&symbol);
                if c < 2 {
                    out.push('|');
                }
            }
            if r < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

/// Outcome of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// The board filled up without a line.
    #[display("Draw")]
    Draw,
    /// The game is still being played.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Checks if the game is over.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}
