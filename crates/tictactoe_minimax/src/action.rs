//! Board coordinates and the error raised when one cannot be played.
//!
//! An action names the empty cell a player wants to fill. It carries no
//! player: the mark is always derived from the board it is applied to.

use crate::types::Player;
use serde::{Deserialize, Deserializer, Serialize};

/// A `(row, col)` coordinate on the board, each in `0..3`.
///
/// Actions order row-major, which is also the order [`crate::actions`]
/// yields them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Center cell.
    pub const CENTER: Action = Action::at(1, 1);

    /// All 9 cells, row-major.
    pub const ALL: [Action; 9] = [
        Action::at(0, 0),
        Action::at(0, 1),
        Action::at(0, 2),
        Action::at(1, 0),
        Action::at(1, 1),
        Action::at(1, 2),
        Action::at(2, 0),
        Action::at(2, 1),
        Action::at(2, 2),
    ];

    /// The four corner cells.
    pub const CORNERS: [Action; 4] = [
        Action::at(0, 0),
        Action::at(0, 2),
        Action::at(2, 0),
        Action::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates an action from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts the action to its row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row of the target cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the target cell.
    pub fn col(self) -> usize {
        self.col
    }
}

/// Deserializes through [`Action::new`], so off-board coordinates are
/// rejected instead of reaching the board indexer.
impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Coordinates {
            row: usize,
            col: usize,
        }

        let Coordinates { row, col } = Coordinates::deserialize(deserializer)?;
        Action::new(row, col).ok_or_else(|| {
            <D::Error as serde::de::Error>::custom(format!("action ({}, {}) is off the board", row, col))
        })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Raised by [`crate::result`] when the target cell is already occupied.
///
/// This always points at a caller-side defect, such as replaying a move from
/// a stale action set, so it is reported rather than corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid action: {} is already occupied by {}", action, occupant)]
pub struct InvalidAction {
    /// The rejected action.
    pub action: Action,
    /// The mark already in the target cell.
    pub occupant: Player,
}
