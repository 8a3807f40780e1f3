//! Board predicates and state transitions.
//!
//! Everything here is a pure function of a [`Board`] snapshot. Turn order is
//! never stored; it is recomputed from the mark counts on every call.

use crate::action::{Action, InvalidAction};
use crate::types::{Board, Cell, Outcome, Player, Utility};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// Winning lines in scan order: rows, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the starting board (all cells empty).
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves whenever it has not placed more marks than O.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell on the board.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction`] if the target cell is already occupied.
#[instrument(skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if let Cell::Occupied(occupant) = board.get(action) {
        debug!(%occupant, "Rejected move onto occupied cell");
        return Err(InvalidAction { action, occupant });
    }
    Ok(board.with_cell(action, player(board).into()))
}

/// Successor boards for every legal action, in [`actions`] order.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Cell::from(player(board));
    actions(board)
        .into_iter()
        .map(move |action| (action, board.with_cell(action, mark)))
}

/// Returns the mark on the first complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &[(usize, usize); 3]) -> Option<Player> {
    let rows = board.rows();
    let [a, b, c] = line.map(|(row, col)| rows[row][col]);
    match a {
        Cell::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

/// Checks if the game is over: someone has won or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a finished board: `1` if X won, `-1` if O won, `0` otherwise.
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Checks that the board could arise from legal play starting with X.
///
/// Mark counts must be equal or X ahead by one, at most one player may own a
/// complete line, and a winner must have made the last move.
#[instrument(skip(board), fields(%board))]
pub fn is_consistent(board: &Board) -> bool {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);
    if x_count != o_count && x_count != o_count + 1 {
        warn!(x_count, o_count, "Mark counts out of balance");
        return false;
    }

    let owners: BTreeSet<Player> = LINES
        .iter()
        .filter_map(|line| line_owner(board, line))
        .collect();
    let valid = match owners.len() {
        0 => true,
        1 => owners
            .first()
            .is_some_and(|&owner| player(board) == owner.opponent()),
        _ => false,
    };
    if !valid {
        warn!(?owners, x_count, o_count, "Winning lines inconsistent with turn order");
    }
    valid
}
