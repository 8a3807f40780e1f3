//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The full tree is searched every
//! time with no pruning or caching; a 3x3 board has few enough positions that
//! brute force finishes well within interactive latency.

use crate::action::Action;
use crate::rules::{player, successors, terminal, utility};
use crate::types::{Board, Player, Utility};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An action together with the value it leads to under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// The chosen action.
    pub action: Action,
    /// Minimax value of the position after `action`.
    pub value: Utility,
}

/// Best value X can force from `board`, assuming O replies optimally.
pub fn max_value(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .fold(Utility::MIN, Utility::max)
}

/// Best value O can force from `board`, assuming X replies optimally.
pub fn min_value(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .fold(Utility::MAX, Utility::min)
}

/// Game-theoretic value of `board` with both sides playing optimally.
#[instrument(skip(board), fields(%board))]
pub fn evaluate(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Returns the optimal action for the player to move, or `None` if the game
/// is over.
pub fn minimax(board: &Board) -> Option<Action> {
    best_choice(board).map(|choice| choice.action)
}

/// Like [`minimax`], but also reports the value of the chosen action.
///
/// Candidates are scanned in [`crate::actions`] order and only a strictly
/// better value replaces the current choice, so among equally good actions
/// the first one wins.
#[instrument(skip(board), fields(%board))]
pub fn best_choice(board: &Board) -> Option<Choice> {
    if terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }

    let mover = player(board);
    let mut best: Option<Choice> = None;
    for (action, next) in successors(board) {
        let value = match mover {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };
        let improves = match best {
            None => true,
            Some(current) => match mover {
                Player::X => value > current.value,
                Player::O => value < current.value,
            },
        };
        if improves {
            best = Some(Choice { action, value });
        }
    }

    debug!(%mover, choice = ?best, "Search complete");
    best
}
