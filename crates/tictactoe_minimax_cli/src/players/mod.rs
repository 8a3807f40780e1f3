//! Contestant trait and implementations.

mod engine;
mod human;
mod random;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use tictactoe_minimax::{Action, Board, Utility};

/// Anything that can pick a move for the side to play.
pub trait Contestant {
    /// Chooses an action on `board`, which is never terminal.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;

    /// Value the contestant assigned to its most recent choice, if it
    /// evaluates positions at all.
    fn last_value(&self) -> Option<Utility> {
        None
    }
}
