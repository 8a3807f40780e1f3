//! A contestant that picks uniformly among legal moves.

use super::Contestant;
use anyhow::Result;
use rand::Rng;
use rand::seq::IteratorRandom;
use tictactoe_minimax::{Action, Board, actions};

/// Random mover, mostly useful as a sparring partner for the engine.
pub struct RandomPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random contestant drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Contestant for RandomPlayer<R> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        actions(board)
            .into_iter()
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No legal moves available"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
