//! Minimax engine contestant.

use super::Contestant;
use anyhow::Result;
use tictactoe_minimax::{Action, Board, Utility, best_choice};
use tracing::{debug, instrument};

/// Plays the move returned by exhaustive minimax search.
pub struct EnginePlayer {
    name: String,
    last_value: Option<Utility>,
}

impl EnginePlayer {
    /// Creates a new engine contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_value: None,
        }
    }
}

impl Contestant for EnginePlayer {
    #[instrument(skip(self, board), fields(engine = %self.name, %board))]
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let choice = best_choice(board)
            .ok_or_else(|| anyhow::anyhow!("No legal moves on a finished board"))?;
        debug!(action = %choice.action, value = choice.value, "Engine chose action");
        self.last_value = Some(choice.value);
        Ok(choice.action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_value(&self) -> Option<Utility> {
        self.last_value
    }
}
