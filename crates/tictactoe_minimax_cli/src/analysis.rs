//! Single-position analysis for the `best` subcommand.

use anyhow::Result;
use serde::Serialize;
use tictactoe_minimax::{
    Board, Choice, Outcome, Player, Utility, best_choice, evaluate, is_consistent, outcome,
    player, terminal,
};
use tracing::instrument;

/// What the engine makes of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    /// Board in text notation.
    pub board: String,
    /// Side to move, or `None` once the game is over.
    pub to_move: Option<Player>,
    /// Current classification of the board.
    pub outcome: Outcome,
    /// Best action and the value it leads to.
    pub best: Option<Choice>,
    /// Value of the position under optimal play.
    pub value: Utility,
}

/// Analyses `board`, refusing positions legal play cannot reach.
#[instrument(skip(board), fields(%board))]
pub fn analyze(board: &Board) -> Result<PositionReport> {
    if !is_consistent(board) {
        anyhow::bail!("Board {} cannot arise from legal play with X moving first", board);
    }
    Ok(PositionReport {
        board: board.to_string(),
        to_move: (!terminal(board)).then(|| player(board)),
        outcome: outcome(board),
        best: best_choice(board),
        value: evaluate(board),
    })
}

impl std::fmt::Display for PositionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        match (self.to_move, self.best) {
            (Some(mover), Some(choice)) => {
                writeln!(f, "To move: {}", mover)?;
                writeln!(f, "Best move: {} (key {})", choice.action, choice.action.index() + 1)?;
            }
            _ => writeln!(f, "Game over: {}", self.outcome)?,
        }
        write!(f, "Value: {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_minimax::Action;

    #[test]
    fn test_reports_winning_move() {
        let report = analyze(&"XX./OO./...".parse().unwrap()).unwrap();
        assert_eq!(report.to_move, Some(Player::X));
        assert_eq!(report.best.map(|c| c.action), Action::new(0, 2));
        assert_eq!(report.value, 1);
        assert_eq!(report.outcome, Outcome::InProgress);
        assert!(report.to_string().contains("Best move: (0, 2) (key 3)"));
    }

    #[test]
    fn test_reports_finished_game() {
        let report = analyze(&"XOX/XOO/OXX".parse().unwrap()).unwrap();
        assert_eq!(report.to_move, None);
        assert_eq!(report.best, None);
        assert_eq!(report.value, 0);
        assert!(report.to_string().contains("Game over: Draw"));
    }

    #[test]
    fn test_rejects_unreachable_board() {
        assert!(analyze(&"XXX/.../...".parse().unwrap()).is_err());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze(&"XX./OO./...".parse().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["board"], "XX./OO./...");
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["best"]["action"]["row"], 0);
        assert_eq!(json["best"]["action"]["col"], 2);
        assert_eq!(json["value"], 1);
    }
}
