//! Game orchestration between contestants.

use crate::players::Contestant;
use anyhow::Result;
use derive_getters::Getters;
use std::io::Write;
use tictactoe_minimax::{Action, Board, Outcome, Player, initial_state, outcome, player, result, terminal};
use tracing::{debug, info, instrument};

/// Everything that happened in one finished game.
#[derive(Debug, Clone, Getters)]
pub struct GameRecord {
    /// Moves in the order they were played.
    moves: Vec<(Player, Action)>,
    /// Board once the game ended.
    final_board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Runs a game between the X and O contestants.
pub struct Orchestrator<'a> {
    player_x: Box<dyn Contestant + 'a>,
    player_o: Box<dyn Contestant + 'a>,
    show_values: bool,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Contestant + 'a>, player_o: Box<dyn Contestant + 'a>) -> Self {
        Self {
            player_x,
            player_o,
            show_values: false,
        }
    }

    /// Prints contestants' evaluations alongside their moves.
    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Plays one game from the initial board, narrating it to `out`.
    ///
    /// The side to move is always derived from the board, so contestants
    /// alternate without any stored turn state.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, out: &mut dyn Write) -> Result<GameRecord> {
        info!("Starting game");

        let mut board = initial_state();
        let mut moves = Vec::new();
        let show_values = self.show_values;
        writeln!(out, "{}\n", board.render())?;

        while !terminal(&board) {
            let mark = player(&board);
            let contestant = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %contestant.name(), %mark, "Waiting for move");
            let action = contestant.choose(&board)?;
            board = result(&board, action)?;
            moves.push((mark, action));

            match contestant.last_value().filter(|_| show_values) {
                Some(value) => writeln!(
                    out,
                    "{} ({}) plays {} [value {}]",
                    contestant.name(),
                    mark,
                    action,
                    value
                )?,
                None => writeln!(out, "{} ({}) plays {}", contestant.name(), mark, action)?,
            }
            writeln!(out, "{}\n", board.render())?;
        }

        let outcome = outcome(&board);
        let summary = match outcome.winner() {
            Some(Player::X) => format!("{} wins!", self.player_x.name()),
            Some(Player::O) => format!("{} wins!", self.player_o.name()),
            None => "It's a draw.".to_string(),
        };
        writeln!(out, "{}", summary)?;

        info!(%outcome, plies = moves.len(), "Game over");
        Ok(GameRecord {
            moves,
            final_board: board,
            outcome,
        })
    }
}

/// Running score over several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, derive_more::Display)]
#[display("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws)]
pub struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{EnginePlayer, RandomPlayer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of moves.
    struct Scripted {
        moves: std::vec::IntoIter<Action>,
    }

    impl Scripted {
        fn new(keys: &[usize]) -> Self {
            let moves: Vec<Action> = keys.iter().filter_map(|&k| Action::from_index(k)).collect();
            Self {
                moves: moves.into_iter(),
            }
        }
    }

    impl Contestant for Scripted {
        fn choose(&mut self, _board: &Board) -> Result<Action> {
            self.moves
                .next()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            "Script"
        }
    }

    #[test]
    fn test_engines_draw() {
        let mut orchestrator = Orchestrator::new(
            Box::new(EnginePlayer::new("Engine X")),
            Box::new(EnginePlayer::new("Engine O")),
        );
        let record = orchestrator.run(&mut std::io::sink()).unwrap();
        assert_eq!(*record.outcome(), Outcome::Draw);
        assert_eq!(record.moves().len(), 9);
        assert_eq!(*record.outcome(), outcome(record.final_board()));
    }

    #[test]
    fn test_stops_as_soon_as_line_completes() {
        // X takes the top row on its third move.
        let mut orchestrator = Orchestrator::new(
            Box::new(Scripted::new(&[0, 1, 2])),
            Box::new(Scripted::new(&[3, 4])),
        );
        let mut out = Vec::new();
        let record = orchestrator.run(&mut out).unwrap();
        assert_eq!(*record.outcome(), Outcome::XWins);
        assert_eq!(record.moves().len(), 5);
        assert_eq!(record.final_board().to_string(), "XXX/OO./...");
        assert!(String::from_utf8(out).unwrap().ends_with("Script wins!\n"));
    }

    #[test]
    fn test_illegal_move_surfaces_error() {
        let mut orchestrator = Orchestrator::new(
            Box::new(Scripted::new(&[4])),
            Box::new(Scripted::new(&[4])),
        );
        let err = orchestrator.run(&mut std::io::sink()).unwrap_err();
        assert!(err.to_string().contains("already occupied"));
    }

    #[test]
    fn test_show_values_prints_engine_value() {
        let mut orchestrator = Orchestrator::new(
            Box::new(EnginePlayer::new("Engine")),
            Box::new(RandomPlayer::new("Random", StdRng::seed_from_u64(3))),
        )
        .with_show_values(true);
        let mut out = Vec::new();
        let record = orchestrator.run(&mut out).unwrap();
        assert_ne!(*record.outcome(), Outcome::OWins);
        assert!(String::from_utf8(out).unwrap().contains("Engine (X) plays (0, 0) [value 0]"));
    }

    #[test]
    fn test_tally_counts_outcomes() {
        let mut tally = Tally::default();
        tally.record(Outcome::XWins);
        tally.record(Outcome::Draw);
        tally.record(Outcome::Draw);
        assert_eq!(tally.to_string(), "X wins: 1, O wins: 0, draws: 2");
    }
}
