//! Tests for minimax search.
//!
//! Optimal actions are only compared exactly where a position has a single
//! optimal move; elsewhere the tests check the value of the chosen action.

use rand::seq::IteratorRandom;
use tictactoe_minimax::{
    Action, Board, Player, actions, best_choice, evaluate, initial_state, minimax, player, result,
    terminal, utility,
};

/// Plays the engine as `engine` against every possible opponent reply and
/// returns the worst utility (from the engine's point of view) reached.
fn worst_case(board: &Board, engine: Player) -> i32 {
    if terminal(board) {
        return match engine {
            Player::X => utility(board),
            Player::O => -utility(board),
        };
    }
    if player(board) == engine {
        let action = minimax(board).unwrap();
        worst_case(&result(board, action).unwrap(), engine)
    } else {
        actions(board)
            .into_iter()
            .map(|action| worst_case(&result(board, action).unwrap(), engine))
            .min()
            .unwrap()
    }
}

#[test]
fn test_engine_as_x_never_loses_to_any_reply() {
    assert!(worst_case(&initial_state(), Player::X) >= 0);
}

#[test]
fn test_engine_as_o_never_loses_to_any_reply() {
    assert!(worst_case(&initial_state(), Player::O) >= 0);
}

#[test]
fn test_engine_never_loses_to_random_o() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut board = initial_state();
        while !terminal(&board) {
            let action = match player(&board) {
                Player::X => minimax(&board).unwrap(),
                Player::O => actions(&board).into_iter().choose(&mut rng).unwrap(),
            };
            board = result(&board, action).unwrap();
        }
        assert!(utility(&board) >= 0, "engine lost: {}", board);
    }
}

#[test]
fn test_self_play_draws() {
    let mut board = initial_state();
    let mut plies = 0;
    while let Some(action) = minimax(&board) {
        board = result(&board, action).unwrap();
        plies += 1;
    }
    assert_eq!(plies, 9);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_opening_move_is_on_board_and_draws() {
    let board = initial_state();
    let choice = best_choice(&board).unwrap();
    assert!(Action::ALL.contains(&choice.action));
    assert!(Action::CORNERS.contains(&choice.action) || choice.action == Action::CENTER);
    assert_eq!(choice.value, 0);
    assert_eq!(evaluate(&result(&board, choice.action).unwrap()), 0);
}

#[test]
fn test_takes_immediate_win() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board), Action::new(0, 2));
    assert_eq!(best_choice(&board).unwrap().value, 1);
}

#[test]
fn test_forced_loss_still_returns_a_move() {
    // X has a fork; O can only delay.
    let board: Board = "X.X/.O./X.O".parse().unwrap();
    assert_eq!(player(&board), Player::O);
    assert_eq!(evaluate(&board), 1);
    let action = minimax(&board).unwrap();
    assert!(actions(&board).contains(&action));
}

#[test]
fn test_terminal_board_returns_none() {
    let board: Board = "OOO/XX./X..".parse().unwrap();
    assert!(terminal(&board));
    assert_eq!(minimax(&board), None);
    assert_eq!(best_choice(&board), None);
}
