//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! The crate is a closed set of pure functions over an immutable [`Board`]
//! value. A caller holds a board, asks [`minimax`] for the best action,
//! applies it with [`result`], and repeats until [`terminal`] holds.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board).expect("non-terminal board has a move");
//!     board = result(&board, action).expect("engine picks empty cells");
//! }
//! // Perfect play from both sides always draws.
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod notation;
mod rules;
mod search;
mod types;

pub use action::{Action, InvalidAction};
pub use notation::ParseBoardError;
pub use rules::{
    actions, initial_state, is_consistent, outcome, player, result, terminal, utility, winner,
};
pub use search::{Choice, best_choice, evaluate, max_value, min_value, minimax};
pub use types::{Board, Cell, Outcome, Player, Utility};
