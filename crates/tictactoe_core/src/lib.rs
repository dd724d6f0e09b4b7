//! Tic-tac-toe game logic.
//!
//! - **Rules**: pure functions evaluating a [`Board`] into an [`Outcome`].
//! - **Game**: the controller holding board, turn and undo history.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, MoveDisposition, Player, Position};
//!
//! let mut game = Game::new();
//! assert_eq!(game.apply_move(Position::Center), MoveDisposition::Placed);
//! assert_eq!(game.apply_move(Position::Center), MoveDisposition::Occupied);
//! assert_eq!(game.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveDisposition};
pub use position::Position;
pub use rules::{Line, Outcome, Win, calculate_outcome, check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
