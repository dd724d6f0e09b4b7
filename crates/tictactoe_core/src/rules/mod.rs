//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Nothing here mutates state; the
//! controller asks for the outcome after every change and the view asks
//! again on every render.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, Win, check_winner};

use crate::types::{Board, Player};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A player completed a line.
    Won(Win),
    /// The board is full without a winner.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(win) => Some(win.player()),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Won(win) => Some(win.line()),
            _ => None,
        }
    }
}

/// Computes the outcome of `board`.
///
/// A win takes precedence over a full board.
#[instrument(skip(board))]
pub fn calculate_outcome(board: &Board) -> Outcome {
    if let Some(win) = check_winner(board) {
        Outcome::Won(win)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
