//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Three positions that win the game when they share a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Position; 3]);

impl Line {
    /// Positions making up this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices making up this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, checked in this order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    player: Player,
    line: Line,
}

impl Win {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The line the winner completed.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line found, or `None` if no player has
/// three in a row.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}
