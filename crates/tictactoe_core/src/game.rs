//! Game controller for tic-tac-toe.

use crate::position::Position;
use crate::rules::{Outcome, calculate_outcome};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// What happened to a requested move.
///
/// Rejected moves are not errors: the board is simply left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDisposition {
    /// The mark was placed and the turn passed.
    Placed,
    /// The square already holds a mark.
    Occupied,
    /// The game already has a winner or is drawn.
    GameOver,
}

/// Tic-tac-toe game state and its transitions.
///
/// `apply_move`, `reset` and `undo` are the only ways to change a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Board>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::STARTING,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board snapshots taken before each accepted move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        calculate_outcome(&self.board)
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Whether there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Positions that would currently accept a mark.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored when the square is taken or the game is already decided.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> MoveDisposition {
        if self.is_over() {
            debug!("Move ignored, game is over");
            return MoveDisposition::GameOver;
        }
        if !self.board.is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveDisposition::Occupied;
        }

        self.history.push(self.board.clone());
        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();

        debug!(outcome = ?self.outcome(), board = %self.board, "Move applied");
        MoveDisposition::Placed
    }

    /// Starts over with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        self.history.clear();
        self.board = Board::new();
        self.to_move = Player::STARTING;
    }

    /// Restores the board as it was before the last accepted move.
    ///
    /// Returns `false` when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.to_move = self.to_move.opponent();
                debug!(remaining = self.history.len(), "Move undone");
                true
            }
            None => {
                debug!("Nothing to undo");
                false
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
