//! Application state and the actions that change it.

use crate::input::move_cursor;
use tictactoe_core::{Game, MoveDisposition, Position};
use tracing::{debug, info, instrument};

/// Cursor direction for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Start a new game.
    Reset,
    /// Take back the last move.
    Undo,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// [`App::dispatch`] is the only mutation entry point; rendering reads
/// the state through the accessors.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action to the state.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Reset => {
                info!("Starting a new game");
                self.game.reset();
            }
            Action::Undo => {
                self.game.undo();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        let player = self.game.to_move();
        match self.game.apply_move(pos) {
            MoveDisposition::Placed => {
                debug!(%player, position = %pos, "Move applied to UI state");
                let outcome = self.game.outcome();
                if outcome.is_over() {
                    info!(?outcome, "Game over");
                }
            }
            ignored => debug!(?ignored, position = %pos, "Move ignored"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
