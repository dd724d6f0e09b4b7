//! Stateless UI rendering for tic-tac-toe.
//!
//! [`draw`] reads an [`App`] and paints a frame; it never changes state.
//! The layout is fixed regardless of game state so mouse clicks can be
//! mapped back to cells from the frame area alone.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_core::{Game, Outcome, Player, Position, Square};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;

/// Screen regions of the game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    title: Rect,
    status: Rect,
    banner: Rect,
    board: Rect,
    description: Rect,
    controls: Rect,
    footer: Rect,
}

impl BoardLayout {
    /// Splits the frame area into the view's regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Title
                Constraint::Length(1),             // Status
                Constraint::Length(3),             // Banner
                Constraint::Min(BOARD_HEIGHT),     // Board
                Constraint::Length(1),             // Cell description
                Constraint::Length(1),             // Controls
                Constraint::Length(1),             // Footer
            ])
            .split(area);

        Self {
            title: chunks[0],
            status: chunks[1],
            banner: chunks[2],
            board: center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT),
            description: chunks[4],
            controls: chunks[5],
            footer: chunks[6],
        }
    }

    /// Screen rectangle of a cell, clipped to the board region.
    pub fn cell(&self, pos: Position) -> Rect {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        Rect::new(
            self.board.x.saturating_add(col * (CELL_WIDTH + GAP)),
            self.board.y.saturating_add(row * (CELL_HEIGHT + GAP)),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(self.board)
    }

    /// Cell under the given screen coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let cell = self.cell(*pos);
            column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
        })
    }
}

/// Status line: whose turn it is, or how the game ended.
pub fn status_text(game: &Game) -> String {
    match game.outcome() {
        Outcome::Won(win) => format!("Player {} wins!", win.player()),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Next: {}'s turn", game.to_move()),
    }
}

/// Banner text, shown only once the game is over.
pub fn banner_text(game: &Game) -> Option<String> {
    match game.outcome() {
        Outcome::Won(win) => Some(format!("Player {} wins!", win.player())),
        Outcome::Draw => Some("It's a draw!".to_string()),
        Outcome::InProgress => None,
    }
}

/// Spoken-style description of a cell, e.g. `Cell 1, row 1, filled X`.
pub fn cell_description(game: &Game, pos: Position) -> String {
    let mut text = format!("Cell {}, row {}", pos.col() + 1, pos.row() + 1);
    if let Some(player) = game.board().get(pos).player() {
        text.push_str(&format!(", filled {}", player));
    }
    if game.outcome().winning_line().is_some_and(|line| line.contains(pos)) {
        text.push_str(", part of win");
    }
    text
}

/// Renders the whole view.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = BoardLayout::new(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, layout.status, game);
    draw_banner(frame, layout.banner, game);

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), game, pos, pos == app.cursor());
    }

    let description = Paragraph::new(cell_description(game, app.cursor()))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(description, layout.description);

    let controls = Paragraph::new("1-9/click/Enter: play  u: undo  r: reset game  q: quit")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(controls, layout.controls);

    let footer = Paragraph::new("Terminal Tic Tac Toe | minimal, keyboard and mouse")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

fn draw_status(frame: &mut Frame, area: Rect, game: &Game) {
    let outcome = game.outcome();
    let line = match outcome {
        Outcome::InProgress => {
            let player = game.to_move();
            Line::from(vec![
                Span::raw("Next: "),
                Span::styled(player.to_string(), player_style(player)),
                Span::raw("'s turn"),
            ])
        }
        _ => Line::from(Span::styled(
            status_text(game),
            outcome_style(outcome).add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_banner(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(text) = banner_text(game) else {
        return;
    };
    let style = outcome_style(game.outcome());
    let banner = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(banner, center_rect(area, BOARD_WIDTH, 3));
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Game, pos: Position, selected: bool) {
    let square = game.board().get(pos);
    let highlight = game.outcome().winning_line().is_some_and(|line| line.contains(pos));
    let disabled = square != Square::Empty || game.is_over();

    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (player.to_string(), player_style(player)),
    };
    if highlight {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border_style = match (selected, disabled) {
        (true, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (true, true) => Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::DarkGray),
        (false, false) => Style::default().fg(Color::Gray),
    };
    let border_type = if selected { BorderType::Thick } else { BorderType::Plain };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    frame.render_widget(cell, area);
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Won(_) => Style::default().fg(Color::Green),
        Outcome::Draw => Style::default().fg(Color::Yellow),
        Outcome::InProgress => Style::default(),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
