//! Tests for keyboard and mouse mapping.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe_core::Position;
use tictactoe_tui::input::{event_action, key_action, mouse_action, move_cursor};
use tictactoe_tui::ui::BoardLayout;
use tictactoe_tui::{Action, Direction};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_digits_play_cells() {
    assert_eq!(
        key_action(press(KeyCode::Char('1'))),
        Some(Action::Play(Position::TopLeft))
    );
    assert_eq!(
        key_action(press(KeyCode::Char('9'))),
        Some(Action::Play(Position::BottomRight))
    );
    assert_eq!(key_action(press(KeyCode::Char('0'))), None);
}

#[test]
fn test_control_keys() {
    assert_eq!(key_action(press(KeyCode::Char('r'))), Some(Action::Reset));
    assert_eq!(key_action(press(KeyCode::Char('u'))), Some(Action::Undo));
    assert_eq!(key_action(press(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(key_action(press(KeyCode::Esc)), Some(Action::Quit));
    assert_eq!(
        key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(key_action(press(KeyCode::Enter)), Some(Action::PlayCursor));
    assert_eq!(
        key_action(press(KeyCode::Left)),
        Some(Action::MoveCursor(Direction::Left))
    );
}

#[test]
fn test_key_release_is_ignored() {
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('5'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(key_action(release), None);
}

#[test]
fn test_cursor_moves_within_board() {
    assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
    assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    assert_eq!(move_cursor(Position::BottomLeft, Direction::Right), Position::BottomCenter);
}

#[test]
fn test_cursor_stops_at_edges() {
    assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
    assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
    assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
    assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
}

#[test]
fn test_click_plays_cell() {
    let area = Rect::new(0, 0, 80, 24);
    let cell = BoardLayout::new(area).cell(Position::BottomRight);
    assert_eq!(
        mouse_action(click(cell.x + 1, cell.y + 1), area),
        Some(Action::Play(Position::BottomRight))
    );
}

#[test]
fn test_click_outside_board_is_ignored() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(mouse_action(click(0, 0), area), None);
}

#[test]
fn test_other_mouse_events_are_ignored() {
    let area = Rect::new(0, 0, 80, 24);
    let cell = BoardLayout::new(area).cell(Position::Center);
    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        ..click(cell.x + 1, cell.y + 1)
    };
    assert_eq!(event_action(Event::Mouse(moved), area), None);
}
