//! Terminal UI for tic-tac-toe.
//!
//! The game state lives in a single [`App`]. Terminal events become
//! [`Action`]s, [`App::dispatch`] applies them, and [`ui::draw`] renders
//! the result before the next event is read.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
mod terminal;
pub mod ui;

pub use app::{Action, App, Direction};
pub use config::{ConfigError, TuiConfig};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::io::Stdout;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Runs the game until the user quits.
#[instrument(skip_all, fields(mouse = *config.mouse()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    let (mut terminal, _guard) =
        terminal::setup_terminal(*config.mouse()).context("Failed to set up terminal")?;
    let poll_interval = Duration::from_millis(*config.poll_interval_ms());

    let res = run_app(&mut terminal, App::new(), poll_interval);
    if let Err(e) = terminal.show_cursor() {
        warn!(error = %e, "Failed to show cursor");
    }

    info!("Tic Tac Toe TUI exited");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    poll_interval: Duration,
) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &app);
        })?;

        if event::poll(poll_interval)? {
            if let Some(action) = input::event_action(event::read()?, area) {
                app.dispatch(action);
            }
        }
    }

    Ok(())
}
