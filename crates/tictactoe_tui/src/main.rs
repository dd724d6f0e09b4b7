//! Tic Tac Toe - terminal front end.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::Cli;
use tictactoe_tui::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config)?;

    tictactoe_tui::run(&config)
}
