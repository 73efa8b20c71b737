//! Terminal UI for Word Scramble.

mod controller;
mod input;
mod screen;
mod screens;

pub use controller::ScrambleController;
pub use input::{BoardCommand, board_command};
pub use screen::{Screen, ScreenTransition};

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::GameConfig;
use crate::words::WordSource;

/// Runs the game until the player quits, restoring the terminal afterwards.
#[instrument(skip_all, fields(rounds = *config.rounds_per_game()))]
pub async fn run_tui(config: &GameConfig, source: Arc<dyn WordSource>) -> Result<()> {
    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller =
        ScrambleController::new(source, config.scoring(), *config.rounds_per_game());
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
