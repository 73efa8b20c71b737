//! Screen trait and transition type for the game's screen state machine.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::games::scramble::Difficulty;

/// The result of handling an input event or a tick on a screen.
///
/// Screens return this to drive the
/// [`ScrambleController`](super::ScrambleController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Return to the topic menu, abandoning any game in progress.
    GoToMenu,
    /// Fetch a word batch and start a new game.
    StartGame {
        /// Topic id sent to the word source.
        topic: String,
        /// Difficulty sent to the word source.
        difficulty: Difficulty,
    },
    /// The word batch arrived; show the board.
    GoToBoard,
    /// Every round is done; show the summary.
    GoToSummary,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition;

    /// Called once per loop iteration so screens can fire timers or poll work.
    fn tick(&mut self, _now: Instant) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
