//! Loading screen shown while a word batch is being generated.
//!
//! The batch arrives over a oneshot channel from a background task. Leaving
//! this screen drops the receiver, so a batch that shows up later is
//! discarded by the sender.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, instrument, warn};

use crate::games::scramble::{Difficulty, Scoring, Session, WordData};
use crate::tui::screen::{Screen, ScreenTransition};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Waiting for the word source.
#[derive(Debug)]
pub struct LoadingScreen {
    topic: String,
    difficulty: Difficulty,
    scoring: Scoring,
    receiver: oneshot::Receiver<Vec<WordData>>,
    session: Option<Session>,
    started: Instant,
}

impl LoadingScreen {
    /// Creates a loading screen awaiting `receiver`.
    #[instrument(skip(scoring, receiver))]
    pub fn new(
        topic: String,
        difficulty: Difficulty,
        scoring: Scoring,
        receiver: oneshot::Receiver<Vec<WordData>>,
    ) -> Self {
        Self {
            topic,
            difficulty,
            scoring,
            receiver,
            session: None,
            started: Instant::now(),
        }
    }

    /// Hands over the session built from the received batch.
    pub fn into_session(self) -> Option<Session> {
        self.session
    }
}

impl Screen for LoadingScreen {
    fn render(&self, frame: &mut Frame) {
        let ticks = self.started.elapsed().as_millis() / 120;
        let spinner = SPINNER[(ticks % SPINNER.len() as u128) as usize];

        let text = vec![
            Line::from(""),
            Line::styled(
                format!("{} Generating Level...", spinner),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "Curating {} words about \"{}\"",
                self.difficulty, self.topic
            )),
            Line::from(""),
            Line::styled("Esc: Back to menu", Style::default().fg(Color::DarkGray)),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Loading"));
        frame.render_widget(paragraph, frame.area());
    }

    #[instrument(skip(self, key, _now), fields(topic = %self.topic))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Word generation abandoned by player");
                ScreenTransition::GoToMenu
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn tick(&mut self, _now: Instant) -> ScreenTransition {
        if self.session.is_some() {
            return ScreenTransition::GoToBoard;
        }
        match self.receiver.try_recv() {
            Ok(words) => {
                match Session::start(&self.topic, self.difficulty, words, self.scoring) {
                    Ok(session) => {
                        self.session = Some(session);
                        ScreenTransition::GoToBoard
                    }
                    Err(e) => {
                        warn!(error = %e, "Could not start session");
                        ScreenTransition::GoToMenu
                    }
                }
            }
            Err(TryRecvError::Empty) => ScreenTransition::Stay,
            Err(TryRecvError::Closed) => {
                warn!("Word generation task ended without a batch");
                ScreenTransition::GoToMenu
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::fallback_words;

    #[test]
    fn test_tick_builds_session_when_batch_arrives() {
        let (tx, rx) = oneshot::channel();
        let mut screen =
            LoadingScreen::new("food".to_string(), Difficulty::Easy, Scoring::default(), rx);

        assert_eq!(screen.tick(Instant::now()), ScreenTransition::Stay);
        tx.send(fallback_words()).unwrap();
        assert_eq!(screen.tick(Instant::now()), ScreenTransition::GoToBoard);

        let session = screen.into_session().unwrap();
        assert_eq!(session.max_rounds(), 5);
        assert_eq!(session.topic(), "food");
    }

    #[test]
    fn test_dropped_sender_returns_to_menu() {
        let (tx, rx) = oneshot::channel::<Vec<WordData>>();
        let mut screen =
            LoadingScreen::new("food".to_string(), Difficulty::Easy, Scoring::default(), rx);
        drop(tx);
        assert_eq!(screen.tick(Instant::now()), ScreenTransition::GoToMenu);
    }
}
