//! Summary screen shown after the last round.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{info, instrument};

use crate::games::scramble::Session;
use crate::tui::screen::{Screen, ScreenTransition};

/// End-of-game results.
#[derive(Debug)]
pub struct SummaryScreen {
    session: Session,
}

impl SummaryScreen {
    /// Creates a summary for a finished session.
    #[instrument(skip(session), fields(score = *session.score()))]
    pub fn new(session: Session) -> Self {
        info!(
            solved = session.solved_count(),
            rounds = session.max_rounds(),
            "Showing summary"
        );
        Self { session }
    }
}

impl Screen for SummaryScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let (headline, color) = if self.session.is_perfect() {
            ("Perfect Run!", Color::Yellow)
        } else {
            ("Game Complete!", Color::Cyan)
        };
        let title = Paragraph::new(headline)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let score = Paragraph::new(format!(
            "Final Score: {}   Solved {} of {}",
            self.session.score(),
            self.session.solved_count(),
            self.session.max_rounds()
        ))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(score, chunks[1]);

        let rows: Vec<Row> = self
            .session
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let (mark, style) = if *record.solved() {
                    ("✓ solved", Style::default().fg(Color::Green))
                } else {
                    ("✗ missed", Style::default().fg(Color::Red))
                };
                Row::new(vec![
                    Cell::from(format!("{}", i + 1)),
                    Cell::from(record.word().as_str()),
                    Cell::from(mark).style(style),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(12),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["#", "Word", "Result"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Words"));
        frame.render_widget(table, chunks[2]);

        let help = Paragraph::new("r: Play Again | m/Enter: Main Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _now))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::StartGame {
                topic: self.session.topic().clone(),
                difficulty: *self.session.difficulty(),
            },
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Enter | KeyCode::Esc => {
                ScreenTransition::GoToMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
