//! Menu screen: pick a topic and a difficulty.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::games::scramble::{Difficulty, TOPICS};
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    list_state: ListState,
    difficulty: Difficulty,
}

impl MenuScreen {
    /// Creates the menu with the given topic and difficulty preselected.
    #[instrument]
    pub fn new(topic_index: usize, difficulty: Difficulty) -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(topic_index.min(TOPICS.len() - 1)));
        Self {
            list_state,
            difficulty,
        }
    }

    /// Index of the highlighted topic.
    pub fn topic_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0).min(TOPICS.len() - 1)
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => TOPICS.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % TOPICS.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::styled(
                "Word Scramble",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from("Unscramble AI-generated words across different topics."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = TOPICS
            .iter()
            .map(|topic| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", topic.icon)),
                    Span::styled(topic.label, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", topic.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let topics = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose Topic"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(topics, chunks[1], &mut list_state);

        let levels: Vec<Span> = Difficulty::iter()
            .flat_map(|level| {
                let style = if level == self.difficulty {
                    Style::default()
                        .fg(difficulty_color(level))
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                [Span::styled(format!(" {} ", level), style), Span::raw("  ")]
            })
            .collect();
        let difficulty = Paragraph::new(Line::from(levels))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Difficulty"));
        frame.render_widget(difficulty, chunks[2]);

        let help = Paragraph::new("↑↓: Topic | ←→: Difficulty | Enter: Start Game | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _now))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.difficulty = self.difficulty.previous();
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.difficulty = self.difficulty.next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let topic = TOPICS[self.topic_index()];
                info!(topic = topic.id, difficulty = %self.difficulty, "Starting game from menu");
                ScreenTransition::StartGame {
                    topic: topic.id.to_string(),
                    difficulty: self.difficulty,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

/// Accent color for a difficulty level.
pub fn difficulty_color(level: Difficulty) -> Color {
    match level {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::LightRed,
        Difficulty::Expert => Color::Red,
    }
}
