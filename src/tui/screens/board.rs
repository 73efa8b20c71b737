//! Board screen: the active round.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, instrument};

use crate::games::scramble::{Feedback, Round, Session};
use crate::tui::input::{BoardCommand, board_command, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the board screen.
#[derive(Debug)]
pub struct BoardScreen {
    session: Session,
    cursor: usize,
    cursor_round: usize,
}

impl BoardScreen {
    /// Creates a board screen for a freshly started session.
    #[instrument(skip(session), fields(topic = %session.topic()))]
    pub fn new(session: Session) -> Self {
        let cursor_round = *session.current_round();
        Self {
            session,
            cursor: 0,
            cursor_round,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hands the session back to the controller.
    pub fn into_session(self) -> Session {
        self.session
    }

    fn apply(&mut self, command: BoardCommand, now: Instant) -> ScreenTransition {
        let Some(round) = self.session.round_mut() else {
            return ScreenTransition::Stay;
        };

        let applied = match command {
            BoardCommand::Quit => return ScreenTransition::GoToMenu,
            BoardCommand::PlaceLetter(ch) => round.place_char(ch, now),
            BoardCommand::PlaceAt(index) => round.place_at(index, now),
            BoardCommand::RemoveLast => round.remove_last(),
            BoardCommand::RemoveAtCursor => round.remove(self.cursor),
            BoardCommand::CursorLeft | BoardCommand::CursorRight => {
                self.cursor = move_cursor(self.cursor, round.placed().len(), command);
                true
            }
            BoardCommand::Hint => round.use_hint(),
            BoardCommand::Shuffle => round.shuffle(),
            BoardCommand::GiveUp => round.give_up(now),
        };
        debug!(?command, applied, "Board command");
        ScreenTransition::Stay
    }
}

impl Screen for BoardScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(
                    " Round {}/{} ",
                    self.session.current_round() + 1,
                    self.session.max_rounds()
                ),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Find the word!  "),
            Span::styled(
                format!("Score {}", self.session.score()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let Some(round) = self.session.round() else {
            return;
        };

        draw_slots(frame, chunks[1], round, self.cursor);
        draw_pool(frame, chunks[2], round);
        draw_hint(frame, chunks[3], round, self.session.scoring().hint_penalty());
        draw_status(frame, chunks[4], round);

        let help = Paragraph::new(
            "Letters/1-9: Place | Backspace: Undo | ←→ + Enter: Remove | ?: Hint | Tab: Shuffle | Ctrl-G: Give Up | Esc: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition {
        match board_command(key) {
            Some(command) => self.apply(command, now),
            None => ScreenTransition::Stay,
        }
    }

    fn tick(&mut self, now: Instant) -> ScreenTransition {
        if let Some(outcome) = self.session.advance(now) {
            debug!(?outcome, "Round outcome applied");
        }
        if self.session.is_finished() {
            return ScreenTransition::GoToSummary;
        }
        if *self.session.current_round() != self.cursor_round {
            self.cursor_round = *self.session.current_round();
            self.cursor = 0;
        }
        ScreenTransition::Stay
    }
}

fn draw_slots(frame: &mut Frame, area: Rect, round: &Round, cursor: usize) {
    let tile_style = match round.feedback() {
        Feedback::Success => Style::default().fg(Color::Black).bg(Color::Green),
        Feedback::Error => Style::default().fg(Color::White).bg(Color::Red),
        Feedback::None => Style::default().fg(Color::Black).bg(Color::LightBlue),
    };

    let mut spans = Vec::with_capacity(round.placed().len() * 2);
    for (i, slot) in round.placed().iter().enumerate() {
        let (text, mut style) = match slot {
            Some(tile) => (format!(" {} ", tile.ch()), tile_style.add_modifier(Modifier::BOLD)),
            None => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
        };
        if i == cursor && !round.is_locked() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let slots = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Answer"));
    frame.render_widget(slots, area);
}

fn draw_pool(frame: &mut Frame, area: Rect, round: &Round) {
    let mut letters = Vec::with_capacity(round.available().len() * 2);
    let mut labels = Vec::with_capacity(round.available().len() * 2);
    for (i, tile) in round.available().iter().enumerate() {
        letters.push(Span::styled(
            format!(" {} ", tile.ch()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        letters.push(Span::raw(" "));
        let label = if i < 9 {
            format!(" {} ", i + 1)
        } else {
            "   ".to_string()
        };
        labels.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        labels.push(Span::raw(" "));
    }

    let lines = match pool_banner(round) {
        Some(banner) => vec![
            Line::from(""),
            Line::styled(banner, Style::default().fg(Color::DarkGray)),
        ],
        None => vec![Line::from(""), Line::from(letters), Line::from(labels)],
    };

    let pool = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Letters"));
    frame.render_widget(pool, area);
}

/// Text shown in place of the empty pool while a full board is in play.
fn pool_banner(round: &Round) -> Option<&'static str> {
    if !round.is_full() || round.is_locked() {
        return None;
    }
    match round.feedback() {
        Feedback::Error => Some("Checking..."),
        Feedback::None => Some("Remove a letter to try again"),
        Feedback::Success => None,
    }
}

fn draw_hint(frame: &mut Frame, area: Rect, round: &Round, penalty: u32) {
    let (text, style) = match round.visible_hint() {
        Some(hint) => (
            hint.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        None => (
            format!("Press ? to reveal the hint (-{} points)", penalty),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let hint = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Hint"));
    frame.render_widget(hint, area);
}

fn draw_status(frame: &mut Frame, area: Rect, round: &Round) {
    let (text, color) = match (round.feedback(), round.is_locked()) {
        (Feedback::Success, _) => ("Excellent! Next word coming up...".to_string(), Color::Green),
        (Feedback::Error, true) => (
            format!("The word was {}", round.word().word()),
            Color::Red,
        ),
        (Feedback::Error, false) => ("Not quite. Try again!".to_string(), Color::Red),
        (Feedback::None, _) => (String::new(), Color::Reset),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scramble::{Difficulty, Scoring, WordData};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn screen_for(word: &str) -> BoardScreen {
        let words = vec![WordData::new(word, "A test word.").unwrap()];
        let session =
            Session::start("general", Difficulty::Easy, words, Scoring::default()).unwrap();
        BoardScreen::new(session)
    }

    fn press(screen: &mut BoardScreen, code: KeyCode, now: Instant) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    #[test]
    fn test_typing_the_word_finishes_the_game() {
        let mut screen = screen_for("CAT");
        let now = Instant::now();
        for c in ['c', 'a', 't'] {
            press(&mut screen, KeyCode::Char(c), now);
        }
        let round = screen.session().round().unwrap();
        assert_eq!(round.feedback(), Feedback::Success);

        assert_eq!(screen.tick(now), ScreenTransition::Stay);
        let later = now + crate::games::scramble::SUCCESS_DELAY;
        assert_eq!(screen.tick(later), ScreenTransition::GoToSummary);
        assert_eq!(*screen.session().score(), 100);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut screen = screen_for("DOG");
        assert_eq!(
            press(&mut screen, KeyCode::Esc, Instant::now()),
            ScreenTransition::GoToMenu
        );
    }

    #[test]
    fn test_remove_at_cursor() {
        let mut screen = screen_for("DOG");
        let now = Instant::now();
        press(&mut screen, KeyCode::Char('d'), now);
        press(&mut screen, KeyCode::Char('o'), now);
        press(&mut screen, KeyCode::Right, now);
        press(&mut screen, KeyCode::Enter, now);

        let round = screen.session().round().unwrap();
        assert_eq!(round.attempt(), "D");
        assert!(round.placed()[1].is_none());
        assert_eq!(round.available().len(), 2);
    }

    #[test]
    fn test_wrong_full_board_prompts_removal_after_flash() {
        let mut screen = screen_for("NO");
        let now = Instant::now();
        press(&mut screen, KeyCode::Char('o'), now);
        press(&mut screen, KeyCode::Char('n'), now);

        let round = screen.session().round().unwrap();
        assert_eq!(pool_banner(round), Some("Checking..."));

        screen.tick(now + crate::games::scramble::ERROR_FLASH);
        let round = screen.session().round().unwrap();
        assert_eq!(round.feedback(), Feedback::None);
        assert_eq!(pool_banner(round), Some("Remove a letter to try again"));

        press(&mut screen, KeyCode::Backspace, now);
        assert_eq!(pool_banner(screen.session().round().unwrap()), None);
    }
}
