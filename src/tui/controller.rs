//! Controller: the state machine driving the game screens.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::sync::oneshot;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::games::scramble::{Difficulty, Scoring, TOPICS};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, LoadingScreen, MenuScreen, SummaryScreen};
use crate::words::WordSource;

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Loading(LoadingScreen),
    Board(BoardScreen),
    Summary(SummaryScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Loading(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Summary(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Loading(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Summary(s) => s,
        }
    }
}

/// Controller that owns the word source and drives screen transitions.
///
/// Call [`ScrambleController::run`] to start the event loop.
#[derive(Getters)]
pub struct ScrambleController {
    #[getter(skip)]
    source: Arc<dyn WordSource>,
    scoring: Scoring,
    rounds_per_game: usize,
    topic_index: usize,
    difficulty: Difficulty,
}

impl std::fmt::Debug for ScrambleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrambleController")
            .field("scoring", &self.scoring)
            .field("rounds_per_game", &self.rounds_per_game)
            .field("topic_index", &self.topic_index)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

impl ScrambleController {
    /// Creates a controller serving words from `source`.
    #[instrument(skip(source))]
    pub fn new(source: Arc<dyn WordSource>, scoring: Scoring, rounds_per_game: usize) -> Self {
        info!("Creating ScrambleController");
        Self {
            source,
            scoring,
            rounds_per_game,
            topic_index: 0,
            difficulty: Difficulty::default(),
        }
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        let mut screen = ActiveScreen::Menu(MenuScreen::new(self.topic_index, self.difficulty));

        loop {
            terminal.draw(|f| screen.as_screen().render(f))?;

            let now = Instant::now();
            let mut transition = screen.as_screen_mut().tick(now);

            if transition == ScreenTransition::Stay
                && event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Crossterm reports both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                transition = screen.as_screen_mut().handle_key(key, Instant::now());
            }

            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("Player quit");
                    return Ok(());
                }
            };

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMenu => {
                self.leave(current);
                Some(ActiveScreen::Menu(MenuScreen::new(
                    self.topic_index,
                    self.difficulty,
                )))
            }

            ScreenTransition::StartGame { topic, difficulty } => {
                self.leave(current);
                if let Some(index) = TOPICS.iter().position(|t| t.id == topic) {
                    self.topic_index = index;
                }
                self.difficulty = difficulty;
                Some(ActiveScreen::Loading(self.start_loading(topic, difficulty)))
            }

            ScreenTransition::GoToBoard => match current {
                ActiveScreen::Loading(loading) => match loading.into_session() {
                    Some(session) => Some(ActiveScreen::Board(BoardScreen::new(session))),
                    None => {
                        warn!("Loading finished without a session");
                        Some(self.menu())
                    }
                },
                other => Some(other),
            },

            ScreenTransition::GoToSummary => match current {
                ActiveScreen::Board(board) => {
                    Some(ActiveScreen::Summary(SummaryScreen::new(board.into_session())))
                }
                other => Some(other),
            },

            ScreenTransition::Quit => {
                self.leave(current);
                None
            }
        }
    }

    fn menu(&self) -> ActiveScreen {
        ActiveScreen::Menu(MenuScreen::new(self.topic_index, self.difficulty))
    }

    /// Tears down whatever the outgoing screen holds.
    fn leave(&mut self, current: ActiveScreen) {
        match current {
            ActiveScreen::Menu(menu) => {
                self.topic_index = menu.topic_index();
                self.difficulty = *menu.difficulty();
            }
            ActiveScreen::Board(board) => {
                let session = board.into_session();
                if !session.is_finished() {
                    session.quit();
                }
            }
            ActiveScreen::Loading(_) | ActiveScreen::Summary(_) => {}
        }
    }

    /// Spawns word generation and returns the screen waiting on it.
    #[instrument(skip(self))]
    fn start_loading(&self, topic: String, difficulty: Difficulty) -> LoadingScreen {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let count = self.rounds_per_game;
        let task_topic = topic.clone();

        tokio::spawn(async move {
            let words = source.generate_words(&task_topic, difficulty, count).await;
            if tx.send(words).is_err() {
                debug!(topic = %task_topic, "Word batch arrived after the player left; ignoring");
            }
        });

        LoadingScreen::new(topic, difficulty, self.scoring, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::FallbackWordSource;

    fn controller() -> ScrambleController {
        ScrambleController::new(Arc::new(FallbackWordSource), Scoring::default(), 5)
    }

    #[tokio::test]
    async fn test_start_game_remembers_selection() {
        let mut ctl = controller();
        let menu = ctl.menu();
        let next = ctl
            .apply_transition(
                ScreenTransition::StartGame {
                    topic: "food".to_string(),
                    difficulty: Difficulty::Expert,
                },
                menu,
            )
            .unwrap();

        assert!(matches!(next, ActiveScreen::Loading(_)));
        assert_eq!(*ctl.topic_index(), 3);
        assert_eq!(*ctl.difficulty(), Difficulty::Expert);
    }

    #[tokio::test]
    async fn test_loading_reaches_board() {
        let mut ctl = controller();
        let menu = ctl.menu();
        let mut screen = ctl
            .apply_transition(
                ScreenTransition::StartGame {
                    topic: "general".to_string(),
                    difficulty: Difficulty::Easy,
                },
                menu,
            )
            .unwrap();

        let mut transition = ScreenTransition::Stay;
        for _ in 0..100 {
            transition = screen.as_screen_mut().tick(Instant::now());
            if transition != ScreenTransition::Stay {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(transition, ScreenTransition::GoToBoard);

        screen = ctl.apply_transition(transition, screen).unwrap();
        match screen {
            ActiveScreen::Board(board) => assert_eq!(board.session().max_rounds(), 5),
            other => panic!("expected board, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quit_from_menu_ends_loop() {
        let mut ctl = controller();
        let menu = ctl.menu();
        assert!(ctl.apply_transition(ScreenTransition::Quit, menu).is_none());
    }
}
