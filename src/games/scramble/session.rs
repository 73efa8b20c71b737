//! Session controller: one game of several rounds.

use std::time::Instant;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::round::{Round, RoundOutcome};
use super::scoring::Scoring;
use super::topic::Difficulty;
use super::word::WordData;
use crate::words::WordSource;

/// One line of the end-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RoundRecord {
    word: String,
    solved: bool,
}

/// Whether a session still has rounds to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    /// A round is active.
    Playing,
    /// Every round has completed.
    Finished,
}

/// Cross-round game state.
///
/// The session owns the score and history. The active [`Round`] is replaced
/// wholesale between words; only its [`RoundOutcome`] is kept.
#[derive(Debug, Getters)]
pub struct Session {
    topic: String,
    difficulty: Difficulty,
    scoring: Scoring,
    words: Vec<WordData>,
    score: u32,
    current_round: usize,
    history: Vec<RoundRecord>,
    status: SessionStatus,
    #[getter(skip)]
    round: Option<Round>,
}

impl Session {
    /// Starts a session on an already-fetched word batch.
    ///
    /// The number of rounds is the batch length.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if `words` is empty.
    #[instrument(skip(topic, words, scoring), fields(topic = %topic.as_ref(), word_count = words.len()))]
    pub fn start(
        topic: impl AsRef<str>,
        difficulty: Difficulty,
        words: Vec<WordData>,
        scoring: Scoring,
    ) -> Result<Self, SessionError> {
        let Some(first) = words.first().cloned() else {
            warn!("Refusing to start a session without words");
            return Err(SessionError::new("word batch is empty".to_string()));
        };

        info!(max_rounds = words.len(), "Starting session");
        Ok(Self {
            topic: topic.as_ref().to_string(),
            difficulty,
            scoring,
            score: 0,
            current_round: 0,
            history: Vec::with_capacity(words.len()),
            status: SessionStatus::Playing,
            round: Some(Round::new(first, scoring)),
            words,
        })
    }

    /// Fetches `count` words from `source` and starts a session on them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] only if the source hands back no words at all.
    #[instrument(skip(source, scoring))]
    pub async fn start_game(
        source: &dyn WordSource,
        topic: &str,
        difficulty: Difficulty,
        scoring: Scoring,
        count: usize,
    ) -> Result<Self, SessionError> {
        let words = source.generate_words(topic, difficulty, count).await;
        Self::start(topic, difficulty, words, scoring)
    }

    /// Starts a brand-new session with this session's topic and difficulty.
    ///
    /// # Errors
    ///
    /// Same as [`Session::start_game`].
    #[instrument(skip(self, source), fields(topic = %self.topic))]
    pub async fn play_again(
        &self,
        source: &dyn WordSource,
        count: usize,
    ) -> Result<Self, SessionError> {
        Self::start_game(source, &self.topic, self.difficulty, self.scoring, count).await
    }

    /// Total rounds in this session.
    pub fn max_rounds(&self) -> usize {
        self.words.len()
    }

    /// The active round, if the session is still playing.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Mutable access to the active round for player input.
    pub fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    /// Drives the active round's timers and applies its outcome if it fires.
    pub fn advance(&mut self, now: Instant) -> Option<RoundOutcome> {
        let outcome = self.round.as_mut()?.advance(now)?;
        self.on_round_complete(outcome);
        Some(outcome)
    }

    /// Records the current round's outcome and moves on.
    ///
    /// Appends to history, adds the points, then either finishes the session
    /// or deals the next word. Ignored once the session has finished.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn on_round_complete(&mut self, outcome: RoundOutcome) -> SessionStatus {
        if self.status == SessionStatus::Finished {
            warn!("Round completion after session finished, ignoring");
            return self.status;
        }

        let word = self.words[self.current_round].word().clone();
        self.history.push(RoundRecord {
            word,
            solved: outcome.solved,
        });
        self.score += outcome.points;

        if self.current_round + 1 >= self.words.len() {
            self.status = SessionStatus::Finished;
            self.round = None;
            info!(score = self.score, solved = self.solved_count(), "Session finished");
        } else {
            self.current_round += 1;
            let next = self.words[self.current_round].clone();
            self.round = Some(Round::new(next, self.scoring));
            debug!(next_round = self.current_round, score = self.score, "Advancing to next round");
        }
        self.status
    }

    /// Abandons the session. The round in progress is not recorded.
    #[instrument(skip(self), fields(topic = %self.topic, round = self.current_round))]
    pub fn quit(self) {
        info!(recorded = self.history.len(), "Session abandoned");
    }

    /// True once every round has completed.
    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    /// Number of solved words so far.
    pub fn solved_count(&self) -> usize {
        self.history.iter().filter(|r| r.solved).count()
    }

    /// True when the game is over and every word was solved.
    pub fn is_perfect(&self) -> bool {
        self.is_finished() && self.history.iter().all(|r| r.solved)
    }
}

/// Session could not be started.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
