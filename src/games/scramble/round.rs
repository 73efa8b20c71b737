//! Round engine for one word.
//!
//! A [`Round`] owns the tiles for a single word and moves them between the
//! available pool and the answer slots. Attempts are checked when the last
//! slot fills. Delayed effects (the success pause, the error flash, the
//! give-up flash) are held as deadlines inside the round and fired by
//! [`Round::advance`], so dropping a round drops its timers with it.
//!
//! ```text
//! Playing ──(full, correct)──▶ Solved ──(1500ms)──▶ Complete
//!    │ ▲
//!    │ └──(1000ms)── Error flash ◀──(full, incorrect)
//!    └──(give up)──▶ GivingUp ──(1000ms)──▶ Complete
//! ```

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::scoring::Scoring;
use super::tile::{Slot, Tile, TileId};
use super::word::WordData;

/// Pause between a correct attempt and the round completing.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// How long an incorrect attempt stays flagged.
pub const ERROR_FLASH: Duration = Duration::from_millis(1000);

/// Pause between giving up and the round completing.
pub const GIVE_UP_DELAY: Duration = Duration::from_millis(1000);

/// Attempt feedback shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Feedback {
    /// Nothing to report.
    #[default]
    None,
    /// The placed letters spell the word.
    Success,
    /// The attempt was wrong, or the player gave up.
    Error,
}

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    /// Board accepts input.
    Playing,
    /// Solved; waiting out the success delay.
    Solved,
    /// Given up; waiting out the flash.
    GivingUp,
    /// Outcome delivered. Nothing else will happen.
    Complete,
}

/// What a finished round reports to its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    /// Points awarded for the round.
    pub points: u32,
    /// Whether the word was solved.
    pub solved: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingCompletion {
    outcome: RoundOutcome,
    due: Instant,
}

/// Tile and feedback state for a single word.
#[derive(Debug, Clone)]
pub struct Round {
    word: WordData,
    scoring: Scoring,
    available: Vec<Tile>,
    placed: Vec<Slot>,
    feedback: Feedback,
    phase: RoundPhase,
    hint_used: bool,
    hint_revealed: bool,
    error_clears_at: Option<Instant>,
    completion: Option<PendingCompletion>,
    next_tile_id: u32,
}

impl Round {
    /// Creates a round with a freshly shuffled board.
    #[instrument(skip(word, scoring), fields(word_len = word.len()))]
    pub fn new(word: WordData, scoring: Scoring) -> Self {
        let mut round = Self {
            placed: vec![None; word.len()],
            word,
            scoring,
            available: Vec::new(),
            feedback: Feedback::None,
            phase: RoundPhase::Playing,
            hint_used: false,
            hint_revealed: false,
            error_clears_at: None,
            completion: None,
            next_tile_id: 0,
        };
        round.deal();
        round
    }

    /// Re-deals the same word with new tile ids and a clean slate.
    ///
    /// Pending timers are discarded along with the old board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting round");
        self.deal();
    }

    fn deal(&mut self) {
        let mut tiles: Vec<Tile> = self
            .word
            .word()
            .chars()
            .map(|ch| {
                let tile = Tile::new(self.next_tile_id, ch);
                self.next_tile_id += 1;
                tile
            })
            .collect();
        tiles.shuffle(&mut rand::thread_rng());

        self.available = tiles;
        self.placed = vec![None; self.word.len()];
        self.feedback = Feedback::None;
        self.phase = RoundPhase::Playing;
        self.hint_used = false;
        self.hint_revealed = false;
        self.error_clears_at = None;
        self.completion = None;
    }

    /// Moves an available tile into the leftmost empty slot.
    ///
    /// Clears any error feedback. If this fills the board the attempt is
    /// checked immediately. Returns `false` (and changes nothing) when the
    /// board is locked, the tile is not in the pool, or no slot is free.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn place(&mut self, tile_id: TileId, now: Instant) -> bool {
        if self.is_locked() {
            debug!("Board locked, ignoring place");
            return false;
        }
        let Some(from) = self.available.iter().position(|t| t.id() == tile_id) else {
            debug!("Tile not in pool");
            return false;
        };
        let Some(to) = self.placed.iter().position(Option::is_none) else {
            debug!("No empty slot");
            return false;
        };

        let tile = self.available.remove(from);
        self.placed[to] = Some(tile);
        self.clear_feedback();
        debug!(slot = to, ch = %tile.ch(), "Placed tile");

        if self.is_full() {
            self.check(now);
        }
        true
    }

    /// Places the first pool tile showing `ch` (case-insensitive).
    pub fn place_char(&mut self, ch: char, now: Instant) -> bool {
        let ch = ch.to_ascii_uppercase();
        match self.available.iter().find(|t| t.ch() == ch) {
            Some(tile) => self.place(tile.id(), now),
            None => false,
        }
    }

    /// Places the pool tile at display position `index`.
    pub fn place_at(&mut self, index: usize, now: Instant) -> bool {
        match self.available.get(index) {
            Some(tile) => self.place(tile.id(), now),
            None => false,
        }
    }

    /// Returns the tile in `slot_index` to the end of the pool.
    ///
    /// Clears any error feedback. Returns `false` when the board is locked or
    /// the slot is empty or out of range.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn remove(&mut self, slot_index: usize) -> bool {
        if self.is_locked() {
            debug!("Board locked, ignoring remove");
            return false;
        }
        let Some(tile) = self.placed.get_mut(slot_index).and_then(Option::take) else {
            debug!("Slot empty");
            return false;
        };

        self.available.push(tile);
        self.clear_feedback();
        debug!(slot = slot_index, ch = %tile.ch(), "Removed tile");
        true
    }

    /// Removes the rightmost placed tile.
    pub fn remove_last(&mut self) -> bool {
        match self.placed.iter().rposition(Option::is_some) {
            Some(slot) => self.remove(slot),
            None => false,
        }
    }

    fn check(&mut self, now: Instant) {
        let attempt = self.attempt();
        if attempt == *self.word.word() {
            let points = self.scoring.points_for(self.hint_used);
            self.feedback = Feedback::Success;
            self.phase = RoundPhase::Solved;
            self.completion = Some(PendingCompletion {
                outcome: RoundOutcome {
                    points,
                    solved: true,
                },
                due: now + SUCCESS_DELAY,
            });
            info!(points, hint_used = self.hint_used, "Word solved");
        } else {
            self.feedback = Feedback::Error;
            self.error_clears_at = Some(now + ERROR_FLASH);
            debug!(%attempt, "Incorrect attempt");
        }
    }

    /// Reveals the hint and marks it as used for scoring.
    ///
    /// Repeated calls change nothing further; the penalty applies once.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn use_hint(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        if !self.hint_used {
            info!("Hint used");
        }
        self.hint_used = true;
        self.hint_revealed = true;
        true
    }

    /// Pulls every tile back into the pool in a new random order.
    ///
    /// Feedback and hint state are left alone.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn shuffle(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        let mut tiles = std::mem::take(&mut self.available);
        tiles.extend(self.placed.iter_mut().filter_map(Option::take));
        tiles.shuffle(&mut rand::thread_rng());
        self.available = tiles;
        debug!("Shuffled board");
        true
    }

    /// Abandons the word. Completes with zero points after a short flash.
    #[instrument(skip(self, now), fields(phase = ?self.phase))]
    pub fn give_up(&mut self, now: Instant) -> bool {
        if self.is_locked() {
            return false;
        }
        self.feedback = Feedback::Error;
        self.phase = RoundPhase::GivingUp;
        self.error_clears_at = None;
        self.completion = Some(PendingCompletion {
            outcome: RoundOutcome {
                points: 0,
                solved: false,
            },
            due: now + GIVE_UP_DELAY,
        });
        info!(word = %self.word.word(), "Player gave up");
        true
    }

    /// Fires any timers due at `now`.
    ///
    /// Returns the round outcome the one time the completion timer fires;
    /// every other call returns `None`.
    pub fn advance(&mut self, now: Instant) -> Option<RoundOutcome> {
        if let Some(due) = self.error_clears_at
            && now >= due
        {
            self.error_clears_at = None;
            if self.phase == RoundPhase::Playing && self.feedback == Feedback::Error {
                debug!("Error flash cleared");
                self.feedback = Feedback::None;
            }
        }

        if let Some(pending) = self.completion
            && now >= pending.due
        {
            self.completion = None;
            self.phase = RoundPhase::Complete;
            debug!(outcome = ?pending.outcome, "Round complete");
            return Some(pending.outcome);
        }

        None
    }

    fn clear_feedback(&mut self) {
        self.feedback = Feedback::None;
        self.error_clears_at = None;
    }

    /// True once the round has been solved or given up.
    pub fn is_locked(&self) -> bool {
        self.phase != RoundPhase::Playing
    }

    /// True when every slot holds a tile.
    pub fn is_full(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// Placed letters in slot order, skipping empty slots.
    pub fn attempt(&self) -> String {
        self.placed.iter().flatten().map(Tile::ch).collect()
    }

    /// The word and hint for this round.
    pub fn word(&self) -> &WordData {
        &self.word
    }

    /// Tiles in the pool, in display order.
    pub fn available(&self) -> &[Tile] {
        &self.available
    }

    /// Answer slots, left to right.
    pub fn placed(&self) -> &[Slot] {
        &self.placed
    }

    /// Current feedback.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the hint has been used this round.
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Whether the hint text is showing.
    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    /// The hint text, once revealed.
    pub fn visible_hint(&self) -> Option<&str> {
        self.hint_revealed.then(|| self.word.hint().as_str())
    }
}
