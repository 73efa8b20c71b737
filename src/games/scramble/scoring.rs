//! Points awarded per round.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Points for solving a word without the hint.
pub const POINTS_PER_WORD: u32 = 100;

/// Points deducted when the hint was revealed before solving.
pub const HINT_PENALTY: u32 = 25;

/// Words requested per game.
pub const ROUNDS_PER_GAME: usize = 5;

/// Scoring rules for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    points_per_word: u32,
    hint_penalty: u32,
}

impl Scoring {
    /// Creates scoring rules.
    #[instrument]
    pub fn new(points_per_word: u32, hint_penalty: u32) -> Self {
        Self {
            points_per_word,
            hint_penalty,
        }
    }

    /// Points for a solved word. Never below zero.
    pub fn points_for(&self, hint_used: bool) -> u32 {
        if hint_used {
            self.points_per_word.saturating_sub(self.hint_penalty)
        } else {
            self.points_per_word
        }
    }

    /// Points for an unhinted solve.
    pub fn points_per_word(&self) -> u32 {
        self.points_per_word
    }

    /// Deduction for using the hint.
    pub fn hint_penalty(&self) -> u32 {
        self.hint_penalty
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(POINTS_PER_WORD, HINT_PENALTY)
    }
}
