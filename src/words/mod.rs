//! Word sources: where each game's word batch comes from.
//!
//! A [`WordSource`] never fails. Anything that goes wrong while generating
//! words is logged and answered with [`fallback_words`], so a game can always
//! start.

mod llm;

pub use llm::{LlmWordSource, TextGenerator, build_prompt, parse_words};

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::games::scramble::{Difficulty, WordData};

/// Provider of `(word, hint)` pairs for a topic and difficulty.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Returns up to `count` sanitized words; never an empty batch.
    async fn generate_words(&self, topic: &str, difficulty: Difficulty, count: usize)
    -> Vec<WordData>;
}

const FALLBACK: &[(&str, &str)] = &[
    ("REACT", "A JavaScript library for building user interfaces."),
    ("GEMINI", "A constellation and a powerful AI model."),
    ("TYPESCRIPT", "A typed superset of JavaScript."),
    ("FRONTEND", "The part of the web app users interact with."),
    ("SCRAMBLE", "To mix up letters."),
];

/// The fixed batch used whenever generation fails.
pub fn fallback_words() -> Vec<WordData> {
    FALLBACK
        .iter()
        .filter_map(|(word, hint)| WordData::new(*word, *hint).ok())
        .collect()
}

/// Word source that always serves the fallback batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackWordSource;

#[async_trait]
impl WordSource for FallbackWordSource {
    #[instrument(skip(self))]
    async fn generate_words(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Vec<WordData> {
        info!(topic, %difficulty, count, "Serving offline word batch");
        fallback_words()
    }
}
