//! LLM-backed word generation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{WordSource, fallback_words};
use crate::games::scramble::{Difficulty, WordData};
use crate::llm_client::{LlmClient, LlmError};

const SYSTEM_PROMPT: &str = "You generate word lists for a word-unscramble game. \
Respond with a single JSON object and nothing else.";

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for the given prompts.
    async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        LlmClient::generate(self, system_prompt, user_message).await
    }
}

#[derive(Debug, Deserialize)]
struct WordBatch {
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    word: String,
    hint: String,
}

/// Builds the user prompt sent to the model.
pub fn build_prompt(topic: &str, difficulty: Difficulty, count: usize) -> String {
    format!(
        "Generate {count} distinct English words related to the topic \"{topic}\".\n\
         Difficulty Level: {difficulty}.\n\
         \n\
         Constraints:\n\
         - Words must be single words (no spaces or hyphens).\n\
         - Length should be {band} for this difficulty.\n\
         - Provide a short, clear definition or hint for each word.\n\
         - Words should be common enough to be guessable but challenging for the level.\n\
         \n\
         Respond with JSON of the form {{\"words\": [{{\"word\": \"...\", \"hint\": \"...\"}}]}}.",
        band = difficulty.length_band(),
    )
}

/// Parses a model response into at most `count` sanitized words.
///
/// Accepts the JSON object bare or wrapped in a Markdown code fence.
///
/// # Errors
///
/// Returns [`LlmError`] if the text is not the expected JSON shape.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_words(text: &str, count: usize) -> Result<Vec<WordData>, LlmError> {
    let json = strip_code_fence(text);
    let batch: WordBatch = serde_json::from_str(json)
        .map_err(|e| LlmError::new(format!("Malformed word batch: {}", e)))?;

    let received = batch.words.len();
    let words: Vec<WordData> = batch
        .words
        .iter()
        .filter_map(|raw| WordData::sanitized(&raw.word, &raw.hint))
        .take(count)
        .collect();

    debug!(received, kept = words.len(), "Parsed word batch");
    Ok(words)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Word source that asks a language model, falling back on any failure.
#[derive(Debug, Clone)]
pub struct LlmWordSource<G> {
    generator: G,
}

impl<G: TextGenerator> LlmWordSource<G> {
    /// Creates a word source over the given generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generates words without the fallback. Empty results are errors.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on provider failure, malformed output, or when no
    /// usable word survives sanitizing.
    #[instrument(skip(self))]
    pub async fn try_generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<WordData>, LlmError> {
        let prompt = build_prompt(topic, difficulty, count);
        let text = self.generator.generate(SYSTEM_PROMPT, &prompt).await?;
        let words = parse_words(&text, count)?;
        if words.is_empty() {
            return Err(LlmError::new("No usable words in response".to_string()));
        }
        Ok(words)
    }
}

#[async_trait]
impl<G: TextGenerator> WordSource for LlmWordSource<G> {
    #[instrument(skip(self))]
    async fn generate_words(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Vec<WordData> {
        match self.try_generate(topic, difficulty, count).await {
            Ok(words) => {
                info!(count = words.len(), "Generated word batch");
                words
            }
            Err(e) => {
                warn!(error = %e, "Word generation failed, using fallback batch");
                fallback_words()
            }
        }
    }
}
