//! Tests for LLM-backed word sources using a scripted generator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use word_scramble::{
    Difficulty, LlmError, LlmWordSource, Scoring, Session, TextGenerator, WordSource,
    fallback_words,
};

/// Generator that replays a fixed reply and records the prompts it saw.
struct ScriptedGenerator {
    reply: Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    fn ok(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .expect("prompt log")
            .push(user_message.to_string());
        self.reply.clone().map_err(LlmError::new)
    }
}

#[tokio::test]
async fn test_valid_reply_is_sanitized() {
    let source = LlmWordSource::new(ScriptedGenerator::ok(
        r#"```json
{"words": [
  {"word": "photon", "hint": "A particle of light."},
  {"word": "ION", "hint": " Charged atom. "},
  {"word": "dark matter", "hint": "Invisible mass."}
]}
```"#,
    ));

    let words = source
        .generate_words("science", Difficulty::Easy, 5)
        .await;
    let pairs: Vec<_> = words
        .iter()
        .map(|w| (w.word().as_str(), w.hint().as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("PHOTON", "A particle of light."), ("ION", "Charged atom.")]
    );
}

#[tokio::test]
async fn test_reply_truncated_to_count() {
    let source = LlmWordSource::new(ScriptedGenerator::ok(
        r#"{"words": [
  {"word": "ONE", "hint": "1"},
  {"word": "TWO", "hint": "2"},
  {"word": "THREE", "hint": "3"}
]}"#,
    ));
    let words = source.generate_words("general", Difficulty::Easy, 2).await;
    assert_eq!(words.len(), 2);
}

#[tokio::test]
async fn test_prompt_carries_topic_and_difficulty() {
    let generator = ScriptedGenerator::ok(r#"{"words": [{"word": "SALT", "hint": "Seasoning."}]}"#);
    let prompts = Arc::clone(&generator.prompts);
    let source = LlmWordSource::new(generator);
    source
        .try_generate("food", Difficulty::Expert, 4)
        .await
        .expect("words");

    let seen = prompts.lock().expect("prompt log");
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("Generate 4 distinct"));
    assert!(seen[0].contains("\"food\""));
    assert!(seen[0].contains("Expert"));
}

#[tokio::test]
async fn test_malformed_reply_falls_back() {
    let source = LlmWordSource::new(ScriptedGenerator::ok("Sure! Here are some words: ATOM, ION"));
    let words = source.generate_words("science", Difficulty::Hard, 5).await;
    assert_eq!(words, fallback_words());

    let session = Session::start("science", Difficulty::Hard, words, Scoring::default())
        .expect("session");
    assert_eq!(session.max_rounds(), 5);
}

#[tokio::test]
async fn test_provider_error_falls_back() {
    let source = LlmWordSource::new(ScriptedGenerator::failing("HTTP 503"));
    assert!(
        source
            .try_generate("travel", Difficulty::Medium, 5)
            .await
            .is_err()
    );
    assert_eq!(
        source.generate_words("travel", Difficulty::Medium, 5).await,
        fallback_words()
    );
}

#[tokio::test]
async fn test_all_invalid_words_fall_back() {
    let source = LlmWordSource::new(ScriptedGenerator::ok(
        r#"{"words": [{"word": "two words", "hint": "x"}, {"word": "C3PO", "hint": "Robot."}]}"#,
    ));
    assert!(source.try_generate("general", Difficulty::Easy, 5).await.is_err());
    assert_eq!(
        source.generate_words("general", Difficulty::Easy, 5).await,
        fallback_words()
    );
}
