//! Game configuration.

use crate::games::scramble::{HINT_PENALTY, POINTS_PER_WORD, ROUNDS_PER_GAME, Scoring};
use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game run, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Words requested per game.
    #[serde(default = "default_rounds_per_game")]
    rounds_per_game: usize,

    /// Points for an unhinted solve.
    #[serde(default = "default_points_per_word")]
    points_per_word: u32,

    /// Deduction when the hint was used.
    #[serde(default = "default_hint_penalty")]
    hint_penalty: u32,

    /// LLM provider (gemini, openai or anthropic).
    #[serde(default)]
    llm_provider: LlmProvider,

    /// LLM model name (e.g., "gemini-2.5-flash", "gpt-4o-mini").
    #[serde(default = "default_model")]
    llm_model: String,

    /// Maximum tokens for LLM responses.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,
}

fn default_rounds_per_game() -> usize {
    ROUNDS_PER_GAME
}

fn default_points_per_word() -> u32 {
    POINTS_PER_WORD
}

fn default_hint_penalty() -> u32 {
    HINT_PENALTY
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: default_rounds_per_game(),
            points_per_word: default_points_per_word(),
            hint_penalty: default_hint_penalty(),
            llm_provider: LlmProvider::default(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(rounds = config.rounds_per_game, provider = ?config.llm_provider, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the values make a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_per_game == 0 {
            return Err(ConfigError::new(
                "rounds_per_game must be at least 1".to_string(),
            ));
        }
        if self.hint_penalty > self.points_per_word {
            return Err(ConfigError::new(format!(
                "hint_penalty ({}) exceeds points_per_word ({})",
                self.hint_penalty, self.points_per_word
            )));
        }
        Ok(())
    }

    /// Scoring rules from this config.
    pub fn scoring(&self) -> Scoring {
        Scoring::new(self.points_per_word, self.hint_penalty)
    }

    /// Creates LLM configuration from this config.
    ///
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `OPENAI_API_KEY`, or
    /// `ANTHROPIC_API_KEY` depending on the provider.
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        debug!("Creating LLM config");

        let api_key = match self.llm_provider {
            LlmProvider::Gemini => std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .map_err(|_| {
                    ConfigError::new("GEMINI_API_KEY environment variable not set".to_string())
                })?,
            LlmProvider::OpenAI => std::env::var("OPENAI_API_KEY").map_err(|_| {
                ConfigError::new("OPENAI_API_KEY environment variable not set".to_string())
            })?,
            LlmProvider::Anthropic => std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                ConfigError::new("ANTHROPIC_API_KEY environment variable not set".to_string())
            })?,
        };

        Ok(LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
