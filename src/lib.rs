//! Word Scramble library - an AI-assisted word-unscramble game
//!
//! # Architecture
//!
//! - **Games**: the round engine (tiles, slots, feedback timers) and the
//!   session that chains rounds into a scored game
//! - **Words**: word sources, backed by an LLM with a built-in fallback list
//! - **LLM client**: minimal Gemini, OpenAI and Anthropic text generation
//! - **TUI**: ratatui screens driven by a transition state machine
//!
//! # Example
//!
//! ```no_run
//! use word_scramble::{Difficulty, FallbackWordSource, Scoring, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = Session::start_game(
//!     &FallbackWordSource,
//!     "science",
//!     Difficulty::Easy,
//!     Scoring::default(),
//!     5,
//! )
//! .await?;
//! assert_eq!(session.max_rounds(), 5);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod llm_client;
mod tui;
mod words;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game engine
pub use games::scramble::{
    Difficulty, ERROR_FLASH, Feedback, GIVE_UP_DELAY, HINT_PENALTY, POINTS_PER_WORD,
    ROUNDS_PER_GAME, Round, RoundOutcome, RoundPhase, RoundRecord, SUCCESS_DELAY, Scoring,
    Session, SessionError, SessionStatus, Slot, TOPICS, Tile, TileId, Topic, WordData, WordError,
};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Word sources
pub use words::{
    FallbackWordSource, LlmWordSource, TextGenerator, WordSource, build_prompt, fallback_words,
    parse_words,
};

// Crate-level exports - TUI
pub use tui::{BoardCommand, ScrambleController, Screen, ScreenTransition, board_command, run_tui};
