//! Word Scramble - terminal word-unscramble game.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    Difficulty, FallbackWordSource, GameConfig, LlmClient, LlmWordSource, TOPICS, WordSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            offline,
            log_file,
        } => {
            init_file_tracing(&log_file)?;
            run_play(&config, offline).await
        }
        Command::Topics => {
            print_topics();
            Ok(())
        }
    }
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,word_scramble=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all, fields(config_path = %config_path.display(), offline))]
async fn run_play(config_path: &Path, offline: bool) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?;
    let source = build_source(&config, offline);
    word_scramble::run_tui(&config, source).await
}

/// Picks the word source: the configured LLM, or the built-in list.
fn build_source(config: &GameConfig, offline: bool) -> Arc<dyn WordSource> {
    if offline {
        info!("Offline mode: using built-in words");
        return Arc::new(FallbackWordSource);
    }
    match config.create_llm_config() {
        Ok(llm_config) => {
            info!(provider = ?llm_config.provider(), model = %llm_config.model(), "Using LLM word source");
            Arc::new(LlmWordSource::new(LlmClient::new(llm_config)))
        }
        Err(e) => {
            warn!(error = %e, "No API key available; using built-in words");
            Arc::new(FallbackWordSource)
        }
    }
}

fn print_topics() {
    println!("Topics:");
    for topic in TOPICS {
        println!("  {} {:<12} {}", topic.icon, topic.id, topic.description);
    }
    println!();
    println!("Difficulty levels:");
    for level in Difficulty::iter() {
        println!("  {:<8} {}", level.to_string(), level.length_band());
    }
}
