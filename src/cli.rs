//! Command-line interface for word_scramble.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Word Scramble - unscramble AI-generated words in the terminal
#[derive(Parser, Debug)]
#[command(name = "word_scramble")]
#[command(about = "Unscramble AI-generated words across topics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the game
    Play {
        /// Path to the game config file
        #[arg(short, long, default_value = "word_scramble.toml")]
        config: PathBuf,

        /// Use the built-in word list instead of an LLM
        #[arg(long)]
        offline: bool,

        /// Where to write logs
        #[arg(long, default_value = "word_scramble.log")]
        log_file: PathBuf,
    },

    /// List topics and difficulty levels
    Topics,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("word_scramble.toml"),
            offline: false,
            log_file: PathBuf::from("word_scramble.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["word_scramble"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from(["word_scramble", "play", "--offline", "-c", "custom.toml"]);
        match cli.command {
            Some(Command::Play {
                config, offline, ..
            }) => {
                assert!(offline);
                assert_eq!(config, PathBuf::from("custom.toml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
