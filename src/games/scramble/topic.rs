//! Topics and difficulty levels offered on the menu.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Difficulty level for a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Difficulty {
    /// Short words.
    Easy,
    /// The default level.
    #[default]
    Medium,
    /// Longer words.
    Hard,
    /// Ten letters and up.
    Expert,
}

impl Difficulty {
    /// Word length band requested from the word source.
    pub fn length_band(self) -> &'static str {
        match self {
            Self::Easy => "4-5 letters",
            Self::Medium => "6-7 letters",
            Self::Hard => "8-9 letters",
            Self::Expert => "10 or more letters",
        }
    }

    /// Next harder level, wrapping around to `Easy`.
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|d| *d == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Next easier level, wrapping around to `Expert`.
    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|d| *d == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// A selectable topic. The `id` is what the word source receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    /// Identifier passed to the word source.
    pub id: &'static str,
    /// Menu label.
    pub label: &'static str,
    /// Menu icon.
    pub icon: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Built-in topics, in menu order.
pub const TOPICS: &[Topic] = &[
    Topic {
        id: "general",
        label: "General Knowledge",
        icon: "🧠",
        description: "A mix of everything.",
    },
    Topic {
        id: "science",
        label: "Science & Nature",
        icon: "🧬",
        description: "Physics, biology, and the natural world.",
    },
    Topic {
        id: "technology",
        label: "Technology",
        icon: "💻",
        description: "Computers, gadgets, and innovation.",
    },
    Topic {
        id: "food",
        label: "Food & Cooking",
        icon: "🍳",
        description: "Delicious ingredients and dishes.",
    },
    Topic {
        id: "travel",
        label: "World Travel",
        icon: "🌍",
        description: "Countries, cities, and landmarks.",
    },
];
