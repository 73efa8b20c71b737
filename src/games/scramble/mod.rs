//! Word-unscramble game.

mod round;
mod scoring;
mod session;
mod tile;
mod topic;
mod word;

pub use round::{ERROR_FLASH, Feedback, GIVE_UP_DELAY, Round, RoundOutcome, RoundPhase, SUCCESS_DELAY};
pub use scoring::{HINT_PENALTY, POINTS_PER_WORD, ROUNDS_PER_GAME, Scoring};
pub use session::{RoundRecord, Session, SessionError, SessionStatus};
pub use tile::{Slot, Tile, TileId};
pub use topic::{Difficulty, TOPICS, Topic};
pub use word::{WordData, WordError};
