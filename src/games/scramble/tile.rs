//! Letter tiles.
//!
//! A word may repeat a character, so a tile's identity is its [`TileId`],
//! never its character. Every move on the board is keyed on the id.

use serde::{Deserialize, Serialize};

/// Opaque tile identifier, unique within a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("tile#{}", _0)]
pub struct TileId(u32);

/// A single letter instance on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    ch: char,
}

impl Tile {
    pub(super) fn new(id: u32, ch: char) -> Self {
        Self {
            id: TileId(id),
            ch,
        }
    }

    /// Returns the tile's identity.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Returns the letter printed on the tile.
    pub fn ch(&self) -> char {
        self.ch
    }
}

/// One answer position: empty, or holding exactly one tile.
pub type Slot = Option<Tile>;
