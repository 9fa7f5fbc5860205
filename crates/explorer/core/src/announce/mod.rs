//! Spoken announcements.
//!
//! Both flavors are built fresh for every request and never stored.
mod buffer;

use core::fmt::{self, Write as _};

use arrayvec::ArrayString;
use tracing::warn;

pub use buffer::{AnnouncementBuffer, PushOutcome};

use crate::config::ExplorerConfig;
use crate::direction::Direction;

/// Buffer holding the names found on a tile.
pub type TileContents = AnnouncementBuffer<{ ExplorerConfig::ANNOUNCEMENT_CAPACITY }>;

/// Something the explorer has to say.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Announcement {
    /// Neither a cursor nor a player tile to describe.
    NoPosition,
    /// Nothing worth naming on the tile.
    EmptyTile,
    /// Names on the tile, possibly cut short.
    TileContents(TileContents),
    /// No player entity to measure from.
    NoPlayerPosition,
    /// Cursor follows the player or sits on the player's tile.
    AtPlayerPosition,
    /// Cursor displaced from the player.
    Distance {
        tiles: i32,
        direction: Direction,
        phrase: ArrayString<{ ExplorerConfig::DISTANCE_CAPACITY }>,
    },
}

impl Announcement {
    /// "1 tile southeast" or "N tiles southeast".
    pub fn distance(tiles: i32, direction: Direction) -> Self {
        let mut phrase = ArrayString::new();
        let written = if tiles == 1 {
            write!(phrase, "1 tile {}", direction.name())
        } else {
            write!(phrase, "{tiles} tiles {}", direction.name())
        };
        if written.is_err() {
            warn!(tiles, %direction, "distance phrase exceeded its buffer");
        }

        Self::Distance {
            tiles,
            direction,
            phrase,
        }
    }

    /// Exact text handed to speech.
    pub fn text(&self) -> &str {
        match self {
            Self::NoPosition => ExplorerConfig::NO_POSITION,
            Self::EmptyTile => ExplorerConfig::EMPTY_TILE,
            Self::TileContents(contents) => contents.as_str(),
            Self::NoPlayerPosition => ExplorerConfig::NO_PLAYER_POSITION,
            Self::AtPlayerPosition => ExplorerConfig::AT_PLAYER_POSITION,
            Self::Distance { phrase, .. } => phrase.as_str(),
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
