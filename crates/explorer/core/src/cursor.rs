//! Exploration cursor state and movement errors.

use crate::error::{ErrorSeverity, ExplorerError};
use crate::tile::TileId;

/// Why the cursor did not move. The cursor is untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("rotation {0} is not a hex direction")]
    InvalidDirection(i32),

    #[error("no cursor and no player to move from")]
    NoAnchor,

    #[error("{tile} is not on the map")]
    InvalidTile { tile: TileId },

    #[error("{tile} is on the map edge")]
    EdgeTile { tile: TileId },
}

impl ExplorerError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::InvalidDirection(_) | MoveError::NoAnchor => ErrorSeverity::Validation,
            MoveError::InvalidTile { .. } | MoveError::EdgeTile { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::InvalidDirection(_) => "MOVE_INVALID_DIRECTION",
            MoveError::NoAnchor => "MOVE_NO_ANCHOR",
            MoveError::InvalidTile { .. } => "MOVE_INVALID_TILE",
            MoveError::EdgeTile { .. } => "MOVE_EDGE_TILE",
        }
    }
}

/// Cursor over the map: unset (following the player) or parked on a tile.
///
/// A set tile was valid and off the edge when it was stored. Only
/// [`crate::TileExplorer`] mutates the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorationCursor {
    tile: Option<TileId>,
}

impl ExplorationCursor {
    pub const fn unset() -> Self {
        Self { tile: None }
    }

    /// Raw cursor tile; `None` while following the player.
    pub fn tile(&self) -> Option<TileId> {
        self.tile
    }

    pub fn is_set(&self) -> bool {
        self.tile.is_some()
    }

    /// Tile being explored: the cursor if set, else the player's tile.
    pub fn effective_tile(&self, player_tile: Option<TileId>) -> Option<TileId> {
        self.tile.or(player_tile)
    }

    pub(crate) fn clear(&mut self) {
        self.tile = None;
    }

    pub(crate) fn place(&mut self, tile: TileId) {
        self.tile = Some(tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cursor_follows_player() {
        let cursor = ExplorationCursor::unset();
        assert_eq!(cursor.effective_tile(Some(TileId(42))), Some(TileId(42)));
        assert_eq!(cursor.effective_tile(None), None);
    }

    #[test]
    fn set_cursor_overrides_player() {
        let mut cursor = ExplorationCursor::unset();
        cursor.place(TileId(7));
        assert_eq!(cursor.effective_tile(Some(TileId(42))), Some(TileId(7)));
        assert_eq!(cursor.effective_tile(None), Some(TileId(7)));
        cursor.clear();
        assert!(!cursor.is_set());
    }

    #[test]
    fn move_error_classification() {
        assert_eq!(MoveError::NoAnchor.severity(), ErrorSeverity::Validation);
        assert!(MoveError::EdgeTile { tile: TileId(0) }.severity().is_recoverable());
        assert_eq!(MoveError::NoAnchor.severity().as_str(), "validation");
        assert_eq!(
            MoveError::InvalidTile { tile: TileId(3) }.severity().as_str(),
            "recoverable"
        );
        assert_eq!(
            MoveError::InvalidDirection(9).error_code(),
            "MOVE_INVALID_DIRECTION"
        );
        assert_eq!(
            MoveError::InvalidTile { tile: TileId::INVALID }.to_string(),
            "tile -1 is not on the map"
        );
    }
}
