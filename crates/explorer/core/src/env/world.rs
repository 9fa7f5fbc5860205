use crate::tile::{Elevation, TileId};

/// Live game state the explorer anchors to.
pub trait WorldOracle {
    /// Tile of the currently controlled entity, if one exists.
    fn player_tile(&self) -> Option<TileId>;

    /// Elevation currently shown to the player.
    fn elevation(&self) -> Elevation;
}
