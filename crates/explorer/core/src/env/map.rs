use crate::direction::Direction;
use crate::tile::TileId;

/// Hex map geometry.
///
/// The explorer never computes adjacency or distance itself; every spatial
/// question goes through this oracle.
pub trait HexMapOracle {
    /// Tile `steps` hexes away in `direction`. May return a tile for which
    /// [`is_valid_tile`](Self::is_valid_tile) is false when the step leaves
    /// the map.
    fn tile_in_direction(&self, tile: TileId, direction: Direction, steps: u32) -> TileId;

    fn is_valid_tile(&self, tile: TileId) -> bool;

    /// Tiles on the outer boundary of the map.
    fn is_edge_tile(&self, tile: TileId) -> bool;

    /// Hex distance in tiles.
    fn distance_between(&self, from: TileId, to: TileId) -> i32;

    /// Raw rotation (see [`Direction::from_rotation`]) that faces from `from`
    /// towards `to`.
    fn rotation_to(&self, from: TileId, to: TileId) -> i32;
}
