//! Rectangular hex map geometry.

use explorer_core::{Direction, HexMapOracle, TileId};

/// Pointy-top hex grid in odd-row offset layout.
///
/// Tiles are numbered row by row (`row * width + col`) and odd rows are
/// shifted half a hex to the east. The outermost ring of tiles is the map
/// edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexGrid {
    width: i32,
    height: i32,
}

impl HexGrid {
    pub const DEFAULT_WIDTH: i32 = 200;
    pub const DEFAULT_HEIGHT: i32 = 200;
    /// Longest side for which a square grid's tile count still fits in a
    /// [`TileId`] and hex distances cannot overflow.
    pub const MAX_SIDE: i32 = 46_340;

    /// Each side is clamped to `1..=MAX_SIDE`.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.clamp(1, Self::MAX_SIDE),
            height: height.clamp(1, Self::MAX_SIDE),
        }
    }

    /// Exact dimensions, or `None` unless both sides are in `1..=MAX_SIDE`.
    pub fn try_new(width: i32, height: i32) -> Option<Self> {
        let sides = 1..=Self::MAX_SIDE;
        if sides.contains(&width) && sides.contains(&height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_count(&self) -> i32 {
        self.width * self.height
    }

    /// Tile at `(col, row)`, or [`TileId::INVALID`] outside the grid.
    pub fn tile_at(&self, col: i32, row: i32) -> TileId {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            TileId::INVALID
        } else {
            TileId(row * self.width + col)
        }
    }

    /// `(col, row)` of a tile on the grid.
    pub fn offset(&self, tile: TileId) -> Option<(i32, i32)> {
        self.contains(tile)
            .then(|| (tile.0 % self.width, tile.0 / self.width))
    }

    fn contains(&self, tile: TileId) -> bool {
        tile.0 >= 0 && tile.0 < self.tile_count()
    }

    fn axial(&self, tile: TileId) -> Option<(i32, i32)> {
        let (col, row) = self.offset(tile)?;
        Some((col - (row - (row & 1)) / 2, row))
    }

    fn from_axial(&self, q: i32, r: i32) -> TileId {
        match q.checked_add((r - (r & 1)) / 2) {
            Some(col) => self.tile_at(col, r),
            None => TileId::INVALID,
        }
    }

    fn axial_step(direction: Direction) -> (i32, i32) {
        match direction {
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (0, -1),
        }
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl HexMapOracle for HexGrid {
    fn tile_in_direction(&self, tile: TileId, direction: Direction, steps: u32) -> TileId {
        let Some((q, r)) = self.axial(tile) else {
            return TileId::INVALID;
        };
        let Ok(steps) = i32::try_from(steps) else {
            return TileId::INVALID;
        };
        let (dq, dr) = Self::axial_step(direction);
        match (dq.checked_mul(steps), dr.checked_mul(steps)) {
            (Some(dq), Some(dr)) => match (q.checked_add(dq), r.checked_add(dr)) {
                (Some(q), Some(r)) => self.from_axial(q, r),
                _ => TileId::INVALID,
            },
            _ => TileId::INVALID,
        }
    }

    fn is_valid_tile(&self, tile: TileId) -> bool {
        self.contains(tile)
    }

    fn is_edge_tile(&self, tile: TileId) -> bool {
        match self.offset(tile) {
            Some((col, row)) => {
                col == 0 || row == 0 || col == self.width - 1 || row == self.height - 1
            }
            None => false,
        }
    }

    fn distance_between(&self, from: TileId, to: TileId) -> i32 {
        match (self.axial(from), self.axial(to)) {
            (Some((q1, r1)), Some((q2, r2))) => {
                let (dq, dr) = (q2 - q1, r2 - r1);
                (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
            }
            _ => 0,
        }
    }

    /// Sector of the screen-space bearing from `from` to `to`, each direction
    /// owning the 60° around its own axis. Returns -1 for off-grid tiles.
    fn rotation_to(&self, from: TileId, to: TileId) -> i32 {
        const BY_SECTOR: [Direction; Direction::COUNT] = [
            Direction::East,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::SouthEast,
        ];

        let (Some((q1, r1)), Some((q2, r2))) = (self.axial(from), self.axial(to)) else {
            return -1;
        };
        let (dq, dr) = (f64::from(q2 - q1), f64::from(r2 - r1));

        // Screen y grows southward; flip it so angles run counterclockwise from east.
        let x = 3f64.sqrt() * (dq + dr / 2.0);
        let y = -1.5 * dr;
        let sector = (y.atan2(x).to_degrees() / 60.0).round() as i32;

        BY_SECTOR[sector.rem_euclid(Direction::COUNT as i32) as usize].rotation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_two_hundred_square() {
        let grid = HexGrid::default();
        assert_eq!(grid.tile_count(), 40_000);
        assert!(grid.is_valid_tile(TileId(39_999)));
        assert!(!grid.is_valid_tile(TileId(40_000)));
        assert!(!grid.is_valid_tile(TileId::INVALID));
    }

    #[test]
    fn east_and_west_stay_on_the_row() {
        let grid = HexGrid::new(10, 10);
        let start = grid.tile_at(4, 3);
        assert_eq!(
            grid.tile_in_direction(start, Direction::East, 1),
            grid.tile_at(5, 3)
        );
        assert_eq!(
            grid.tile_in_direction(start, Direction::West, 2),
            grid.tile_at(2, 3)
        );
    }

    #[test]
    fn diagonal_neighbors_depend_on_row_parity() {
        let grid = HexGrid::new(10, 10);
        // Even row: NE neighbour is the same column one row up.
        let even = grid.tile_at(4, 4);
        assert_eq!(
            grid.tile_in_direction(even, Direction::NorthEast, 1),
            grid.tile_at(4, 3)
        );
        assert_eq!(
            grid.tile_in_direction(even, Direction::SouthWest, 1),
            grid.tile_at(3, 5)
        );
        // Odd row: shifted east, so NE moves one column right.
        let odd = grid.tile_at(4, 3);
        assert_eq!(
            grid.tile_in_direction(odd, Direction::NorthEast, 1),
            grid.tile_at(5, 2)
        );
        assert_eq!(
            grid.tile_in_direction(odd, Direction::SouthWest, 1),
            grid.tile_at(4, 4)
        );
    }

    #[test]
    fn every_neighbor_is_one_step_in_its_own_direction() {
        let grid = HexGrid::new(12, 12);
        for start in [grid.tile_at(5, 5), grid.tile_at(6, 6)] {
            for direction in Direction::ALL {
                let next = grid.tile_in_direction(start, direction, 1);
                assert_eq!(grid.distance_between(start, next), 1);
                assert_eq!(grid.rotation_to(start, next), direction.rotation());
                let back = grid.tile_in_direction(next, direction.opposite(), 1);
                assert_eq!(back, start);
            }
        }
    }

    #[test]
    fn stepping_off_the_grid_is_invalid() {
        let grid = HexGrid::new(10, 10);
        assert_eq!(
            grid.tile_in_direction(grid.tile_at(0, 5), Direction::West, 1),
            TileId::INVALID
        );
        assert_eq!(
            grid.tile_in_direction(grid.tile_at(5, 0), Direction::NorthWest, 1),
            TileId::INVALID
        );
        assert_eq!(
            grid.tile_in_direction(TileId::INVALID, Direction::East, 1),
            TileId::INVALID
        );
    }

    #[test]
    fn outer_ring_is_edge() {
        let grid = HexGrid::new(10, 10);
        assert!(grid.is_edge_tile(grid.tile_at(0, 4)));
        assert!(grid.is_edge_tile(grid.tile_at(9, 4)));
        assert!(grid.is_edge_tile(grid.tile_at(4, 0)));
        assert!(grid.is_edge_tile(grid.tile_at(4, 9)));
        assert!(!grid.is_edge_tile(grid.tile_at(1, 1)));
        assert!(!grid.is_edge_tile(TileId::INVALID));
    }

    #[test]
    fn distance_along_a_line() {
        let grid = HexGrid::new(20, 20);
        let start = grid.tile_at(5, 10);
        let far = grid.tile_in_direction(start, Direction::SouthEast, 6);
        assert_eq!(grid.distance_between(start, far), 6);
        assert_eq!(grid.distance_between(far, start), 6);
        assert_eq!(grid.rotation_to(start, far), Direction::SouthEast.rotation());
        assert_eq!(grid.rotation_to(far, start), Direction::NorthWest.rotation());
    }

    #[test]
    fn oversized_dimensions_are_bounded() {
        assert_eq!(HexGrid::try_new(70_000, 70_000), None);
        assert_eq!(HexGrid::try_new(0, 10), None);
        assert_eq!(HexGrid::try_new(1, i32::MAX), None);
        assert!(HexGrid::try_new(HexGrid::MAX_SIDE, HexGrid::MAX_SIDE).is_some());

        let grid = HexGrid::new(70_000, 70_000);
        assert_eq!(grid.width(), HexGrid::MAX_SIDE);
        assert_eq!(grid.tile_count(), HexGrid::MAX_SIDE * HexGrid::MAX_SIDE);
        let corner = grid.tile_at(HexGrid::MAX_SIDE - 1, HexGrid::MAX_SIDE - 1);
        assert!(grid.is_edge_tile(corner));
        assert_eq!(
            grid.tile_in_direction(corner, Direction::East, i32::MAX as u32),
            TileId::INVALID
        );
    }

    #[test]
    fn rotation_for_off_grid_tiles_is_out_of_range() {
        let grid = HexGrid::new(10, 10);
        assert_eq!(grid.rotation_to(TileId::INVALID, grid.tile_at(4, 4)), -1);
    }
}
