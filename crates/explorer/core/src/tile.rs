use std::fmt;

/// Flat index of a hex tile as understood by the map oracle.
///
/// Indices are not guaranteed to be on the map; the oracle is the only
/// authority on validity. [`TileId::INVALID`] is what oracles hand back for a
/// step off the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub i32);

impl TileId {
    pub const INVALID: Self = Self(-1);
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile {}", self.0)
    }
}

/// Map level. Objects are looked up per elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevation(pub u8);

impl Elevation {
    pub const GROUND: Self = Self(0);
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elevation {}", self.0)
    }
}
