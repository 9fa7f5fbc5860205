use crate::tile::{Elevation, TileId};

/// Coarse classification of a map object.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectKind {
    Item,
    Critter,
    Scenery,
    Wall,
    /// Floor art. Present on nearly every tile and never announced.
    Tile,
    Misc,
}

impl ObjectKind {
    pub fn is_floor(self) -> bool {
        matches!(self, ObjectKind::Tile)
    }
}

/// What the explorer needs to know about one object.
pub trait TileObject {
    fn is_hidden(&self) -> bool;

    fn kind(&self) -> ObjectKind;

    /// Name as shown to sighted players. `None` or an empty string means the
    /// object is not worth announcing.
    fn display_name(&self) -> Option<&str>;
}

/// Lazily evaluated objects on one tile.
pub type ObjectIter<'a> = Box<dyn Iterator<Item = &'a dyn TileObject> + 'a>;

/// Spatial index over map objects.
pub trait ObjectOracle {
    /// Objects located at `tile` on `elevation`, in the store's own stable
    /// order. Consumers may stop early; the rest is then never touched.
    fn objects_at(&self, elevation: Elevation, tile: TileId) -> ObjectIter<'_>;
}
