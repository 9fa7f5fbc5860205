//! In-memory object store and player state.

use std::collections::HashMap;

use explorer_core::{
    Elevation, ObjectIter, ObjectKind, ObjectOracle, TileId, TileObject, WorldOracle,
};

/// An object standing on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedObject {
    pub name: Option<String>,
    pub kind: ObjectKind,
    pub hidden: bool,
}

impl PlacedObject {
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind,
            hidden: false,
        }
    }

    /// Object with no display name, e.g. floor art.
    pub fn unnamed(kind: ObjectKind) -> Self {
        Self {
            name: None,
            kind,
            hidden: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl TileObject for PlacedObject {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Objects keyed by `(elevation, tile)` in placement order, plus the player.
#[derive(Clone, Debug, Default)]
pub struct TileWorld {
    objects: HashMap<(Elevation, TileId), Vec<PlacedObject>>,
    player: Option<TileId>,
    elevation: Elevation,
}

impl TileWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, elevation: Elevation, tile: TileId, object: PlacedObject) {
        self.objects
            .entry((elevation, tile))
            .or_default()
            .push(object);
    }

    /// Removes and returns everything on a tile.
    pub fn clear_tile(&mut self, elevation: Elevation, tile: TileId) -> Vec<PlacedObject> {
        self.objects.remove(&(elevation, tile)).unwrap_or_default()
    }

    pub fn objects(&self, elevation: Elevation, tile: TileId) -> &[PlacedObject] {
        self.objects
            .get(&(elevation, tile))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn set_player(&mut self, tile: Option<TileId>) {
        self.player = tile;
    }

    pub fn set_elevation(&mut self, elevation: Elevation) {
        self.elevation = elevation;
    }
}

impl ObjectOracle for TileWorld {
    fn objects_at(&self, elevation: Elevation, tile: TileId) -> ObjectIter<'_> {
        Box::new(
            self.objects(elevation, tile)
                .iter()
                .map(|object| object as &dyn TileObject),
        )
    }
}

impl WorldOracle for TileWorld {
    fn player_tile(&self) -> Option<TileId> {
        self.player
    }

    fn elevation(&self) -> Elevation {
        self.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_keep_placement_order_per_elevation() {
        let mut world = TileWorld::new();
        let tile = TileId(101);
        world.place(Elevation(0), tile, PlacedObject::new(ObjectKind::Item, "Rope"));
        world.place(Elevation(0), tile, PlacedObject::new(ObjectKind::Scenery, "Door"));
        world.place(Elevation(1), tile, PlacedObject::new(ObjectKind::Item, "Flare"));

        let names: Vec<_> = world
            .objects_at(Elevation(0), tile)
            .filter_map(|object| object.display_name())
            .collect();
        assert_eq!(names, vec!["Rope", "Door"]);
        assert_eq!(world.objects_at(Elevation(2), tile).count(), 0);
    }

    #[test]
    fn clear_tile_returns_removed_objects() {
        let mut world = TileWorld::new();
        let tile = TileId(7);
        world.place(Elevation::GROUND, tile, PlacedObject::unnamed(ObjectKind::Tile));
        assert_eq!(world.clear_tile(Elevation::GROUND, tile).len(), 1);
        assert!(world.objects(Elevation::GROUND, tile).is_empty());
    }

    #[test]
    fn player_and_elevation_are_reported() {
        let mut world = TileWorld::new();
        assert_eq!(world.player_tile(), None);
        world.set_player(Some(TileId(12)));
        world.set_elevation(Elevation(2));
        assert_eq!(world.player_tile(), Some(TileId(12)));
        assert_eq!(world.elevation(), Elevation(2));
    }
}
