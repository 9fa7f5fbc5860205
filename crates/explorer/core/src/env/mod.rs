//! Traits describing the world the explorer reads.
//!
//! Oracles expose hex geometry, the objects standing on each tile, and the
//! player. The [`ExplorerEnv`] aggregate bundles them so the explorer can
//! query everything it needs without coupling to the host's storage.
mod map;
mod objects;
mod world;

pub use map::HexMapOracle;
pub use objects::{ObjectIter, ObjectKind, ObjectOracle, TileObject};
pub use world::WorldOracle;

/// Read-only view of the collaborators consulted by the explorer.
#[derive(Clone, Copy)]
pub struct ExplorerEnv<'a> {
    map: &'a dyn HexMapOracle,
    objects: &'a dyn ObjectOracle,
    world: &'a dyn WorldOracle,
}

impl<'a> ExplorerEnv<'a> {
    pub fn new(
        map: &'a dyn HexMapOracle,
        objects: &'a dyn ObjectOracle,
        world: &'a dyn WorldOracle,
    ) -> Self {
        Self {
            map,
            objects,
            world,
        }
    }

    pub fn map(&self) -> &'a dyn HexMapOracle {
        self.map
    }

    pub fn objects(&self) -> &'a dyn ObjectOracle {
        self.objects
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }
}

impl core::fmt::Debug for ExplorerEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExplorerEnv")
            .field("player_tile", &self.world.player_tile())
            .field("elevation", &self.world.elevation())
            .finish_non_exhaustive()
    }
}
