//! Concrete world collaborators for the tile explorer.
//!
//! [`HexGrid`] answers geometry questions for a rectangular odd-row hex map,
//! [`TileWorld`] stores objects and the player in memory, and the loaders read
//! whole scenarios from RON files.
pub mod grid;
#[cfg(feature = "loaders")]
pub mod loaders;
pub mod world;

pub use grid::HexGrid;
#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, Scenario, ScenarioLoader};
pub use world::{PlacedObject, TileWorld};
