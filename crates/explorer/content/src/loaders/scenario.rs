//! Scenario loader.
//!
//! A scenario is a grid, the objects placed on it, and where the player
//! stands: everything needed to drive the explorer without a running game.

use std::path::Path;

use anyhow::{Context, bail};
use explorer_core::{Elevation, ExplorerEnv, HexMapOracle, ObjectKind, TileId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::HexGrid;
use crate::loaders::{LoadResult, read_file};
use crate::world::{PlacedObject, TileWorld};

/// Scenario data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    dimensions: (i32, i32),
    #[serde(default)]
    elevation: u8,
    #[serde(default)]
    player: Option<i32>,
    #[serde(default)]
    objects: Vec<ObjectRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectRon {
    tile: i32,
    kind: ObjectKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    elevation: u8,
    #[serde(default)]
    hidden: bool,
}

/// A loaded grid and world.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: HexGrid,
    pub world: TileWorld,
}

impl Scenario {
    pub fn env(&self) -> ExplorerEnv<'_> {
        ExplorerEnv::new(&self.grid, &self.world, &self.world)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in scenario {}", path.display()))
    }

    /// Parse a scenario from RON text.
    ///
    /// Every referenced tile must lie on the grid.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width <= 0 || height <= 0 {
            bail!("scenario dimensions must be positive, got {width}x{height}");
        }
        let Some(grid) = HexGrid::try_new(width, height) else {
            bail!(
                "scenario dimensions {width}x{height} exceed {max} tiles per side",
                max = HexGrid::MAX_SIDE
            );
        };

        let mut world = TileWorld::new();
        world.set_elevation(Elevation(data.elevation));

        if let Some(player) = data.player {
            let tile = TileId(player);
            if !grid.is_valid_tile(tile) {
                bail!("player {tile} is outside the {width}x{height} grid");
            }
            world.set_player(Some(tile));
        }

        let object_count = data.objects.len();
        for object in data.objects {
            let tile = TileId(object.tile);
            if !grid.is_valid_tile(tile) {
                bail!("object {:?} on {tile} is outside the grid", object.name);
            }
            world.place(
                Elevation(object.elevation),
                tile,
                PlacedObject {
                    name: object.name,
                    kind: object.kind,
                    hidden: object.hidden,
                },
            );
        }

        debug!(width, height, objects = object_count, "scenario loaded");
        Ok(Scenario { grid, world })
    }
}

#[cfg(test)]
mod tests {
    use explorer_core::{ObjectOracle, WorldOracle};

    use super::*;

    #[test]
    fn parses_minimal_scenario() {
        let scenario = ScenarioLoader::parse("(dimensions: (8, 6))").unwrap();
        assert_eq!(scenario.grid.width(), 8);
        assert_eq!(scenario.grid.height(), 6);
        assert_eq!(scenario.world.player_tile(), None);
        assert_eq!(scenario.world.elevation(), Elevation::GROUND);
    }

    #[test]
    fn parses_player_and_objects() {
        let scenario = ScenarioLoader::parse(
            r#"(
                dimensions: (10, 10),
                elevation: 1,
                player: Some(44),
                objects: [
                    (tile: 44, kind: Scenery, name: Some("Door"), elevation: 1),
                    (tile: 44, kind: Tile, elevation: 1),
                    (tile: 45, kind: Item, name: Some("Stash"), hidden: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(scenario.world.player_tile(), Some(TileId(44)));
        assert_eq!(scenario.world.elevation(), Elevation(1));
        assert_eq!(scenario.world.objects_at(Elevation(1), TileId(44)).count(), 2);
        assert!(scenario.world.objects(Elevation(0), TileId(45))[0].hidden);
    }

    #[test]
    fn rejects_player_off_grid() {
        let err =
            ScenarioLoader::parse("(dimensions: (4, 4), player: Some(16))").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(ScenarioLoader::parse("(dimensions: (0, 4))").is_err());
    }

    #[test]
    fn rejects_dimensions_with_too_many_tiles() {
        let err = ScenarioLoader::parse("(dimensions: (70000, 70000), player: Some(5))")
            .unwrap_err();
        assert!(err.to_string().contains("tiles per side"));
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = ScenarioLoader::parse("(dimensions: 4)").unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario RON"));
    }
}
