//! Hand-rolled collaborators for exercising the explorer in isolation.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use explorer_core::{
    Direction, Elevation, HexMapOracle, ObjectIter, ObjectKind, ObjectOracle, TileId, TileObject,
    WorldOracle,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parallelogram map in axial coordinates: tile = r * width + q.
pub struct AxialMap {
    pub width: i32,
    pub height: i32,
    /// Forces `rotation_to` to return this raw value.
    pub rotation_override: Option<i32>,
}

impl AxialMap {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            rotation_override: None,
        }
    }

    pub fn tile(&self, q: i32, r: i32) -> TileId {
        TileId(r * self.width + q)
    }

    fn coords(&self, tile: TileId) -> (i32, i32) {
        (tile.0 % self.width, tile.0 / self.width)
    }

    fn delta(direction: Direction) -> (i32, i32) {
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

impl HexMapOracle for AxialMap {
    fn tile_in_direction(&self, tile: TileId, direction: Direction, steps: u32) -> TileId {
        let (q, r) = self.coords(tile);
        let (dq, dr) = Self::delta(direction);
        let (q, r) = (q + dq * steps as i32, r + dr * steps as i32);
        if q < 0 || r < 0 || q >= self.width || r >= self.height {
            TileId::INVALID
        } else {
            self.tile(q, r)
        }
    }

    fn is_valid_tile(&self, tile: TileId) -> bool {
        tile.0 >= 0 && tile.0 < self.width * self.height
    }

    fn is_edge_tile(&self, tile: TileId) -> bool {
        let (q, r) = self.coords(tile);
        q == 0 || r == 0 || q == self.width - 1 || r == self.height - 1
    }

    fn distance_between(&self, from: TileId, to: TileId) -> i32 {
        let (q1, r1) = self.coords(from);
        let (q2, r2) = self.coords(to);
        let (dq, dr) = (q2 - q1, r2 - r1);
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }

    fn rotation_to(&self, from: TileId, to: TileId) -> i32 {
        if let Some(rotation) = self.rotation_override {
            return rotation;
        }
        let (q1, r1) = self.coords(from);
        let (q2, r2) = self.coords(to);
        let (dq, dr) = (q2 - q1, r2 - r1);
        let steps = self.distance_between(from, to).max(1);
        Direction::ALL
            .into_iter()
            .find(|direction| {
                let (uq, ur) = Self::delta(*direction);
                uq * steps == dq && ur * steps == dr
            })
            .map_or(0, Direction::rotation)
    }
}

pub struct FakeObject {
    pub name: Option<String>,
    pub kind: ObjectKind,
    pub hidden: bool,
}

impl FakeObject {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            kind: ObjectKind::Item,
            hidden: false,
        }
    }

    pub fn kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn nameless(kind: ObjectKind) -> Self {
        Self {
            name: None,
            kind,
            hidden: false,
        }
    }
}

impl TileObject for FakeObject {
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

/// Object store that counts how many objects consumers pulled.
#[derive(Default)]
pub struct FakeObjects {
    objects: HashMap<(Elevation, TileId), Vec<FakeObject>>,
    pub inspected: Cell<usize>,
}

impl FakeObjects {
    pub fn place(&mut self, elevation: Elevation, tile: TileId, object: FakeObject) {
        self.objects.entry((elevation, tile)).or_default().push(object);
    }
}

impl ObjectOracle for FakeObjects {
    fn objects_at(&self, elevation: Elevation, tile: TileId) -> ObjectIter<'_> {
        let objects = self
            .objects
            .get(&(elevation, tile))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let inspected = &self.inspected;
        Box::new(objects.iter().map(move |object| {
            inspected.set(inspected.get() + 1);
            object as &dyn TileObject
        }))
    }
}

#[derive(Default)]
pub struct FakeWorld {
    pub player: Option<TileId>,
    pub elevation: Elevation,
}

impl WorldOracle for FakeWorld {
    fn player_tile(&self) -> Option<TileId> {
        self.player
    }

    fn elevation(&self) -> Elevation {
        self.elevation
    }
}
