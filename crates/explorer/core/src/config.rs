/// Explorer limits and the fixed phrases it speaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Named objects listed in one tile announcement before it is cut short
    /// with [`Self::TRUNCATION_SUFFIX`].
    pub max_announced_objects: usize,
}

impl ExplorerConfig {
    // ===== compile-time constants used as type parameters =====
    /// Byte capacity of the tile-contents buffer.
    pub const ANNOUNCEMENT_CAPACITY: usize = 1024;
    /// Byte capacity of the distance/direction buffer.
    pub const DISTANCE_CAPACITY: usize = 256;
    /// Bytes kept free after every appended name so the truncation suffix
    /// always fits.
    pub const SUFFIX_MARGIN: usize = 15;

    // ===== phrases =====
    pub const NO_POSITION: &'static str = "No position";
    pub const EMPTY_TILE: &'static str = "Empty";
    pub const NO_PLAYER_POSITION: &'static str = "No player position";
    pub const AT_PLAYER_POSITION: &'static str = "At player position";
    pub const NAME_SEPARATOR: &'static str = ", ";
    pub const TRUNCATION_SUFFIX: &'static str = ", and more";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ANNOUNCED_OBJECTS: usize = 10;

    pub fn new() -> Self {
        Self {
            max_announced_objects: Self::DEFAULT_MAX_ANNOUNCED_OBJECTS,
        }
    }

    /// At least one object is always listed.
    pub fn with_max_announced_objects(max_announced_objects: usize) -> Self {
        Self {
            max_announced_objects: max_announced_objects.max(1),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new()
    }
}

const _: () = assert!(
    ExplorerConfig::SUFFIX_MARGIN > ExplorerConfig::TRUNCATION_SUFFIX.len()
);
