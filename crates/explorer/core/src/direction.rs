//! The six hex directions.
//!
//! Discriminants follow the map's rotation encoding (NE = 0, clockwise to
//! NW = 5). The explorer only consumes this numbering; the map oracle owns it.

/// Hex direction, in map rotation order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    #[strum(to_string = "northeast", serialize = "ne")]
    NorthEast = 0,
    #[strum(to_string = "east", serialize = "e")]
    East = 1,
    #[strum(to_string = "southeast", serialize = "se")]
    SouthEast = 2,
    #[strum(to_string = "southwest", serialize = "sw")]
    SouthWest = 3,
    #[strum(to_string = "west", serialize = "w")]
    West = 4,
    #[strum(to_string = "northwest", serialize = "nw")]
    NorthWest = 5,
}

impl Direction {
    pub const COUNT: usize = 6;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Maps a raw rotation from the map oracle, rejecting anything outside
    /// `0..COUNT`.
    pub fn from_rotation(rotation: i32) -> Option<Self> {
        usize::try_from(rotation)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub const fn rotation(self) -> i32 {
        self as i32
    }

    /// Spoken name, e.g. "southeast".
    pub const fn name(self) -> &'static str {
        match self {
            Direction::NorthEast => "northeast",
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
        }
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 3) % Self::COUNT]
    }
}
