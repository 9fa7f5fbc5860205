//! Non-visual exploration of a hex-grid map.
//!
//! `explorer-core` keeps a logical exploration cursor that either follows the
//! player or has been moved away from them, and turns what lies under it into
//! short spoken announcements. Map geometry, object storage, and the player
//! entity are consumed through the oracle traits in [`env`]; speech goes out
//! through [`speech_output::SpeechSink`].
//!
//! All operations run synchronously on the host's main loop.
//! [`TileExplorer`] owns the cursor and is not meant to be shared across
//! threads.
pub mod announce;
pub mod config;
pub mod cursor;
pub mod direction;
pub mod env;
pub mod error;
pub mod explorer;
pub mod tile;

pub use announce::{Announcement, AnnouncementBuffer, PushOutcome, TileContents};
pub use config::ExplorerConfig;
pub use cursor::{ExplorationCursor, MoveError};
pub use direction::Direction;
pub use env::{
    ExplorerEnv, HexMapOracle, ObjectIter, ObjectKind, ObjectOracle, TileObject, WorldOracle,
};
pub use error::{ErrorSeverity, ExplorerError};
pub use explorer::TileExplorer;
pub use tile::{Elevation, TileId};
