//! Cursor movement and announcement synthesis.

use speech_output::SpeechSink;
use tracing::{debug, trace, warn};

use crate::announce::{Announcement, PushOutcome, TileContents};
use crate::config::ExplorerConfig;
use crate::cursor::{ExplorationCursor, MoveError};
use crate::direction::Direction;
use crate::env::ExplorerEnv;
use crate::error::ExplorerError;
use crate::tile::TileId;

/// Owns the exploration cursor and turns map queries into speech.
///
/// Every announcement interrupts speech already in progress, so rapid cursor
/// movement always voices the newest tile.
#[derive(Clone, Debug, Default)]
pub struct TileExplorer {
    cursor: ExplorationCursor,
    config: ExplorerConfig,
}

impl TileExplorer {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            cursor: ExplorationCursor::unset(),
            config,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn cursor(&self) -> &ExplorationCursor {
        &self.cursor
    }

    /// Raw cursor tile, `None` while following the player.
    pub fn cursor_tile(&self) -> Option<TileId> {
        self.cursor.tile()
    }

    /// Unsets the cursor so it follows the player again.
    pub fn init(&mut self) {
        self.cursor.clear();
        debug!("exploration cursor reset");
    }

    /// Parks the cursor on the player's tile. No-op without a player.
    pub fn reset_to_player(&mut self, env: &ExplorerEnv<'_>) {
        if let Some(tile) = env.world().player_tile() {
            self.cursor.place(tile);
            debug!(%tile, "exploration cursor snapped to player");
        }
    }

    /// Cursor tile if set, otherwise the player's tile.
    pub fn effective_tile(&self, env: &ExplorerEnv<'_>) -> Option<TileId> {
        self.cursor.effective_tile(env.world().player_tile())
    }

    /// [`move_cursor`](Self::move_cursor) for callers holding the map's raw
    /// rotation value.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidDirection`] for values outside the rotation range,
    /// otherwise as [`move_cursor`](Self::move_cursor).
    pub fn move_rotation(
        &mut self,
        env: &ExplorerEnv<'_>,
        rotation: i32,
    ) -> Result<TileId, MoveError> {
        match Direction::from_rotation(rotation) {
            Some(direction) => self.move_cursor(env, direction),
            None => Err(rejected(MoveError::InvalidDirection(rotation))),
        }
    }

    /// Steps the cursor one tile in `direction` and returns the new tile.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NoAnchor`] if there is neither a cursor nor a player.
    /// - [`MoveError::InvalidTile`] / [`MoveError::EdgeTile`] if the step
    ///   would leave the map or land on its boundary.
    ///
    /// The cursor is unchanged on error.
    pub fn move_cursor(
        &mut self,
        env: &ExplorerEnv<'_>,
        direction: Direction,
    ) -> Result<TileId, MoveError> {
        let current = self
            .effective_tile(env)
            .ok_or_else(|| rejected(MoveError::NoAnchor))?;

        let map = env.map();
        let next = map.tile_in_direction(current, direction, 1);
        let rejection = if !map.is_valid_tile(next) {
            Some(MoveError::InvalidTile { tile: next })
        } else if map.is_edge_tile(next) {
            Some(MoveError::EdgeTile { tile: next })
        } else {
            None
        };
        if let Some(err) = rejection {
            trace!(%current, %direction, "cursor blocked");
            return Err(rejected(err));
        }

        self.cursor.place(next);
        debug!(from = %current, to = %next, %direction, "exploration cursor moved");
        Ok(next)
    }

    /// Builds the tile-contents announcement without speaking it.
    ///
    /// Hidden objects, floor art, and nameless objects are left out. Names are
    /// listed in the object oracle's order; once
    /// [`ExplorerConfig::max_announced_objects`] have been listed the list is
    /// closed with ", and more" and the remaining objects are not inspected.
    pub fn describe_current_tile(&self, env: &ExplorerEnv<'_>) -> Announcement {
        let Some(tile) = self.effective_tile(env) else {
            return Announcement::NoPosition;
        };

        let elevation = env.world().elevation();
        let mut contents = TileContents::new(self.config.max_announced_objects);

        for object in env.objects().objects_at(elevation, tile) {
            if object.is_hidden() || object.kind().is_floor() {
                continue;
            }
            let Some(name) = object.display_name().filter(|name| !name.is_empty()) else {
                continue;
            };

            match contents.push(name) {
                PushOutcome::Appended => {}
                PushOutcome::Skipped => {
                    trace!(%tile, name, "object name does not fit announcement");
                }
                PushOutcome::Truncated => break,
            }
        }

        if contents.is_empty() {
            Announcement::EmptyTile
        } else {
            Announcement::TileContents(contents)
        }
    }

    /// Speaks what is on the effective tile.
    pub fn announce_current_tile<S>(&self, env: &ExplorerEnv<'_>, speech: &mut S) -> Announcement
    where
        S: SpeechSink + ?Sized,
    {
        let announcement = self.describe_current_tile(env);
        speech.speak(announcement.text(), true);
        announcement
    }

    /// Builds the distance/direction announcement without speaking it.
    pub fn describe_distance_from_player(&self, env: &ExplorerEnv<'_>) -> Announcement {
        let Some(player) = env.world().player_tile() else {
            return Announcement::NoPlayerPosition;
        };

        let cursor = match self.cursor.tile() {
            Some(cursor) if cursor != player => cursor,
            _ => return Announcement::AtPlayerPosition,
        };

        let map = env.map();
        let tiles = map.distance_between(player, cursor);
        let rotation = map.rotation_to(player, cursor);
        let direction = Direction::from_rotation(rotation).unwrap_or_else(|| {
            warn!(rotation, %player, %cursor, "map returned out-of-range rotation");
            Direction::NorthEast
        });

        Announcement::distance(tiles, direction)
    }

    /// Speaks how far, and which way, the cursor is from the player.
    pub fn announce_distance_from_player<S>(
        &self,
        env: &ExplorerEnv<'_>,
        speech: &mut S,
    ) -> Announcement
    where
        S: SpeechSink + ?Sized,
    {
        let announcement = self.describe_distance_from_player(env);
        speech.speak(announcement.text(), true);
        announcement
    }
}

fn rejected(err: MoveError) -> MoveError {
    trace!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        error = %err,
        "cursor move rejected"
    );
    err
}
