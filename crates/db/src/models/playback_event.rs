//! Playback log entity.

use flicks_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::{PlaybackAction, StreamState};

/// A row from the `playback_log` table.
///
/// Append-only; constructed exclusively by
/// [`crate::repositories::PlaybackLogRepo`]. `movie_name` is a denormalized
/// copy of the movie's name at event time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub id: DbId,
    pub movie_id: DbId,
    pub movie_name: String,
    pub action: PlaybackAction,
    pub timestamp: Timestamp,
    #[sqlx(rename = "status")]
    pub resulting_status: StreamState,
}
