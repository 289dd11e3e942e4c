//! Closed status and action enums, stored as lowercase TEXT.

use serde::{Deserialize, Serialize};

/// Playback state of a catalog entry. A movie is in exactly one state;
/// play/stop transitions simply assert the target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MovieStatus {
    Available,
    Streaming,
}

/// The two operations recorded in the playback log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PlaybackAction {
    Play,
    Stop,
}

/// Stream state recorded on a log row. Note the asymmetry with
/// [`MovieStatus`]: a stop event logs `stopped` while the movie row itself
/// returns to `available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum StreamState {
    Streaming,
    Stopped,
}

impl PlaybackAction {
    /// The movie status this action asserts.
    pub fn movie_status(self) -> MovieStatus {
        match self {
            PlaybackAction::Play => MovieStatus::Streaming,
            PlaybackAction::Stop => MovieStatus::Available,
        }
    }

    /// The stream state written to the log row for this action.
    pub fn stream_state(self) -> StreamState {
        match self {
            PlaybackAction::Play => StreamState::Streaming,
            PlaybackAction::Stop => StreamState::Stopped,
        }
    }
}
