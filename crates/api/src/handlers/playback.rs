//! Handlers for playback actions and the playback log.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use flicks_core::error::CoreError;
use flicks_core::types::Timestamp;
use flicks_db::models::{Movie, PlaybackAction};
use flicks_db::repositories::PlaybackLogRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_movie_id;
use crate::response::Envelope;
use crate::state::AppState;

/// Number of entries returned by `GET /playback-log`.
const PLAYBACK_LOG_LIMIT: i64 = 50;

/// Movie payload extended with the stream state resulting from a playback
/// action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackReceipt {
    #[serde(flatten)]
    pub movie: Movie,
    pub stream_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_started: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_stopped: Option<Timestamp>,
}

/// POST /play/{id}
///
/// Log a play event and flip the movie to `streaming`. Playing an
/// already-streaming movie succeeds and logs again.
pub async fn play_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let (movie, timestamp) = PlaybackLogRepo::record(&state.pool, id, PlaybackAction::Play)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    tracing::info!(movie_id = movie.id, name = %movie.name, "Playback started");

    let message = format!("Now streaming \"{}\"", movie.name);
    let receipt = PlaybackReceipt {
        movie,
        stream_status: "active",
        playback_started: Some(timestamp),
        playback_stopped: None,
    };

    Ok(Json(Envelope::with_message(message, receipt)))
}

/// POST /stop/{id}
///
/// Log a stop event and return the movie to `available`. Stopping an
/// already-available movie succeeds and logs again.
pub async fn stop_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let (movie, timestamp) = PlaybackLogRepo::record(&state.pool, id, PlaybackAction::Stop)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    tracing::info!(movie_id = movie.id, name = %movie.name, "Playback stopped");

    let message = format!("Playback stopped for \"{}\"", movie.name);
    let receipt = PlaybackReceipt {
        movie,
        stream_status: "inactive",
        playback_started: None,
        playback_stopped: Some(timestamp),
    };

    Ok(Json(Envelope::with_message(message, receipt)))
}

/// GET /playback-log
///
/// The most recent playback events, newest first.
pub async fn playback_log(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = PlaybackLogRepo::list_recent(&state.pool, PLAYBACK_LOG_LIMIT).await?;
    Ok(Json(Envelope::list(events)))
}
