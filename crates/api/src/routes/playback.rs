//! Route definitions for playback actions and history.
//!
//! ```text
//! POST /play/{id}          play_movie
//! POST /stop/{id}          stop_movie
//! GET  /playback-log       playback_log
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::playback;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/play/{id}", post(playback::play_movie))
        .route("/stop/{id}", post(playback::stop_movie))
        .route("/playback-log", get(playback::playback_log))
}
