pub mod health;
pub mod movies;
pub mod playback;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree. Mounted both at the root and under `/api`.
///
/// ```text
/// /movies                GET   full catalog
/// /movies/search?q=      GET   substring search
/// /movies/{id}           GET   single movie
/// /play/{id}             POST  start playback
/// /stop/{id}             POST  stop playback
/// /playback-log          GET   recent events, newest first
/// /health                GET   liveness + uptime
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(movies::router())
        .merge(playback::router())
}
