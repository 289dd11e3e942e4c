//! HTTP request handlers.

pub mod health;
pub mod movies;
pub mod playback;

use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use flicks_core::types::DbId;
use serde_json::json;

use crate::error::AppError;

/// Parse a raw path segment into a positive movie id.
///
/// Ids are extracted as strings so malformed values produce the API's own
/// 400 envelope rather than Axum's default rejection.
pub(crate) fn parse_movie_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            AppError::BadRequest("Invalid movie ID. Must be a positive integer.".to_string())
        })
}

/// Fallback for unmatched routes: 404 naming the method and path.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("Route {method} {uri} not found."),
        })),
    )
}
