//! Handlers for catalog browsing and search.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use flicks_core::error::CoreError;
use flicks_db::repositories::MovieRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_movie_id;
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for `GET /movies/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /movies
///
/// The full catalog in seed order.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list_all(&state.pool).await?;
    Ok(Json(Envelope::list(movies)))
}

/// GET /movies/search?q=<term>
///
/// Case-insensitive substring search across name, genre, and description.
/// A missing or blank `q` returns an empty result, not the full catalog --
/// no query typed means nothing to show.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = params.q.as_deref().unwrap_or("").trim();

    let movies = if term.is_empty() {
        Vec::new()
    } else {
        MovieRepo::search(&state.pool, term).await?
    };

    Ok(Json(Envelope::list(movies)))
}

/// GET /movies/{id}
///
/// A single movie by id. 400 for a malformed id, 404 for an unknown one.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    Ok(Json(Envelope::new(movie)))
}
