//! Route definitions for catalog browsing and search.
//!
//! ```text
//! GET /movies              list_movies
//! GET /movies/search       search_movies (?q=<term>)
//! GET /movies/{id}         get_movie
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies))
        .route("/movies/search", get(movies::search_movies))
        .route("/movies/{id}", get(movies::get_movie))
}
