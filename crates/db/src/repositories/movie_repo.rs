//! Repository for the `movies` table.

use flicks_core::types::DbId;

use crate::models::Movie;
use crate::DbPool;

/// Column list for `movies` queries. `match` is quoted because it is an
/// SQL keyword.
pub(crate) const MOVIE_COLUMNS: &str =
    "id, name, genre, year, rating, duration, description, logo, streamUrl, status, \"match\"";

/// Read operations over the movie catalog.
pub struct MovieRepo;

impl MovieRepo {
    /// List the full catalog in seed order (ascending id).
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search across name, genre, and
    /// description, in catalog order among matches.
    ///
    /// The caller is expected to have rejected blank terms already; a blank
    /// term here would match the entire catalog.
    pub async fn search(pool: &DbPool, term: &str) -> Result<Vec<Movie>, sqlx::Error> {
        let pattern = format!("%{}%", term.trim());
        let query = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies \
             WHERE name LIKE ?1 OR genre LIKE ?1 OR description LIKE ?1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Number of movies in the catalog.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }
}
