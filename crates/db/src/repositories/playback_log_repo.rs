//! Repository for the `playback_log` table and the play/stop transitions.

use chrono::Utc;
use flicks_core::types::{DbId, Timestamp};

use crate::models::{Movie, PlaybackAction, PlaybackEvent};
use crate::repositories::movie_repo::MOVIE_COLUMNS;
use crate::DbPool;

/// Column list for `playback_log` queries.
const EVENT_COLUMNS: &str = "id, movie_id, movie_name, action, timestamp, status";

/// Append operations on the playback log plus the status transitions they
/// drive.
pub struct PlaybackLogRepo;

impl PlaybackLogRepo {
    /// Record a play or stop action against a movie.
    ///
    /// Runs as a single transaction: the log row is inserted and the
    /// movie's status updated together, so a reader can never observe a
    /// status that disagrees with the newest log entry. Returns `None`
    /// when no movie has the given id (nothing is written).
    ///
    /// Replaying an action is permitted: the same status is re-asserted
    /// and a fresh log row is appended.
    pub async fn record(
        pool: &DbPool,
        movie_id: DbId,
        action: PlaybackAction,
    ) -> Result<Option<(Movie, Timestamp)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let find_query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1");
        let Some(movie) = sqlx::query_as::<_, Movie>(&find_query)
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let timestamp = Utc::now();

        sqlx::query(
            "INSERT INTO playback_log (movie_id, movie_name, action, timestamp, status) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(movie.id)
        .bind(&movie.name)
        .bind(action)
        .bind(timestamp)
        .bind(action.stream_state())
        .execute(&mut *tx)
        .await?;

        let update_query =
            format!("UPDATE movies SET status = ?2 WHERE id = ?1 RETURNING {MOVIE_COLUMNS}");
        let updated = sqlx::query_as::<_, Movie>(&update_query)
            .bind(movie_id)
            .bind(action.movie_status())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some((updated, timestamp)))
    }

    /// List recent events, newest first, capped at `limit`.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<PlaybackEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM playback_log ORDER BY id DESC LIMIT ?1");
        sqlx::query_as::<_, PlaybackEvent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
