//! Movie catalog entity.

use flicks_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::MovieStatus;

/// A row from the `movies` table.
///
/// Everything except `status` is immutable after seeding. `match_score` is
/// the display-only recommendation percentage (0-100).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub year: i64,
    pub rating: String,
    pub duration: String,
    pub description: String,
    #[sqlx(rename = "logo")]
    pub logo_url: String,
    #[sqlx(rename = "streamUrl")]
    pub stream_url: String,
    pub status: MovieStatus,
    #[sqlx(rename = "match")]
    pub match_score: i64,
}
