//! Store-level tests: seeding, catalog queries, and playback transitions.

use flicks_db::models::{MovieStatus, PlaybackAction, StreamState};
use flicks_db::repositories::{MovieRepo, PlaybackLogRepo};
use flicks_db::seed::seed_if_empty;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn seed_populates_empty_catalog(pool: SqlitePool) {
    let seeded = seed_if_empty(&pool).await.unwrap();
    assert!(seeded);

    let movies = MovieRepo::list_all(&pool).await.unwrap();
    assert_eq!(movies.len(), 37);

    // Catalog order is ascending id, starting at 1.
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].name, "Avatar: The Way of Water");
    assert_eq!(movies[0].status, MovieStatus::Available);
    assert!(movies.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "./migrations")]
async fn seed_runs_only_against_an_empty_table(pool: SqlitePool) {
    assert!(seed_if_empty(&pool).await.unwrap());
    assert!(!seed_if_empty(&pool).await.unwrap());

    assert_eq!(MovieRepo::count(&pool).await.unwrap(), 37);
}

// ---------------------------------------------------------------------------
// Catalog queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_returns_the_seeded_row(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let movie = MovieRepo::find_by_id(&pool, 9).await.unwrap().unwrap();
    assert_eq!(movie.name, "Sherlock");
    assert_eq!(movie.genre, "Mystery");
    assert_eq!(movie.match_score, 98);

    assert!(MovieRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn search_matches_genre_case_insensitively(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let movies = MovieRepo::search(&pool, "sci-fi").await.unwrap();
    assert_eq!(movies.len(), 7);
    assert!(movies.iter().all(|m| m.genre == "Sci-Fi"));
}

#[sqlx::test(migrations = "./migrations")]
async fn search_matches_name_and_description_substrings(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    // "AVATAR" matches two names despite the casing.
    let movies = MovieRepo::search(&pool, "AVATAR").await.unwrap();
    let ids: Vec<_> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 35]);

    // "dinosaurs" only appears in a description.
    let movies = MovieRepo::search(&pool, "dinosaurs").await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].name, "Jurassic Park");
}

// ---------------------------------------------------------------------------
// Playback transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn record_play_updates_status_and_appends_one_event(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let (movie, _) = PlaybackLogRepo::record(&pool, 1, PlaybackAction::Play)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.status, MovieStatus::Streaming);

    // The new status is visible to an immediately following read.
    let reread = MovieRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(reread.status, MovieStatus::Streaming);

    let events = PlaybackLogRepo::list_recent(&pool, 50).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].movie_id, 1);
    assert_eq!(events[0].movie_name, "Avatar: The Way of Water");
    assert_eq!(events[0].action, PlaybackAction::Play);
    assert_eq!(events[0].resulting_status, StreamState::Streaming);
}

#[sqlx::test(migrations = "./migrations")]
async fn record_against_unknown_movie_writes_nothing(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let result = PlaybackLogRepo::record(&pool, 9999, PlaybackAction::Play)
        .await
        .unwrap();
    assert!(result.is_none());

    let events = PlaybackLogRepo::list_recent(&pool, 50).await.unwrap();
    assert!(events.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn replayed_actions_append_without_a_transition_guard(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    // Double play, then a stop: every call succeeds and logs.
    PlaybackLogRepo::record(&pool, 2, PlaybackAction::Play)
        .await
        .unwrap()
        .unwrap();
    PlaybackLogRepo::record(&pool, 2, PlaybackAction::Play)
        .await
        .unwrap()
        .unwrap();
    let (movie, _) = PlaybackLogRepo::record(&pool, 2, PlaybackAction::Stop)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.status, MovieStatus::Available);

    let events = PlaybackLogRepo::list_recent(&pool, 50).await.unwrap();
    let actions: Vec<_> = events.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            PlaybackAction::Stop,
            PlaybackAction::Play,
            PlaybackAction::Play
        ]
    );
    // Stop events log `stopped` even though the movie row is `available`.
    assert_eq!(events[0].resulting_status, StreamState::Stopped);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_recent_caps_at_limit_newest_first(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    for movie_id in 1..=5 {
        PlaybackLogRepo::record(&pool, movie_id, PlaybackAction::Play)
            .await
            .unwrap()
            .unwrap();
    }

    let events = PlaybackLogRepo::list_recent(&pool, 3).await.unwrap();
    assert_eq!(events.len(), 3);
    let movie_ids: Vec<_> = events.iter().map(|e| e.movie_id).collect();
    assert_eq!(movie_ids, vec![5, 4, 3]);
}
