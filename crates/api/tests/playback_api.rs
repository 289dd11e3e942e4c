//! HTTP-level integration tests for playback actions and the playback log.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post, seed};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Play / stop scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn play_then_stop_walks_the_status_round_trip(pool: SqlitePool) {
    seed(&pool).await;

    // Play: the movie flips to streaming and the response carries the
    // derived stream fields.
    let response = post(common::build_test_app(pool.clone()), "/play/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Now streaming \"Avatar: The Way of Water\"");
    assert_eq!(json["data"]["status"], "streaming");
    assert_eq!(json["data"]["streamStatus"], "active");
    assert!(json["data"]["playbackStarted"].is_string());

    // The new status is visible to an immediately following read.
    let response = get(common::build_test_app(pool.clone()), "/movies/1").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "streaming");

    // Stop: back to available, with the inactive stream fields.
    let response = post(common::build_test_app(pool.clone()), "/stop/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Playback stopped for \"Avatar: The Way of Water\""
    );
    assert_eq!(json["data"]["status"], "available");
    assert_eq!(json["data"]["streamStatus"], "inactive");
    assert!(json["data"]["playbackStopped"].is_string());

    let response = get(common::build_test_app(pool), "/movies/1").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "available");
}

// ---------------------------------------------------------------------------
// Validation on playback routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn play_rejects_malformed_and_unknown_ids(pool: SqlitePool) {
    seed(&pool).await;

    let response = post(common::build_test_app(pool.clone()), "/play/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid movie ID. Must be a positive integer.");

    let response = post(common::build_test_app(pool.clone()), "/play/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Movie with ID 9999 not found.");

    // A rejected action must not write to the log.
    let response = get(common::build_test_app(pool), "/playback-log").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}

// ---------------------------------------------------------------------------
// Playback log
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_play_appends_one_event_per_call(pool: SqlitePool) {
    seed(&pool).await;

    // No guard against replaying: both calls succeed.
    for _ in 0..2 {
        let response = post(common::build_test_app(pool.clone()), "/play/1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(common::build_test_app(pool), "/playback-log").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    for event in json["data"].as_array().unwrap() {
        assert_eq!(event["movieId"], 1);
        assert_eq!(event["movieName"], "Avatar: The Way of Water");
        assert_eq!(event["action"], "play");
        assert_eq!(event["resultingStatus"], "streaming");
        assert!(event["timestamp"].is_string());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn playback_log_lists_newest_first(pool: SqlitePool) {
    seed(&pool).await;

    post(common::build_test_app(pool.clone()), "/play/2").await;
    post(common::build_test_app(pool.clone()), "/play/3").await;
    post(common::build_test_app(pool.clone()), "/stop/2").await;

    let response = get(common::build_test_app(pool), "/playback-log").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 3);

    let events = json["data"].as_array().unwrap();
    assert_eq!(events[0]["action"], "stop");
    assert_eq!(events[0]["movieId"], 2);
    // Stop events log `stopped` even though the movie row is `available`.
    assert_eq!(events[0]["resultingStatus"], "stopped");
    assert_eq!(events[1]["action"], "play");
    assert_eq!(events[1]["movieId"], 3);
    assert_eq!(events[2]["movieId"], 2);
}
