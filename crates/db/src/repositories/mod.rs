//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&DbPool` as the first argument. Missing rows are modeled as
//! `Option`, not errors.

pub mod movie_repo;
pub mod playback_log_repo;

pub use movie_repo::MovieRepo;
pub use playback_log_repo::PlaybackLogRepo;
