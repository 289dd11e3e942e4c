//! Entity models for the catalog store.
//!
//! Each struct is a `FromRow` + `Serialize` view of a database row. Field
//! names serialize in camelCase to match the HTTP API contract.

pub mod movie;
pub mod playback_event;
pub mod status;

pub use movie::Movie;
pub use playback_event::PlaybackEvent;
pub use status::{MovieStatus, PlaybackAction, StreamState};
