//! Shared response envelope for API handlers.
//!
//! Every success response is wrapped in `{ "success": true, ... }`, with
//! `count` present on list endpoints and `message` on playback actions.
//! Use [`Envelope`] instead of ad-hoc `serde_json::json!` so the shape
//! stays consistent across handlers. Error responses are produced by
//! [`crate::error::AppError`].

use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a single payload.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: None,
            data,
        }
    }

    /// Wrap a payload with a human-readable message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: Some(message.into()),
            data,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Wrap a list payload, setting `count` to its length.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            message: None,
            data,
        }
    }
}
