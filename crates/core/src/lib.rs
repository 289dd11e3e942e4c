//! Shared domain primitives for the flicks catalog service.
//!
//! This crate holds the types and error taxonomy used by both the store
//! (`flicks-db`) and the HTTP layer (`flicks-api`). It performs no I/O.

pub mod error;
pub mod types;
