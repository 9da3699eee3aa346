//! SSE HTTP handler for the web layer.
//!
//! Framing and pacing live in the `sse` crate; this module only turns its
//! frames into an axum response.

pub mod handler;
