//! Server-Sent Events framing for streamed chat completions.
//!
//! A streamed completion is a sequence of `data:` records, one per content
//! fragment, followed by the literal `data: [DONE]` record that real
//! completion APIs use to end a stream.
//!
//! # Wire format
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"This "}}]}
//!
//! data: {"choices":[{"delta":{"content":"is "}}]}
//!
//! ...
//!
//! data: [DONE]
//!
//! ```
//!
//! # Modules
//!
//! - `message`: the [`Frame`] type and its exact wire encoding
//! - `responder`: the [`StreamResponder`] state machine that paces frames

pub mod message;
pub mod responder;

pub use message::{Frame, DONE_SENTINEL};
pub use responder::{StreamResponder, StreamState};
