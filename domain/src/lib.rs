//! Completion domain for the mock server: how requests are read and what the
//! mock answers with.
//!
//! Nothing here touches the transport. `web` decodes bodies with
//! [`CompletionRequest`] and answers from a shared [`CannedCompletions`];
//! `sse` frames the chunks of a [`ChunkPlan`].

pub mod canned;
pub mod error;
pub mod request;
pub mod response;

pub use canned::{CannedCompletions, ChunkPlan};
pub use request::CompletionRequest;
pub use response::{CompletionChunk, CompletionResponse};
