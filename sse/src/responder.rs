use crate::message::Frame;
use async_stream::stream;
use domain::ChunkPlan;
use futures::Stream;
use log::*;
use std::sync::Arc;
use std::time::Duration;

/// Where a completion stream is in its lifecycle.
///
/// `HeaderSent` is the state once the response head is on the wire and no
/// body bytes have been written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    HeaderSent,
    Emitting(usize),
    Done,
}

/// Drives one streamed completion: every chunk of the plan in order, paced
/// by `chunk_delay`, then the `[DONE]` sentinel.
#[derive(Debug, Clone)]
pub struct StreamResponder {
    plan: Arc<ChunkPlan>,
    chunk_delay: Duration,
    verbose: bool,
}

impl StreamResponder {
    pub fn new(plan: Arc<ChunkPlan>, chunk_delay: Duration) -> Self {
        Self {
            plan,
            chunk_delay,
            verbose: false,
        }
    }

    /// Per-chunk diagnostics are only logged when verbose.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn next_state(&self, state: StreamState) -> StreamState {
        match state {
            StreamState::HeaderSent if self.plan.is_empty() => StreamState::Done,
            StreamState::HeaderSent => StreamState::Emitting(0),
            StreamState::Emitting(index) if index + 1 < self.plan.len() => {
                StreamState::Emitting(index + 1)
            }
            StreamState::Emitting(_) | StreamState::Done => StreamState::Done,
        }
    }

    /// The frames of the response body, in emission order.
    ///
    /// The delay follows every chunk, the last one included, and is a tokio
    /// timer so other connections keep being served meanwhile. Dropping the
    /// stream (the client went away) stops it at the next frame boundary.
    pub fn frames(self) -> impl Stream<Item = Frame> {
        stream! {
            let mut state = self.next_state(StreamState::HeaderSent);

            while let StreamState::Emitting(index) = state {
                if let Some(chunk) = self.plan.chunk(index) {
                    if self.verbose {
                        trace!(
                            "Emitting chunk {}/{} (last: {})",
                            index + 1,
                            self.plan.len(),
                            self.plan.is_last(index)
                        );
                    }
                    yield Frame::Chunk(chunk);
                }

                tokio::time::sleep(self.chunk_delay).await;
                state = self.next_state(state);
            }

            yield Frame::Done;
        }
    }
}
