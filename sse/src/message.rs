use axum::response::sse::Event;
use domain::CompletionChunk;

/// Payload of the frame that ends every completion stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One record of a streamed completion, before it is written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Chunk(CompletionChunk),
    Done,
}

impl Frame {
    /// The text carried on the frame's `data:` line.
    pub fn data(&self) -> Result<String, serde_json::Error> {
        match self {
            Frame::Chunk(chunk) => serde_json::to_string(chunk),
            Frame::Done => Ok(DONE_SENTINEL.to_string()),
        }
    }

    /// The exact bytes a client reads for this frame: `data: <payload>\n\n`.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        Ok(format!("data: {}\n\n", self.data()?))
    }

    /// Only a `data` field is set, so axum writes the same bytes as [`Frame::encode`].
    pub fn into_event(self) -> Result<Event, serde_json::Error> {
        Ok(Event::default().data(self.data()?))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Frame::Done)
    }
}
