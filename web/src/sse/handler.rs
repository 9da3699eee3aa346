use crate::AppState;
use async_stream::stream;
use axum::response::sse::{Event, Sse};
use futures::{pin_mut, Stream, StreamExt};
use log::*;
use ::sse::StreamResponder;
use std::convert::Infallible;

/// Streams the canned completion as `data:` frames, one per word, ending with
/// `data: [DONE]`.
///
/// axum sends the `text/event-stream` and `no-cache` headers before the first
/// frame, and writes each frame as its own body chunk. No keep-alive comments
/// are injected. When the client disconnects hyper drops this stream, which
/// is the whole of the mid-stream failure handling.
pub(crate) fn stream_completion(
    app_state: &AppState,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let verbose = app_state.config().verbose;
    let responder = StreamResponder::new(
        app_state.completions.stream_plan(),
        app_state.config().chunk_delay(),
    )
    .with_verbose(verbose);

    let stream = stream! {
        let frames = responder.frames();
        pin_mut!(frames);

        while let Some(frame) = frames.next().await {
            if verbose && frame.is_done() {
                debug!("Completion stream finished");
            }

            match frame.into_event() {
                Ok(event) => yield Ok::<Event, Infallible>(event),
                Err(e) => {
                    error!("Failed to serialize completion frame: {e}");
                    break;
                }
            }
        }
    };

    Sse::new(stream)
}
