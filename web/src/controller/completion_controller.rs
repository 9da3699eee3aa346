use crate::error::Error;
use crate::{sse, AppState};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::CompletionRequest;
use log::*;

/// POST a chat completion (any path)
///
/// Answers with a single JSON completion, or with an event stream of delta
/// chunks when the body asks for `"stream": true`. Bodies that cannot be
/// decoded are served as if they were `{}` unless strict mode is on.
pub async fn create(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Response, Error> {
    let config = app_state.config();
    let request = if config.strict {
        CompletionRequest::decode(&body)?
    } else {
        CompletionRequest::decode_or_default(&body)
    };

    if config.verbose {
        debug!(
            "Completion request ({} bytes), stream: {}",
            body.len(),
            request.stream
        );
    }

    if request.stream {
        Ok(sse::handler::stream_completion(&app_state).into_response())
    } else {
        Ok(Json(app_state.completions.response()).into_response())
    }
}
