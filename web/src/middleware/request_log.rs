use axum::{extract::Request, middleware::Next, response::Response};
use log::*;
use std::time::Instant;

/// Logs one line per request once the response head is ready.
///
/// Only attached to the router when the server runs in verbose mode.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{method} {uri} -> {} in {:?}",
        response.status(),
        started.elapsed()
    );
    response
}
