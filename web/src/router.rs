use crate::{controller::completion_controller, middleware::request_log::log_request, AppState};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::post,
    Router,
};

/// The mock serves a single endpoint: POST on any path. Other methods get 405
/// from the method router.
pub fn define_routes(app_state: AppState) -> Router {
    let verbose = app_state.config().verbose;

    let router = Router::new()
        .route("/", post(completion_controller::create))
        .route("/{*path}", post(completion_controller::create))
        // Test doubles accept bodies of any size
        .layer(DefaultBodyLimit::disable())
        .with_state(app_state);

    if verbose {
        router.layer(from_fn(log_request))
    } else {
        router
    }
}
