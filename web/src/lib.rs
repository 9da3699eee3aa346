//! HTTP layer of the mock completion server.
//!
//! One endpoint (POST, any path) answers like a chat completion API: a JSON
//! document by default, or an SSE stream of delta chunks when the request
//! body carries `"stream": true`.

use domain::CannedCompletions;
use service::config::Config;
use std::sync::Arc;

mod controller;
pub mod error;
mod middleware;
pub mod router;
mod server;
mod sse;

pub use error::{Error, Result};
pub use server::{init_server, MockServer};

// Everything a request handler needs. Read-only and shared by all connections.
#[derive(Clone)]
pub struct AppState {
    pub service_state: service::AppState,
    pub completions: Arc<CannedCompletions>,
}

impl AppState {
    pub fn new(service_state: service::AppState) -> Self {
        let completions = Arc::new(CannedCompletions::from_config(&service_state.config));
        Self {
            service_state,
            completions,
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(service::AppState::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.service_state.config
    }
}
