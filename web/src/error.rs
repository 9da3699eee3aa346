use std::error::Error as StdError;
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError};

extern crate log;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The request could not be decoded (only surfaced in strict mode).
    Domain(DomainError),
    /// The listening socket could not be bound.
    Bind { addr: String, source: io::Error },
    /// The accept loop stopped with an I/O error.
    Serve(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::Domain(err) => write!(fmt, "{err}"),
            Error::Bind { addr, source } => write!(fmt, "failed to bind {addr}: {source}"),
            Error::Serve(source) => write!(fmt, "mock server stopped unexpectedly: {source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Bind { source, .. } | Error::Serve(source) => Some(source),
        }
    }
}

// Errors are reported in the same envelope real completion APIs use so that
// client error paths parse them the usual way.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Domain(err) => match err.error_kind {
                DomainErrorKind::Request(_) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": {
                            "message": self.to_string(),
                            "type": "invalid_request_error",
                        }
                    })),
                )
                    .into_response(),
            },
            Error::Bind { .. } | Error::Serve(_) => {
                log::error!("Internal error while serving a request: {self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
            }
        }
    }
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Error::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_request_errors_map_to_bad_request_envelope() {
        let err: Error = DomainError::not_an_object().into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(
            json["error"]["message"],
            "request body must be a JSON object"
        );
    }

    #[test]
    fn test_bind_error_display_names_address() {
        let err = Error::Bind {
            addr: "127.0.0.1:8888".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };

        assert_eq!(
            err.to_string(),
            "failed to bind 127.0.0.1:8888: address in use"
        );
        assert!(err.source().is_some());
    }
}
