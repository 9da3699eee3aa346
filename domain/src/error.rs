//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
///
/// As in the other layers, the error is a `source` plus an `error_kind` tree.
/// `web` maps the kinds onto HTTP responses without depending on serde_json
/// error details.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Request(RequestErrorKind),
}

/// Ways an inbound completion request body can be unusable.
#[derive(Debug, PartialEq)]
pub enum RequestErrorKind {
    /// The body is not valid JSON (this includes an empty body).
    InvalidJson,
    /// The body is valid JSON but not an object.
    NotAnObject,
}

impl Error {
    pub fn not_an_object() -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Request(RequestErrorKind::NotAnObject),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            DomainErrorKind::Request(RequestErrorKind::InvalidJson) => match &self.source {
                Some(source) => write!(f, "request body is not valid JSON: {source}"),
                None => write!(f, "request body is not valid JSON"),
            },
            DomainErrorKind::Request(RequestErrorKind::NotAnObject) => {
                write!(f, "request body must be a JSON object")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Request(RequestErrorKind::InvalidJson),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_translates_to_invalid_json_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err: Error = json_err.into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Request(RequestErrorKind::InvalidJson)
        );
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("request body is not valid JSON"));
    }

    #[test]
    fn test_not_an_object_has_no_source() {
        let err = Error::not_an_object();

        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "request body must be a JSON object");
    }
}
