use crate::error::Error;
use serde_json::Value;

/// The only part of an inbound completion request the mock looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    pub stream: bool,
}

impl CompletionRequest {
    /// Decodes a request body, failing when it is not a JSON object.
    ///
    /// A missing `stream` field, or one that cannot be read as a boolean,
    /// decodes as `stream = false`.
    pub fn decode(body: &[u8]) -> Result<Self, Error> {
        let value: Value = serde_json::from_slice(body)?;
        let fields = value.as_object().ok_or_else(Error::not_an_object)?;

        Ok(Self {
            stream: fields.get("stream").is_some_and(coerce_bool),
        })
    }

    /// Decodes a request body, treating anything unusable as an empty request.
    pub fn decode_or_default(body: &[u8]) -> Self {
        Self::decode(body).unwrap_or_default()
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => text.eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, RequestErrorKind};

    #[test]
    fn test_decode_stream_true() {
        let request = CompletionRequest::decode(br#"{"stream": true}"#).unwrap();
        assert!(request.stream);
    }

    #[test]
    fn test_decode_stream_false_and_absent() {
        assert!(!CompletionRequest::decode(br#"{"stream": false}"#).unwrap().stream);
        assert!(
            !CompletionRequest::decode(br#"{"model": "gpt-4o", "messages": []}"#)
                .unwrap()
                .stream
        );
    }

    #[test]
    fn test_decode_coerces_numbers_and_strings() {
        assert!(CompletionRequest::decode(br#"{"stream": 1}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": 0}"#).unwrap().stream);
        assert!(CompletionRequest::decode(br#"{"stream": "TRUE"}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": "false"}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": "yes"}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": "yes please"}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": null}"#).unwrap().stream);
        assert!(!CompletionRequest::decode(br#"{"stream": [true]}"#).unwrap().stream);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = CompletionRequest::decode(b"not-json").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Request(RequestErrorKind::InvalidJson)
        );
    }

    #[test]
    fn test_decode_rejects_empty_body() {
        let err = CompletionRequest::decode(b"").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Request(RequestErrorKind::InvalidJson)
        );
    }

    #[test]
    fn test_decode_rejects_non_object_json() {
        let err = CompletionRequest::decode(b"[true]").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Request(RequestErrorKind::NotAnObject)
        );
    }

    #[test]
    fn test_decode_or_default_recovers_from_bad_bodies() {
        let bodies: [&[u8]; 5] = [b"not-json", b"", b"42", br#""stream""#, b"{\"stream\": tru"];
        for body in bodies {
            assert_eq!(
                CompletionRequest::decode_or_default(body),
                CompletionRequest { stream: false }
            );
        }
    }
}
