pub mod http;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::NewsArticle;

/// Failure taxonomy for the remote layer. The HTTP wrapper is the only place
/// raw transport and decoding failures are translated into these variants;
/// nothing else crosses the remote boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Transport produced no response at all (DNS, connect, timeout).
    #[error("Network connection failed")]
    Connection,

    /// The server responded with a 5xx status code.
    #[error("Server error")]
    Server,

    /// The response body could not be decoded into the expected envelope.
    #[error("Failed to parse server response")]
    Parse,

    /// The envelope was well-formed but its status was not "success".
    /// Carries the server-supplied message, if any.
    #[error("{}", .0.as_deref().unwrap_or(""))]
    Status(Option<String>),
}

/// Wire-level wrapper around every endpoint payload. Unknown fields are
/// ignored so new server-side keys never break decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

impl<T> StatusEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Decode a response body into the news payload, applying the envelope's
/// success/failure semantics.
pub fn decode_news(body: &str) -> Result<Vec<NewsArticle>, RemoteError> {
    let envelope: StatusEnvelope<Vec<NewsArticle>> =
        serde_json::from_str(body).map_err(|_| RemoteError::Parse)?;

    if envelope.is_success() {
        Ok(envelope.data)
    } else {
        Err(RemoteError::Status(envelope.message))
    }
}

/// Abstraction over the remote news source. One operation, one attempt per
/// call; retry is always caller-initiated.
#[async_trait]
pub trait RemoteSource {
    async fn fetch_news(&self) -> Result<Vec<NewsArticle>, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{
            "status": "success",
            "data": [
                {
                    "id": 1,
                    "title": "First",
                    "description": "d",
                    "author": "a",
                    "isLocal": false,
                    "publishedAtUnix": 1748107452000,
                    "media": null
                }
            ]
        }"#;
        let articles = decode_news(body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "First");
    }

    #[test]
    fn test_decode_failure_envelope_carries_message() {
        let body = r#"{ "status": "error", "message": "Server Message", "data": [] }"#;
        let err = decode_news(body).unwrap_err();
        assert_eq!(err, RemoteError::Status(Some("Server Message".into())));
        assert_eq!(err.to_string(), "Server Message");
    }

    #[test]
    fn test_decode_failure_envelope_without_message() {
        let body = r#"{ "status": "error", "data": [] }"#;
        let err = decode_news(body).unwrap_err();
        assert_eq!(err, RemoteError::Status(None));
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_decode_malformed_body_is_parse_error() {
        assert_eq!(decode_news("not json").unwrap_err(), RemoteError::Parse);
        assert_eq!(decode_news(r#"{"data": []}"#).unwrap_err(), RemoteError::Parse);
    }

    #[test]
    fn test_decode_tolerates_unknown_envelope_fields() {
        let body = r#"{
            "status": "success",
            "data": [],
            "version": 3,
            "extra": { "anything": true }
        }"#;
        assert_eq!(decode_news(body).unwrap(), vec![]);
    }
}
