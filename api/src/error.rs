//! The single failure type for calls against the REST backend.

use thiserror::Error;

/// Any failure while talking to the backend.
///
/// The dashboard does not distinguish not-found from unauthorized or server
/// errors: every variant is reported the same way and the view keeps whatever
/// it was showing before.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid request path: {0}")]
    InvalidPath(String),
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("could not decode response: {message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn http(status: u16, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body).trim().to_string();
        let body = if body.is_empty() {
            "<empty>".to_string()
        } else {
            body
        };
        Self::Http { status, body }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_status_and_trimmed_body() {
        let err = ApiError::http(502, b" gateway failed ");
        assert_eq!(err.to_string(), "http 502: gateway failed");

        let empty = ApiError::http(503, b"  ");
        assert_eq!(empty.to_string(), "http 503: <empty>");
    }
}
