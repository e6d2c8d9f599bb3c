//! Client error types.
//!
//! These cover everything that prevents a request from completing: payload
//! serialization, URL construction, client build problems, and transport
//! failures. Completed responses are never errors, whatever their status
//! code; those are classified as [`Outcome`](crate::models::Outcome)
//! variants instead.

use std::fmt;

/// Errors that can occur before or instead of a completed response.
#[derive(Debug)]
pub enum ClientError {
    /// The POST payload could not be serialized to JSON.
    ///
    /// Raised at the call site, before anything is dispatched.
    Serialization(String),

    /// The base URL or joined request path could not be parsed.
    InvalidUrl(String),

    /// The underlying HTTP client or request could not be constructed.
    Build(String),

    /// The request timed out before a complete response arrived.
    Timeout,

    /// Transport-level failure: connection refused, DNS resolution error,
    /// or the exchange was interrupted before the response completed.
    Network(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Serialization(msg) => write!(f, "Payload serialization error: {}", msg),
            ClientError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ClientError::Build(msg) => write!(f, "Client build error: {}", msg),
            ClientError::Timeout => write!(f, "Request timed out"),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convert reqwest errors to ClientError.
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_builder() {
            ClientError::Build(err.to_string())
        } else if err.is_connect() {
            ClientError::Network(format!("Connection failed: {}", err))
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Convert URL parsing errors to ClientError.
impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

/// Convert JSON serialization errors to ClientError.
impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let serialization = ClientError::Serialization("key must be a string".to_string());
        assert_eq!(
            format!("{}", serialization),
            "Payload serialization error: key must be a string"
        );

        let timeout = ClientError::Timeout;
        assert_eq!(format!("{}", timeout), "Request timed out");

        let network = ClientError::Network("Connection refused".to_string());
        assert_eq!(format!("{}", network), "Network error: Connection refused");

        let invalid_url = ClientError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(
            format!("{}", invalid_url),
            "Invalid URL: relative URL without a base"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &ClientError::Timeout;
        assert_eq!(format!("{}", err), "Request timed out");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: ClientError = url::ParseError::EmptyHost.into();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let bad = std::collections::BTreeMap::from([(vec![1u8], "x")]);
        let err: ClientError = serde_json::to_string(&bad).unwrap_err().into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
