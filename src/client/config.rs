//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`AuthenticatedClient`](crate::AuthenticatedClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Key under which the bearer token is looked up in the credential
    /// store on every dispatch. Defaults to `"token"`.
    pub credential_key: String,

    /// `Content-Type` header value sent with POST bodies.
    ///
    /// Defaults to `application/json;charset=UTF-8`; bodies are serialized
    /// as UTF-8 JSON text regardless, so only override this if the server
    /// insists on a different spelling of the same thing.
    pub content_type: String,

    /// Request timeout in seconds.
    ///
    /// Maximum time to wait for a complete response. Defaults to 30 seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Creates a configuration looking up credentials under `credential_key`,
    /// with defaults for everything else.
    pub fn new(credential_key: &str) -> Self {
        Self {
            credential_key: credential_key.to_string(),
            ..Self::default()
        }
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credential_key: "token".to_string(),
            content_type: "application/json;charset=UTF-8".to_string(),
            timeout_secs: 30,
        }
    }
}
