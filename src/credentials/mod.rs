//! Credential storage.
//!
//! The client never owns its bearer token. It reads the current credential
//! from a [`CredentialStore`] on every dispatch, so a token rotated between
//! two requests is picked up by the second one without rebuilding the client.

pub mod memory;

pub use memory::MemoryCredentialStore;

/// Pluggable key-value source of bearer credentials.
///
/// Implementations must be cheap, synchronous lookups: the client calls
/// [`get`](CredentialStore::get) on the dispatch path of every request.
/// An absent credential is a normal answer, not an error; the client sends
/// the request without an `Authorization` header and lets the server's auth
/// check decide.
pub trait CredentialStore: Send + Sync {
    /// Returns the credential stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
}
