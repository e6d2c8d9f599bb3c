//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::credentials::CredentialStore;

/// Thread-safe in-memory implementation of [`CredentialStore`].
///
/// Hosts keep a handle to the store and rotate tokens with
/// [`set`](MemoryCredentialStore::set); in-flight and future requests read
/// whatever is current at their own dispatch time. Also the natural fake to
/// inject in tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, token: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), token.to_string());
    }

    /// Removes the credential stored under `key`, if any.
    pub fn clear(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).cloned()
    }
}
