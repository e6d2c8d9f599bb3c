//! Authenticated HTTP client with pluggable credential storage.
//!
//! This crate packages a small, testable client for talking to a JSON API
//! that authenticates with bearer tokens: issue `GET`/`POST` requests against
//! a base endpoint, attach a bearer credential looked up from a
//! [`CredentialStore`](credentials::CredentialStore) at send time, and deliver
//! the outcome to one of two caller-supplied continuations chosen by HTTP
//! status class.
//!
//! # Architecture
//!
//! The crate is organized into a few focused modules:
//!
//! - **credentials**: the [`CredentialStore`](credentials::CredentialStore)
//!   seam plus an in-memory implementation supporting token rotation
//! - **auth**: bearer `Authorization` header formatting and parsing
//! - **models**: the request shape and the [`Outcome`](models::Outcome)
//!   classification of completed responses
//! - **client**: the [`AuthenticatedClient`](client::AuthenticatedClient)
//!   dispatch engine with callback-style and awaitable entry points
//!
//! # Outcome routing
//!
//! A completed response is classified by status class and routed accordingly:
//!
//! - 2xx invokes the success continuation with the status and raw body
//! - 4xx and 5xx invoke the error continuation, if one was supplied;
//!   without one the outcome is dropped (a deliberate policy, not a bug)
//! - 3xx (the client never follows redirects) and any other completed status
//!   invoke neither continuation
//!
//! Exactly one continuation is invoked, at most once, per request. Transport
//! failures never reach the continuations: the awaitable entry point returns
//! them as [`ClientError`](client::ClientError), and the fire-and-forget
//! entry points log them at warn level.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use bearer_client::{AuthenticatedClient, ClientConfig, MemoryCredentialStore};
//!
//! # fn example() -> Result<(), bearer_client::ClientError> {
//! let store = Arc::new(MemoryCredentialStore::new());
//! store.set("habitz-token", "abc123");
//!
//! let config = ClientConfig::new("habitz-token");
//! let client = AuthenticatedClient::with_config("https://habitz.example", store, config)?;
//!
//! client.get(
//!     "/v1/today",
//!     |status, body| println!("RESPONSE [{}]: {}", status, body),
//!     None,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Callback-style calls return before the network exchange completes and the
//! continuation runs later on the ambient tokio runtime. No ordering is
//! guaranteed between two concurrently issued requests' continuations; they
//! fire in completion order.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod models;

pub use client::{AuthenticatedClient, ClientConfig, ClientError, Continuation};
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use models::{Method, Outcome, Request};
