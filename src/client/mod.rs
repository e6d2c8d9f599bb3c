//! The authenticated client and its dispatch engine.
//!
//! [`AuthenticatedClient`] issues `GET`/`POST` requests against a base URL,
//! attaching a bearer credential read from the injected
//! [`CredentialStore`](crate::credentials::CredentialStore) at send time.
//! Two entry styles share one dispatch path:
//!
//! - [`dispatch`](AuthenticatedClient::dispatch) is awaitable and returns the
//!   classified [`Outcome`](crate::models::Outcome) (or a [`ClientError`] if
//!   no response completed)
//! - [`get`](AuthenticatedClient::get) / [`post`](AuthenticatedClient::post)
//!   are fire-and-forget: they spawn the exchange on the ambient tokio
//!   runtime and route the outcome to caller-supplied continuations
//!
//! The client never follows redirects. A 3xx must complete as-is so that the
//! "no continuation fires" contract for that status class is observable
//! rather than being papered over by the transport.

pub mod config;
pub mod error;

pub use config::ClientConfig;
pub use error::ClientError;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::auth::bearer_header;
use crate::credentials::CredentialStore;
use crate::models::{Method, Outcome, Request};

/// A single-shot continuation invoked with the response status and raw body.
pub type Continuation = Box<dyn FnOnce(u16, String) + Send + 'static>;

/// HTTP client that authenticates with a bearer credential from a
/// pluggable store.
///
/// The client is stateless apart from its store handle and is cheap to
/// clone; clones share the underlying connection pool and cookie store.
/// Requests are sent in credentialed mode: cookies set by the server are
/// retained and replayed, and the `Authorization` header is attached
/// whenever the store currently holds a token.
#[derive(Clone)]
pub struct AuthenticatedClient {
    base_url: Url,
    store: Arc<dyn CredentialStore>,
    http: reqwest::Client,
    config: ClientConfig,
}

impl AuthenticatedClient {
    /// Creates a client for `base_url` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` does not parse, or
    /// `ClientError::Build` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, store: Arc<dyn CredentialStore>) -> Result<Self, ClientError> {
        Self::with_config(base_url, store, ClientConfig::default())
    }

    /// Creates a client for `base_url` with an explicit configuration.
    pub fn with_config(
        base_url: &str,
        store: Arc<dyn CredentialStore>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url,
            store,
            http,
            config,
        })
    }

    /// Issues a GET request, fire-and-forget.
    ///
    /// Returns immediately; the exchange runs on the ambient tokio runtime
    /// and exactly one continuation is invoked, at most once, when the
    /// response completes:
    ///
    /// - 2xx invokes `on_success(status, body)`
    /// - 4xx/5xx invokes `on_error(status, body)` when supplied, otherwise
    ///   the outcome is dropped
    /// - any other completed status invokes neither
    ///
    /// A transport failure is logged at warn level and invokes neither
    /// continuation. Must be called from within a tokio runtime.
    pub fn get<F>(&self, path: &str, on_success: F, on_error: Option<Continuation>)
    where
        F: FnOnce(u16, String) + Send + 'static,
    {
        self.spawn(Request::get(path), Box::new(on_success), on_error);
    }

    /// Issues a POST request with a JSON payload, fire-and-forget.
    ///
    /// The payload is serialized at call time; a payload that cannot be
    /// represented as JSON fails fast with `ClientError::Serialization` and
    /// nothing is dispatched. Otherwise the continuation contract is the
    /// same as [`get`](AuthenticatedClient::get).
    pub fn post<T, F>(
        &self,
        path: &str,
        payload: &T,
        on_success: F,
        on_error: Option<Continuation>,
    ) -> Result<(), ClientError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(u16, String) + Send + 'static,
    {
        let body = serde_json::to_string(payload)?;
        self.spawn(Request::post(path, body), Box::new(on_success), on_error);
        Ok(())
    }

    /// Dispatches a request and awaits its classified outcome.
    ///
    /// This is the engine under both callback entry points, exposed so
    /// futures-style callers get identical semantics: a completed response
    /// of any status is `Ok(Outcome)`, and only transport-level failures
    /// (plus URL problems) are `Err`.
    ///
    /// The credential is read from the store here, not at construction, so
    /// a token rotated between two dispatches is picked up by the second.
    pub async fn dispatch(&self, request: Request) -> Result<Outcome, ClientError> {
        let url = self.base_url.join(&request.path)?;

        let mut builder = match request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };

        if let Some(token) = self.store.get(&self.config.credential_key) {
            builder = builder.header(AUTHORIZATION, bearer_header(&token));
        }

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, self.config.content_type.as_str())
                .body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Outcome::classify(status, body))
    }

    /// Runs a dispatch on the runtime and routes the outcome to the
    /// continuations.
    fn spawn(&self, request: Request, on_success: Continuation, on_error: Option<Continuation>) {
        let client = self.clone();
        tokio::spawn(async move {
            let descriptor = format!("{} {}", request.method, request.path);
            match client.dispatch(request).await {
                Ok(Outcome::Success { status, body }) => on_success(status, body),
                Ok(Outcome::Failure { status, body }) => {
                    if let Some(callback) = on_error {
                        callback(status, body);
                    } else {
                        log::debug!("{} completed with {} and no error continuation", descriptor, status);
                    }
                }
                Ok(Outcome::Ignored { status }) => {
                    log::debug!("{} completed with unrouted status {}", descriptor, status);
                }
                // The browser original never notified on this path; the log
                // line makes the gap observable without changing delivery.
                Err(err) => log::warn!("{} failed in transport: {}", descriptor, err),
            }
        });
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish()
    }
}
