//! HTTP request data model.
//!
//! A [`Request`] is constructed, dispatched once, and discarded. It carries
//! no identity and no state after dispatch; the client it is handed to is
//! likewise stateless apart from its credential store handle.

use serde::{Deserialize, Serialize};

/// HTTP request method supported by the client.
///
/// The client's surface is deliberately limited to the two methods its
/// contract defines; there is no generic `request(method, ...)` escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// HTTP GET - retrieve a resource, no request body
    Get,
    /// HTTP POST - submit a JSON payload
    Post,
}

impl Method {
    /// Returns the wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dispatchable request.
///
/// `path` is server-relative (e.g. `/v1/today`) and is joined onto the
/// client's base URL at dispatch time. `body` holds pre-serialized JSON
/// text: serialization happens at the call site so a malformed payload
/// fails fast instead of producing a broken request on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET or POST).
    pub method: Method,

    /// Server-relative resource path.
    pub path: String,

    /// Pre-serialized request body; always `None` for GET.
    pub body: Option<String>,
}

impl Request {
    /// Creates a GET request for `path` with no body.
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: None,
        }
    }

    /// Creates a POST request for `path` carrying a serialized `body`.
    pub fn post(path: &str, body: String) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body),
        }
    }

    /// Checks whether the request carries a non-empty body.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().map_or(false, |b| !b.is_empty())
    }
}
