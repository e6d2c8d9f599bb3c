//! Bearer authentication helpers.
//!
//! Formatting and parsing of `Authorization` header values in the RFC 6750
//! bearer scheme. The client only ever formats; parsing exists for hosts
//! that need to inspect headers they receive or replay.

pub mod bearer;

pub use bearer::{bearer_header, parse_bearer_header};
