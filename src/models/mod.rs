//! Request and outcome data models.

pub mod outcome;
pub mod request;

pub use outcome::Outcome;
pub use request::{Method, Request};
