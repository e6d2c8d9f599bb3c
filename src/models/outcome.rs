//! Classification of completed responses.

use serde::{Deserialize, Serialize};

/// The outcome of a request that received a complete response.
///
/// Every completed status code maps to exactly one variant, so all three
/// completion states are explicit and testable:
///
/// - 2xx is [`Success`](Outcome::Success), routed to the success continuation
/// - 4xx and 5xx share [`Failure`](Outcome::Failure), routed to the error
///   continuation when one is supplied and dropped otherwise
/// - 3xx and every other completed status is [`Ignored`](Outcome::Ignored):
///   no continuation fires for it
///
/// Client errors and server errors deliberately share a channel; the status
/// code in the variant lets callers split them if they care. Transport
/// failures never produce an `Outcome` at all; see
/// [`ClientError`](crate::client::ClientError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Response completed with a 2xx status.
    Success {
        /// HTTP status code in [200, 299].
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Response completed with a 4xx or 5xx status.
    Failure {
        /// HTTP status code >= 400.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Response completed with a status outside both ranges above,
    /// typically a 3xx the client does not follow.
    Ignored {
        /// The completed status code.
        status: u16,
    },
}

impl Outcome {
    /// Classifies a completed response by its status code.
    ///
    /// The body is discarded for ignored statuses; nothing is allowed to
    /// observe it, matching "no continuation fires".
    pub fn classify(status: u16, body: String) -> Self {
        match status {
            200..=299 => Outcome::Success { status, body },
            400..=u16::MAX => Outcome::Failure { status, body },
            _ => Outcome::Ignored { status },
        }
    }

    /// Returns the status code this outcome was classified from.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Success { status, .. }
            | Outcome::Failure { status, .. }
            | Outcome::Ignored { status } => *status,
        }
    }

    /// Checks whether this outcome would reach a success continuation.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Checks whether this outcome would reach an error continuation.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }
}
