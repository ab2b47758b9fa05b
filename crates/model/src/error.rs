use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The kind of failure that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The API key is missing or rejected.
    Unauthorized,
    /// The model provider is rate limited.
    RateLimited,
    /// The provider reported a server-side error.
    Server,
    /// The request exceeded its time bound.
    Timeout,
    /// The provider could not be reached.
    Connection,
    /// The response body was not what the protocol promises.
    MalformedResponse,
    /// Any other transport-level error.
    Transport,
    /// Something went wrong that the client could not classify.
    Unexpected,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Unauthorized => "Unauthorized",
            FailureKind::RateLimited => "Rate limited",
            FailureKind::Server => "Server error",
            FailureKind::Timeout => "Timeout",
            FailureKind::Connection => "Connection error",
            FailureKind::MalformedResponse => "Malformed response",
            FailureKind::Transport => "Transport error",
            FailureKind::Unexpected => "Unexpected error",
        };
        f.write_str(s)
    }
}

/// A failed provider call.
///
/// The `reason` is a complete human-readable sentence that can be shown to
/// the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Failure {
    kind: FailureKind,
    reason: String,
}

impl Failure {
    /// Creates a new failure.
    #[inline]
    pub fn new<S: Into<String>>(kind: FailureKind, reason: S) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    /// Returns the kind of this failure.
    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the reason shown to the user.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Replaces the reason, keeping the kind.
    #[inline]
    pub fn with_reason<S: Into<String>>(self, reason: S) -> Self {
        Self {
            kind: self.kind,
            reason: reason.into(),
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl Error for Failure {}
