use std::time::Duration;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The attempt did not settle within the per-attempt timeout.
    #[error("attempt timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    /// Connection, DNS or body-read failure reported by the transport.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// 5xx response from the API.
    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },
    /// 4xx response other than 404.
    #[error("client error {status}: {body}")]
    ClientError { status: u16, body: String },
    /// Any status outside the 2xx/4xx/5xx ranges.
    #[error("API error: {status}")]
    UnknownStatus { status: u16, body: String },
    /// Successful response whose body is not a valid user profile.
    #[error("decode error: {0}")]
    Decode(String),
    /// Invalid base URL or missing credentials.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse category of a [`LookupError`], carrying the status code when one exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Network,
    ServerError(u16),
    ClientError(u16),
    UnknownStatus(u16),
    Decode,
    Config,
}

impl LookupError {
    /// Wraps a transport-level failure as [`LookupError::Network`].
    pub fn network(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Network(err.into())
    }

    /// Category of the error, used for retry classification.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout(_) => FailureKind::Timeout,
            Self::Network(_) => FailureKind::Network,
            Self::ServerError { status, .. } => FailureKind::ServerError(*status),
            Self::ClientError { status, .. } => FailureKind::ClientError(*status),
            Self::UnknownStatus { status, .. } => FailureKind::UnknownStatus(*status),
            Self::Decode(_) => FailureKind::Decode,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. }
            | Self::ClientError { status, .. }
            | Self::UnknownStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Raised by [`with_timeout`](crate::with_timeout) when the timer wins the race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation did not settle within {} ms", .after.as_millis())]
pub struct AttemptTimedOut {
    pub after: Duration,
}

impl From<AttemptTimedOut> for LookupError {
    fn from(err: AttemptTimedOut) -> Self {
        Self::Timeout(err.after)
    }
}
