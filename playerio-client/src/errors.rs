//! Error types for playerio-client.

use std::fmt;

use playerio_proto::deserialize;
use playerio_proto::enums::ErrorCode;

pub use playerio_proto::types::{Error as PlayerIoError, RegistrationError};

// ─── RemoteError ──────────────────────────────────────────────────────────────

/// Implemented by the error replies the service sends back, so callers can
/// ask for the error code without knowing which reply type they hold.
pub trait RemoteError: fmt::Debug + fmt::Display {
    /// Machine-readable reason.
    fn error_code(&self) -> ErrorCode;
    /// Human-readable description.
    fn message(&self) -> &str;
}

impl RemoteError for PlayerIoError {
    fn error_code(&self) -> ErrorCode { self.error_code }
    fn message(&self) -> &str { &self.message }
}

impl RemoteError for RegistrationError {
    fn error_code(&self) -> ErrorCode { self.error_code }
    fn message(&self) -> &str { &self.message }
}

// ─── TransportError ───────────────────────────────────────────────────────────

/// A failure below the API layer: the request never produced a reply envelope.
#[derive(Debug)]
pub enum TransportError {
    /// The HTTP request could not be built, sent or read.
    Http(reqwest::Error),
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e)   => write!(f, "HTTP error: {e}"),
            Self::Status(s) => write!(f, "unexpected HTTP status {s}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e)   => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self { Self::Http(e) }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from every call that talks to Player.IO.
///
/// `E` is the error reply of the request that was sent:
/// [`PlayerIoError`] for most calls, [`RegistrationError`] for registration.
#[derive(Debug)]
pub enum InvocationError<E> {
    /// The service rejected the request.
    Api(E),
    /// Network / HTTP failure.
    Transport(TransportError),
    /// The reply envelope or its payload could not be decoded.
    Deserialize(deserialize::Error),
}

impl<E: fmt::Display> fmt::Display for InvocationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e)         => write!(f, "{e}"),
            Self::Transport(e)   => write!(f, "{e}"),
            Self::Deserialize(e) => write!(f, "deserialize error: {e}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for InvocationError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e)         => Some(e),
            Self::Transport(e)   => Some(e),
            Self::Deserialize(e) => Some(e),
        }
    }
}

impl<E> From<TransportError> for InvocationError<E> {
    fn from(e: TransportError) -> Self { Self::Transport(e) }
}

impl<E> From<deserialize::Error> for InvocationError<E> {
    fn from(e: deserialize::Error) -> Self { Self::Deserialize(e) }
}

impl<E: RemoteError> InvocationError<E> {
    /// Returns `true` if the service rejected the call with `code`.
    pub fn is(&self, code: ErrorCode) -> bool {
        self.error_code() == Some(code)
    }

    /// The remote error code, if the service answered at all.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api(e) => Some(e.error_code()),
            _            => None,
        }
    }
}
