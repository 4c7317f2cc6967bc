//! Error type shared by the message factory, middleware and buses.

use std::error::Error;
use std::fmt;

use crate::message::MessageKind;

/// Error type for every dispatch path.
///
/// Middleware failures are carried through unchanged; the buses never
/// catch, retry or log them.
#[derive(Debug)]
pub enum BusError {
    /// No valid message could be produced from the caller's arguments.
    InvalidArgument(String),
    /// A terminal handler found nothing registered for this message.
    NoHandler { kind: MessageKind, name: String },
    /// Guard rejected the message (input validation failed).
    GuardRejected(String),
    /// Business logic rejected the message.
    Rejected(String),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
    /// Any other error raised by a middleware.
    Middleware(Box<dyn Error + Send + Sync>),
}

impl BusError {
    /// Wrap an arbitrary middleware failure.
    pub fn middleware<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        BusError::Middleware(err.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BusError::InvalidArgument(_))
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            BusError::NoHandler { kind, name } => {
                write!(f, "no {} handler registered for {}", kind, name)
            }
            BusError::GuardRejected(name) => write!(f, "guard rejected message: {}", name),
            BusError::Rejected(msg) => write!(f, "rejected: {}", msg),
            BusError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            BusError::Middleware(e) => write!(f, "middleware error: {}", e),
        }
    }
}

impl Error for BusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BusError::Middleware(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BusError {
    fn from(err: serde_json::Error) -> Self {
        BusError::DecodeFailed(err.to_string())
    }
}
