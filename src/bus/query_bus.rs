//! Query bus - requests for data.

use super::bus::MessageBus;
use super::dispatchable::Dispatchable;
use crate::error::BusError;
use crate::message::{Message, MessageKind};

/// Bus that only runs queries.
#[derive(Clone, Default)]
pub struct QueryBus {
    bus: MessageBus,
}

kind_bus!(QueryBus);

impl QueryBus {
    /// Run a pre-built query, or build one from `(name, payload)`.
    ///
    /// The answer is whatever the terminal middleware attached, usually
    /// available through [`Message::result`].
    pub fn query(&self, request: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.bus.dispatch_kind(MessageKind::Query, request.into())
    }
}
