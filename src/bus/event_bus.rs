//! Event bus - notifications with zero or more listeners.

use super::bus::MessageBus;
use super::dispatchable::Dispatchable;
use crate::error::BusError;
use crate::message::{Message, MessageKind};

/// Bus that only dispatches events.
#[derive(Clone, Default)]
pub struct EventBus {
    bus: MessageBus,
}

kind_bus!(EventBus);

impl EventBus {
    /// Dispatch a pre-built event, or build one from `(name, payload)`.
    pub fn dispatch(&self, event: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.bus.dispatch_kind(MessageKind::Event, event.into())
    }
}
