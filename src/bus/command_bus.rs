//! Command bus - requests to change state.

use super::bus::MessageBus;
use super::dispatchable::Dispatchable;
use crate::error::BusError;
use crate::message::{Message, MessageKind};

/// Bus that only invokes commands.
#[derive(Clone, Default)]
pub struct CommandBus {
    bus: MessageBus,
}

kind_bus!(CommandBus);

impl CommandBus {
    /// Invoke a pre-built command, or build one from `(name, payload)`.
    pub fn invoke(&self, command: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.bus.dispatch_kind(MessageKind::Command, command.into())
    }
}
