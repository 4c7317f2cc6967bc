//! System bus - one facade over the event, command and query buses.

use std::sync::Arc;

use super::command_bus::CommandBus;
use super::dispatchable::Dispatchable;
use super::event_bus::EventBus;
use super::query_bus::QueryBus;
use crate::error::BusError;
use crate::message::Message;
use crate::middleware::Middleware;

/// Facade owning one bus per message kind.
///
/// Each inner bus keeps its own independent stack. Middleware that should
/// see every kind is registered on all three with [`SystemBus::add_to_all`].
///
/// ## Example
///
/// ```
/// use relay_bus::{CommandHandlers, SystemBus};
/// use serde_json::json;
///
/// let mut bus = SystemBus::new();
/// bus.add_command_handler(
///     CommandHandlers::new().command("todo.create", |ctx| Ok(json!({ "created": ctx.field("title") }))),
/// );
///
/// let reply = bus.invoke(("todo.create", json!({ "title": "milk" }))).unwrap();
/// assert_eq!(reply.result(), Some(&json!({ "created": "milk" })));
/// ```
#[derive(Clone, Default)]
pub struct SystemBus {
    event_bus: EventBus,
    command_bus: CommandBus,
    query_bus: QueryBus,
}

impl SystemBus {
    /// Create a system bus with three empty buses.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_buses(event_bus: EventBus, command_bus: CommandBus, query_bus: QueryBus) -> Self {
        Self {
            event_bus,
            command_bus,
            query_bus,
        }
    }

    pub fn dispatch(&self, event: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.event_bus.dispatch(event)
    }

    pub fn invoke(&self, command: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.command_bus.invoke(command)
    }

    pub fn query(&self, request: impl Into<Dispatchable>) -> Result<Message, BusError> {
        self.query_bus.query(request)
    }

    /// Append a middleware to the event bus.
    pub fn add_event_listener<M: Middleware + 'static>(&mut self, listener: M) {
        self.event_bus.add(listener);
    }

    /// Append a middleware to the command bus.
    pub fn add_command_handler<M: Middleware + 'static>(&mut self, handler: M) {
        self.command_bus.add(handler);
    }

    /// Append a middleware to the query bus.
    pub fn add_query_handler<M: Middleware + 'static>(&mut self, handler: M) {
        self.query_bus.add(handler);
    }

    /// Append the same middleware instance to all three buses.
    pub fn add_to_all(&mut self, middleware: Arc<dyn Middleware>) {
        self.event_bus.add_shared(Arc::clone(&middleware));
        self.command_bus.add_shared(Arc::clone(&middleware));
        self.query_bus.add_shared(middleware);
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn event_bus_mut(&mut self) -> &mut EventBus {
        &mut self.event_bus
    }

    pub fn command_bus(&self) -> &CommandBus {
        &self.command_bus
    }

    pub fn command_bus_mut(&mut self) -> &mut CommandBus {
        &mut self.command_bus
    }

    pub fn query_bus(&self) -> &QueryBus {
        &self.query_bus
    }

    pub fn query_bus_mut(&mut self) -> &mut QueryBus {
        &mut self.query_bus
    }
}
