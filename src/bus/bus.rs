//! Message bus - a middleware stack plus the factory used to build messages.

use std::sync::Arc;

use tracing::trace;

use super::dispatchable::Dispatchable;
use crate::error::BusError;
use crate::message::{Message, MessageFactory, MessageKind, MESSAGE_FACTORY};
use crate::middleware::{Middleware, MiddlewareStack};

/// Base bus shared by the event, command and query buses.
///
/// `dispatch` accepts a message of any kind; the specialised buses narrow
/// that to one kind.
///
/// ## Example
///
/// ```
/// use relay_bus::{middleware_fn, MessageBus, Payload, MESSAGE_FACTORY};
///
/// let mut bus = MessageBus::default();
/// bus.add(middleware_fn("stamp", |mut message, next| {
///     message.set("stamped", true);
///     next.run(message)
/// }));
///
/// let out = bus.dispatch(MESSAGE_FACTORY.event("e", Payload::new()).unwrap()).unwrap();
/// assert_eq!(out["stamped"], true);
/// ```
#[derive(Clone, Default)]
pub struct MessageBus {
    stack: MiddlewareStack,
    factory: MessageFactory,
}

impl MessageBus {
    /// Create a bus whose chain is `middleware`, in order.
    pub fn new(middleware: Vec<Arc<dyn Middleware>>) -> Self {
        Self {
            stack: MiddlewareStack::new(middleware),
            factory: MESSAGE_FACTORY,
        }
    }

    pub fn with_factory(mut self, factory: MessageFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn factory(&self) -> &MessageFactory {
        &self.factory
    }

    pub fn stack(&self) -> &MiddlewareStack {
        &self.stack
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.stack.add(middleware);
    }

    pub fn add_shared(&mut self, middleware: Arc<dyn Middleware>) {
        self.stack.add_shared(middleware);
    }

    pub fn insert<M: Middleware + 'static>(&mut self, index: usize, middleware: M) -> Result<(), BusError> {
        self.stack.insert(index, middleware)
    }

    pub fn replace<M: Middleware + 'static>(&mut self, name: &str, with: M) -> bool {
        self.stack.replace(name, with)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.stack.remove(name)
    }

    /// Run `message` through the chain and return the (possibly transformed)
    /// result.
    pub fn dispatch(&self, message: Message) -> Result<Message, BusError> {
        trace!(kind = %message.kind(), name = message.name(), id = message.id(), "dispatch");
        self.stack.handle(message)
    }

    /// Shared control flow of `EventBus::dispatch`, `CommandBus::invoke`
    /// and `QueryBus::query`.
    pub(crate) fn dispatch_kind(
        &self,
        kind: MessageKind,
        request: Dispatchable,
    ) -> Result<Message, BusError> {
        match request {
            Dispatchable::Message(message) if message.kind() == kind => self.dispatch(message),
            Dispatchable::Named {
                name,
                payload: Some(payload),
            } if !payload.is_null() => {
                let message = self.factory.build_from_value(kind, &name, payload)?;
                self.dispatch(message)
            }
            Dispatchable::Message(message) => Err(BusError::InvalidArgument(format!(
                "{} bus cannot dispatch {} {}",
                kind,
                message.kind(),
                message.name()
            ))),
            // An absent payload and an explicit `null` both mean "no payload".
            Dispatchable::Named { name, .. } => Err(BusError::InvalidArgument(format!(
                "{} bus needs a message or a payload to build {}",
                kind, name
            ))),
        }
    }
}
