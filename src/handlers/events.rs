//! Event listeners - zero or more listeners per event name.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::context::Context;
use crate::error::BusError;
use crate::message::Message;
use crate::middleware::{Middleware, Next};

type Listener = Box<dyn Fn(&Context) -> Result<(), BusError> + Send + Sync>;

/// Middleware running every listener registered for an event's name, in
/// registration order, then continuing the chain.
///
/// A failing listener aborts the dispatch; later listeners do not run.
#[derive(Default)]
pub struct EventListeners {
    listeners: HashMap<String, Vec<Listener>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener for an event name.
    pub fn on<F>(mut self, name: &str, listener: F) -> Self
    where
        F: Fn(&Context) -> Result<(), BusError> + Send + Sync + 'static,
    {
        self.listeners
            .entry(name.to_string())
            .or_default()
            .push(Box::new(listener));
        self
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }

    pub fn events(&self) -> Vec<&str> {
        self.listeners.keys().map(|s| s.as_str()).collect()
    }
}

impl Middleware for EventListeners {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        if !message.is_event() {
            return next.run(message);
        }

        match self.listeners.get(message.name()) {
            Some(listeners) => {
                let ctx = Context::new(&message);
                for listener in listeners {
                    trace!(name = message.name(), "calling event listener");
                    listener(&ctx)?;
                }
            }
            None => debug!(name = message.name(), "no event listener found"),
        }

        next.run(message)
    }

    fn name(&self) -> &str {
        "event_listeners"
    }
}
