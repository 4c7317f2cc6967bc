//! Fan events out to in-process listeners through an `EventEmitter`.

use std::sync::{Arc, Mutex};

use event_emitter_rs::EventEmitter;

use super::middleware::{Middleware, Next};
use crate::error::BusError;
use crate::message::Message;

/// Emits every event that completes the chain on a shared `EventEmitter`.
///
/// The event name is the emitter topic and the payload is the JSON-rendered
/// field object. Commands and queries pass through untouched.
///
/// ## Example
///
/// ```ignore
/// let mut emitter = EventEmitter::new();
/// emitter.on("todo.created", |payload: String| println!("{}", payload));
///
/// let mut events = EventBus::default();
/// events.add(EmitterMiddleware::new(emitter));
/// ```
#[derive(Clone)]
pub struct EmitterMiddleware {
    emitter: Arc<Mutex<EventEmitter>>,
}

impl EmitterMiddleware {
    pub fn new(emitter: EventEmitter) -> Self {
        Self {
            emitter: Arc::new(Mutex::new(emitter)),
        }
    }

    /// Register another listener on the wrapped emitter.
    pub fn on<F>(&self, event: &str, listener: F) -> Result<(), BusError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| BusError::middleware("event emitter lock poisoned"))?;
        emitter.on(event, listener);
        Ok(())
    }
}

impl Middleware for EmitterMiddleware {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        let message = next.run(message)?;
        if !message.is_event() {
            return Ok(message);
        }

        let payload = message.to_value().to_string();
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| BusError::middleware("event emitter lock poisoned"))?;
        emitter.emit(message.name(), payload);
        Ok(message)
    }

    fn name(&self) -> &str {
        "emitter"
    }
}
