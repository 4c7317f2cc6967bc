//! Query handlers - every query must resolve to exactly one handler.

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;

use super::context::Context;
use crate::error::BusError;
use crate::message::{Message, MessageKind};
use crate::middleware::{Middleware, Next};

type Handle = Box<dyn Fn(&Context) -> Result<Value, BusError> + Send + Sync>;

/// Terminal middleware answering queries by name.
///
/// A query with no registered handler fails with `BusError::NoHandler`.
/// The answer is stored as the message's `result`.
#[derive(Default)]
pub struct QueryHandlers {
    handlers: HashMap<String, Handle>,
}

impl QueryHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for a query name, replacing any earlier one.
    pub fn query<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context) -> Result<Value, BusError> + Send + Sync + 'static,
    {
        self.handlers.insert(name.to_string(), Box::new(handler));
        self
    }

    pub fn has_query(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn queries(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }
}

impl Middleware for QueryHandlers {
    fn handle(&self, mut message: Message, next: Next) -> Result<Message, BusError> {
        if !message.is_query() {
            return next.run(message);
        }

        let handler = self.handlers.get(message.name()).ok_or_else(|| BusError::NoHandler {
            kind: MessageKind::Query,
            name: message.name().to_string(),
        })?;

        trace!(name = message.name(), "calling query handler");
        let answer = handler(&Context::new(&message))?;
        message.set_result(answer);
        Ok(message)
    }

    fn name(&self) -> &str {
        "query_handlers"
    }
}
