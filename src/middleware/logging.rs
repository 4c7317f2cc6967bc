//! Middleware that logs messages entering and leaving the chain.

use serde_json::Value;
use tracing::{debug, info};

use super::middleware::{Middleware, Next};
use crate::error::BusError;
use crate::message::Message;

/// Logs each message on the way in and its result on the way out.
///
/// Messages carrying a truthy `debug` header are logged at `info`, all
/// others at `debug`.
#[derive(Clone, Debug)]
pub struct LoggingMiddleware {
    prefix: String,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new("bus")
    }
}

impl LoggingMiddleware {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn wants_debug(message: &Message) -> bool {
    match message.header("debug") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Null) | None => false,
        Some(Value::String(s)) => !s.is_empty() && s != "0" && s != "false",
        Some(_) => true,
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        let loud = wants_debug(&message);

        // field values are only evaluated when the level is enabled
        if loud {
            info!(
                prefix = %self.prefix,
                kind = %message.kind(),
                name = message.name(),
                id = message.id(),
                fields = ?message.fields(),
                "message added to bus"
            );
        } else {
            debug!(
                prefix = %self.prefix,
                kind = %message.kind(),
                name = message.name(),
                id = message.id(),
                fields = ?message.fields(),
                "message added to bus"
            );
        }

        let result = next.run(message)?;

        if loud {
            info!(prefix = %self.prefix, name = result.name(), id = result.id(), response = ?result.result(), "response");
        } else {
            debug!(prefix = %self.prefix, name = result.name(), id = result.id(), response = ?result.result(), "response");
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "logging"
    }
}
