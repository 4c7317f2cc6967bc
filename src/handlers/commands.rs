//! Command handlers - terminal routing of commands to one handler each.

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;

use super::context::Context;
use crate::error::BusError;
use crate::message::{Message, MessageKind};
use crate::middleware::{Middleware, Next};

type Guard = Box<dyn Fn(&Context) -> bool + Send + Sync>;
type Handle = Box<dyn Fn(&Context) -> Result<Value, BusError> + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler {
    guard: Option<Guard>,
    handle: Handle,
}

/// Terminal middleware routing commands by name.
///
/// At most one handler per command name; registering a name twice replaces
/// the first handler. The handler's return value becomes the message's
/// `result`, and the chain ends here. Messages of other kinds pass on.
///
/// ## Example
///
/// ```
/// use relay_bus::{CommandBus, CommandHandlers};
/// use serde_json::json;
///
/// let mut bus = CommandBus::default();
/// bus.add(
///     CommandHandlers::new()
///         .command_guarded(
///             "todo.create",
///             |ctx| ctx.has_fields(&["title"]),
///             |ctx| Ok(json!({ "title": ctx.field("title") })),
///         ),
/// );
///
/// let reply = bus.invoke(("todo.create", json!({ "title": "milk" }))).unwrap();
/// assert_eq!(reply.result(), Some(&json!({ "title": "milk" })));
/// ```
#[derive(Default)]
pub struct CommandHandlers {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for a command name. Returns `self` so several
    /// commands can be registered in one expression.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context) -> Result<Value, BusError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `BusError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context) -> bool + Send + Sync + 'static,
        F: Fn(&Context) -> Result<Value, BusError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }
}

impl Middleware for CommandHandlers {
    fn handle(&self, mut message: Message, next: Next) -> Result<Message, BusError> {
        if !message.is_command() {
            return next.run(message);
        }

        let handler = self
            .handlers
            .get(message.name())
            .ok_or_else(|| BusError::NoHandler {
                kind: MessageKind::Command,
                name: message.name().to_string(),
            })?;

        let result = {
            let ctx = Context::new(&message);
            if let Some(guard) = &handler.guard {
                if !guard(&ctx) {
                    return Err(BusError::GuardRejected(message.name().to_string()));
                }
            }
            trace!(name = message.name(), "calling command handler");
            (handler.handle)(&ctx)?
        };

        message.set_result(result);
        Ok(message)
    }

    fn name(&self) -> &str {
        "command_handlers"
    }
}
