//! In-process event, command and query buses.
//!
//! Messages pass through an ordered chain of middleware before reaching a
//! terminal handler. The first middleware registered runs first on the way
//! in and last on the way out.
//!
//! ```
//! use relay_bus::{CommandHandlers, LoggingMiddleware, SystemBus};
//! use serde_json::json;
//!
//! let mut bus = SystemBus::new();
//! bus.add_command_handler(LoggingMiddleware::new("commands"));
//! bus.add_command_handler(CommandHandlers::new().command("todo.create", |ctx| {
//!     Ok(json!({ "title": ctx.field("title") }))
//! }));
//!
//! let reply = bus.invoke(("todo.create", json!({ "title": "milk" }))).unwrap();
//! assert_eq!(reply.result(), Some(&json!({ "title": "milk" })));
//! ```

pub mod bus;
mod error;
pub mod handlers;
pub mod message;
pub mod middleware;

pub use bus::{CommandBus, Dispatchable, EventBus, MessageBus, QueryBus, SystemBus};
pub use error::BusError;
pub use handlers::{CommandHandlers, Context, EventListeners, QueryHandlers};
pub use message::{Message, MessageFactory, MessageKind, Payload, MESSAGE_FACTORY};
#[cfg(feature = "emitter")]
pub use middleware::EmitterMiddleware;
pub use middleware::{middleware_fn, FnMiddleware, LoggingMiddleware, Middleware, MiddlewareStack, Next};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
