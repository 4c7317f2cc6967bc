//! Terminal handlers - route messages by name to application code.
//!
//! Install these as the last middleware on a bus:
//!
//! - [`CommandHandlers`]: at most one handler per command; ends the chain.
//! - [`QueryHandlers`]: exactly one handler per query; ends the chain.
//! - [`EventListeners`]: any number of listeners per event; continues.
//!
//! Handlers receive a [`Context`] and return `Result<_, BusError>`. Command
//! and query handlers return a JSON value that is attached to the message
//! as its `result`.

mod commands;
mod context;
mod events;
mod queries;

pub use commands::CommandHandlers;
pub use context::Context;
pub use events::EventListeners;
pub use queries::QueryHandlers;
