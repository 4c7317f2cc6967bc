//! Context passed to terminal handlers.
//!
//! Wraps the message being handled so handlers read typed input and
//! headers without touching the chain.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BusError;
use crate::message::Message;

/// The context passed to every command, query and event handler.
///
/// ## Example
///
/// ```ignore
/// pub fn handle(ctx: &Context) -> Result<Value, BusError> {
///     let input = ctx.input::<CreateTodo>()?;
///     // ...
/// }
/// ```
pub struct Context<'a> {
    message: &'a Message,
}

impl<'a> Context<'a> {
    pub(crate) fn new(message: &'a Message) -> Self {
        Self { message }
    }

    /// Deserialize the payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, BusError> {
        self.message.input()
    }

    pub fn message(&self) -> &Message {
        self.message
    }

    /// Get the message name.
    pub fn name(&self) -> &str {
        self.message.name()
    }

    pub fn field(&self, field: &str) -> Option<&Value> {
        self.message.get(field)
    }

    /// Check if the payload contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.message.has_field(field)
    }

    /// Check if the payload contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }

    pub fn header(&self, key: &str) -> Option<&Value> {
        self.message.header(key)
    }
}
