//! Stateless construction of typed messages.

use serde::Serialize;
use serde_json::Value;

use super::kind::MessageKind;
use super::message::{check_name, Message, Payload};
use crate::error::BusError;

/// Shared factory instance. The factory holds no state, so every bus can
/// keep its own copy of it.
pub const MESSAGE_FACTORY: MessageFactory = MessageFactory;

/// Builds messages of a requested kind from a name and payload.
///
/// The payload is merged onto the message as top-level fields. No schema
/// checks are made here; that belongs in middleware.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageFactory;

impl MessageFactory {
    pub fn event(&self, name: &str, payload: Payload) -> Result<Message, BusError> {
        self.build(MessageKind::Event, name, payload)
    }

    pub fn command(&self, name: &str, payload: Payload) -> Result<Message, BusError> {
        self.build(MessageKind::Command, name, payload)
    }

    pub fn query(&self, name: &str, payload: Payload) -> Result<Message, BusError> {
        self.build(MessageKind::Query, name, payload)
    }

    /// Build a message of any kind. Fails on an empty name.
    pub fn build(&self, kind: MessageKind, name: &str, payload: Payload) -> Result<Message, BusError> {
        check_name(kind, name)?;
        Ok(Message::new(kind, name.to_string(), payload))
    }

    /// Build from a JSON value. Objects become the payload, `null` is an
    /// empty payload, anything else is rejected.
    pub fn build_from_value(
        &self,
        kind: MessageKind,
        name: &str,
        payload: Value,
    ) -> Result<Message, BusError> {
        match payload {
            Value::Object(map) => self.build(kind, name, map),
            Value::Null => self.build(kind, name, Payload::new()),
            other => Err(BusError::InvalidArgument(format!(
                "{} payload for {} must be an object, got {}",
                kind,
                name,
                json_type(&other)
            ))),
        }
    }

    /// Build from any serializable struct.
    pub fn encode<T: Serialize>(
        &self,
        kind: MessageKind,
        name: &str,
        payload: &T,
    ) -> Result<Message, BusError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| BusError::InvalidArgument(e.to_string()))?;
        self.build_from_value(kind, name, value)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
