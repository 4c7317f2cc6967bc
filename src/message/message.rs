//! The `Message` carrier shared by events, commands and queries.

use std::ops::Index;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::kind::MessageKind;
use crate::error::BusError;

/// Flat field map carried by a message (also used for headers).
pub type Payload = Map<String, Value>;

static NULL: Value = Value::Null;

/// A message flowing through a bus.
///
/// `kind` and `name` are fixed at construction. Payload fields live directly
/// on the message rather than under a nested key, so middleware reads them
/// with `message.get("field")` or `message["field"]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMessage")]
pub struct Message {
    id: String,
    kind: MessageKind,
    name: String,
    headers: Payload,
    fields: Payload,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
}

/// Wire form of a message, checked before it becomes a `Message`.
#[derive(Deserialize)]
struct RawMessage {
    id: String,
    kind: MessageKind,
    name: String,
    #[serde(default)]
    headers: Payload,
    #[serde(default)]
    fields: Payload,
    #[serde(default)]
    result: Option<Value>,
}

impl TryFrom<RawMessage> for Message {
    type Error = BusError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        check_name(raw.kind, &raw.name)?;
        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            name: raw.name,
            headers: raw.headers,
            fields: raw.fields,
            result: raw.result,
        })
    }
}

/// Message names must contain something other than whitespace.
pub(super) fn check_name(kind: MessageKind, name: &str) -> Result<(), BusError> {
    if name.trim().is_empty() {
        return Err(BusError::InvalidArgument(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(())
}

impl Message {
    pub(crate) fn new(kind: MessageKind, name: String, fields: Payload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            name,
            headers: Payload::new(),
            fields,
            result: None,
        }
    }

    /// Unique identifier assigned at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix of the name before the first `.`, if any.
    ///
    /// `"user.created"` belongs to the `user` context; `"ping"` has none.
    pub fn context(&self) -> Option<&str> {
        self.name
            .split_once('.')
            .map(|(context, _)| context)
            .filter(|context| !context.is_empty())
    }

    pub fn is_event(&self) -> bool {
        self.kind == MessageKind::Event
    }

    pub fn is_command(&self) -> bool {
        self.kind == MessageKind::Command
    }

    pub fn is_query(&self) -> bool {
        self.kind == MessageKind::Query
    }

    /// Get a payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Set a payload field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// All payload fields.
    pub fn fields(&self) -> &Payload {
        &self.fields
    }

    /// Deserialize the payload fields into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, BusError> {
        serde_json::from_value(self.to_value()).map_err(BusError::from)
    }

    /// The payload fields as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn headers(&self) -> &Payload {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&Value> {
        self.headers.get(key)
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Add a header (builder style).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_header(key, value);
        self
    }

    /// Outcome attached by a terminal handler, if any.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, value: Value) {
        self.result = Some(value);
    }

    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}

impl Index<&str> for Message {
    type Output = Value;

    /// Missing fields index to `Value::Null`, like `serde_json::Value`.
    fn index(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }
}
