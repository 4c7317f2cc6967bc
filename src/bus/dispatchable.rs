//! Arguments accepted by the kind-specific bus entry points.

use serde_json::Value;

use crate::message::{Message, Payload};

/// What a caller hands to `dispatch`, `invoke` or `query`: either a
/// pre-built message or a name with an optional payload to build one from.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatchable {
    Message(Message),
    Named {
        name: String,
        payload: Option<Value>,
    },
}

impl Dispatchable {
    pub fn named(name: impl Into<String>, payload: impl Into<Value>) -> Self {
        Dispatchable::Named {
            name: name.into(),
            payload: Some(payload.into()),
        }
    }
}

impl From<Message> for Dispatchable {
    fn from(message: Message) -> Self {
        Dispatchable::Message(message)
    }
}

impl From<&str> for Dispatchable {
    fn from(name: &str) -> Self {
        Dispatchable::Named {
            name: name.to_string(),
            payload: None,
        }
    }
}

impl From<String> for Dispatchable {
    fn from(name: String) -> Self {
        Dispatchable::Named {
            name,
            payload: None,
        }
    }
}

impl From<(&str, Value)> for Dispatchable {
    fn from((name, payload): (&str, Value)) -> Self {
        Dispatchable::named(name, payload)
    }
}

impl From<(String, Value)> for Dispatchable {
    fn from((name, payload): (String, Value)) -> Self {
        Dispatchable::named(name, payload)
    }
}

impl From<(&str, Payload)> for Dispatchable {
    fn from((name, payload): (&str, Payload)) -> Self {
        Dispatchable::named(name, Value::Object(payload))
    }
}

impl From<(String, Payload)> for Dispatchable {
    fn from((name, payload): (String, Payload)) -> Self {
        Dispatchable::named(name, Value::Object(payload))
    }
}

impl From<(&str, Option<Value>)> for Dispatchable {
    fn from((name, payload): (&str, Option<Value>)) -> Self {
        Dispatchable::Named {
            name: name.to_string(),
            payload,
        }
    }
}

impl From<(String, Option<Value>)> for Dispatchable {
    fn from((name, payload): (String, Option<Value>)) -> Self {
        Dispatchable::Named { name, payload }
    }
}
