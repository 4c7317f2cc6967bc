//! Message model - events, commands and queries.
//!
//! All three kinds share one shape: a `name`, a flat set of payload fields,
//! and a fixed `kind` tag that the buses check before dispatching.
//!
//! ```
//! use relay_bus::{MessageKind, MESSAGE_FACTORY};
//! use serde_json::json;
//!
//! let event = MESSAGE_FACTORY
//!     .build_from_value(MessageKind::Event, "user.created", json!({ "id": 7 }))
//!     .unwrap();
//!
//! assert!(event.is_event());
//! assert_eq!(event.name(), "user.created");
//! assert_eq!(event["id"], json!(7));
//! ```

mod factory;
mod kind;
mod message;

pub use factory::{MessageFactory, MESSAGE_FACTORY};
pub use kind::MessageKind;
pub use message::{Message, Payload};
