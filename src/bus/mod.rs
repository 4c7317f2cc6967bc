//! Buses - kind-checked entry points over a middleware chain.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        SystemBus                            │
//! │        dispatch(event) / invoke(command) / query(query)     │
//! └─────────────────────────────────────────────────────────────┘
//!          │                    │                    │
//!          ▼                    ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐
//! │    EventBus     │  │   CommandBus    │  │    QueryBus     │
//! │   dispatch()    │  │    invoke()     │  │    query()      │
//! └─────────────────┘  └─────────────────┘  └─────────────────┘
//!          │                    │                    │
//!          ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │   MessageBus: MiddlewareStack + MessageFactory (per bus)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each entry point takes a [`Dispatchable`]: a pre-built message of the
//! bus's kind, or a `(name, payload)` pair the bus builds via its factory.
//! Anything else fails with `BusError::InvalidArgument`.

/// Shared surface of the kind-specific buses, delegating to the inner
/// `MessageBus`.
macro_rules! kind_bus {
    ($bus:ident) => {
        impl $bus {
            /// Create a bus whose chain is `middleware`, in order.
            pub fn new(middleware: Vec<std::sync::Arc<dyn $crate::Middleware>>) -> Self {
                Self {
                    bus: $crate::MessageBus::new(middleware),
                }
            }

            pub fn with_factory(mut self, factory: $crate::MessageFactory) -> Self {
                self.bus = self.bus.with_factory(factory);
                self
            }

            pub fn add<M: $crate::Middleware + 'static>(&mut self, middleware: M) {
                self.bus.add(middleware);
            }

            pub fn add_shared(&mut self, middleware: std::sync::Arc<dyn $crate::Middleware>) {
                self.bus.add_shared(middleware);
            }

            pub fn insert<M: $crate::Middleware + 'static>(
                &mut self,
                index: usize,
                middleware: M,
            ) -> Result<(), $crate::BusError> {
                self.bus.insert(index, middleware)
            }

            pub fn replace<M: $crate::Middleware + 'static>(&mut self, name: &str, with: M) -> bool {
                self.bus.replace(name, with)
            }

            pub fn remove(&mut self, name: &str) -> bool {
                self.bus.remove(name)
            }

            /// The underlying untyped bus.
            pub fn bus(&self) -> &$crate::MessageBus {
                &self.bus
            }

            pub fn stack(&self) -> &$crate::MiddlewareStack {
                self.bus.stack()
            }
        }
    };
}

mod bus;
mod command_bus;
mod dispatchable;
mod event_bus;
mod query_bus;
mod system_bus;

pub use bus::MessageBus;
pub use command_bus::CommandBus;
pub use dispatchable::Dispatchable;
pub use event_bus::EventBus;
pub use query_bus::QueryBus;
pub use system_bus::SystemBus;
