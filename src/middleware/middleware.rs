//! The `Middleware` trait and the `Next` continuation.

use std::fmt;
use std::sync::Arc;

use crate::error::BusError;
use crate::message::Message;

/// Boxed continuation: "the rest of the chain".
pub(crate) type Continuation = Arc<dyn Fn(Message) -> Result<Message, BusError> + Send + Sync>;

/// An interceptor in a bus's processing chain.
///
/// A middleware receives the message and a [`Next`] handle to the rest of
/// the chain. It may inspect or transform the message, call `next.run` and
/// work on the result, or return without calling `next` at all.
///
/// ## Example
///
/// ```
/// use relay_bus::{BusError, Message, Middleware, Next};
///
/// struct Stamp;
///
/// impl Middleware for Stamp {
///     fn handle(&self, mut message: Message, next: Next) -> Result<Message, BusError> {
///         message.set_header("stamped", true);
///         next.run(message)
///     }
/// }
/// ```
pub trait Middleware: Send + Sync {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError>;

    /// Name used by `replace`, `remove` and `names` on a stack.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<M: Middleware + ?Sized> Middleware for Arc<M> {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        (**self).handle(message, next)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: Middleware + ?Sized> Middleware for Box<M> {
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        (**self).handle(message, next)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Handle to the remainder of the chain.
#[derive(Clone)]
pub struct Next {
    inner: Continuation,
}

impl Next {
    pub(crate) fn new(inner: Continuation) -> Self {
        Self { inner }
    }

    /// Run the rest of the chain with `message`.
    pub fn run(&self, message: Message) -> Result<Message, BusError> {
        (self.inner)(message)
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next").finish_non_exhaustive()
    }
}

/// A closure registered as middleware under a given name.
pub struct FnMiddleware<F> {
    name: String,
    f: F,
}

impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(Message, Next) -> Result<Message, BusError> + Send + Sync,
{
    fn handle(&self, message: Message, next: Next) -> Result<Message, BusError> {
        (self.f)(message, next)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure as named middleware.
///
/// ```
/// use relay_bus::middleware_fn;
///
/// let passthrough = middleware_fn("passthrough", |message, next| next.run(message));
/// ```
pub fn middleware_fn<F>(name: impl Into<String>, f: F) -> FnMiddleware<F>
where
    F: Fn(Message, Next) -> Result<Message, BusError> + Send + Sync,
{
    FnMiddleware {
        name: name.into(),
        f,
    }
}
