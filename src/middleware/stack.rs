//! Ordered middleware list composed into a single onion chain.

use std::sync::Arc;

use tracing::trace;

use super::middleware::{Continuation, Middleware, Next};
use crate::error::BusError;
use crate::message::Message;

/// An ordered list of middleware.
///
/// Insertion order is execution order on the way in: the first middleware
/// added is outermost, and the last one added calls the identity terminal.
#[derive(Clone, Default)]
pub struct MiddlewareStack {
    middleware: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareStack {
    pub fn new(middleware: Vec<Arc<dyn Middleware>>) -> Self {
        Self { middleware }
    }

    /// Append a middleware; it runs after everything already registered.
    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.add_shared(Arc::new(middleware));
    }

    /// Append an already shared middleware. The same instance may be added
    /// any number of times.
    pub fn add_shared(&mut self, middleware: Arc<dyn Middleware>) {
        trace!(middleware = middleware.name(), position = self.middleware.len(), "middleware added");
        self.middleware.push(middleware);
    }

    /// Insert at `index`, shifting later entries back.
    ///
    /// `index == len()` appends. A larger index is rejected.
    pub fn insert<M: Middleware + 'static>(&mut self, index: usize, middleware: M) -> Result<(), BusError> {
        self.insert_shared(index, Arc::new(middleware))
    }

    pub fn insert_shared(&mut self, index: usize, middleware: Arc<dyn Middleware>) -> Result<(), BusError> {
        if index > self.middleware.len() {
            return Err(BusError::InvalidArgument(format!(
                "insert index {} out of bounds for stack of {}",
                index,
                self.middleware.len()
            )));
        }
        trace!(middleware = middleware.name(), position = index, "middleware inserted");
        self.middleware.insert(index, middleware);
        Ok(())
    }

    /// Swap the first middleware named `name` for `with`. Returns whether
    /// anything was replaced.
    pub fn replace<M: Middleware + 'static>(&mut self, name: &str, with: M) -> bool {
        match self.middleware.iter().position(|m| m.name() == name) {
            Some(index) => {
                trace!(middleware = name, position = index, "middleware replaced");
                self.middleware[index] = Arc::new(with);
                true
            }
            None => false,
        }
    }

    /// Remove the first middleware named `name`.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.middleware.iter().position(|m| m.name() == name) {
            Some(index) => {
                trace!(middleware = name, position = index, "middleware removed");
                self.middleware.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    /// Registered middleware names, in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.middleware.iter().map(|m| m.name()).collect()
    }

    /// Run `message` through the chain.
    ///
    /// The chain is rebuilt from the current list on every call by folding
    /// right to left over it, so the stored order is only ever read.
    pub fn handle(&self, message: Message) -> Result<Message, BusError> {
        let terminal: Continuation = Arc::new(identity);
        let chain = self.middleware.iter().rev().fold(terminal, |next, middleware| {
            let middleware = Arc::clone(middleware);
            let next = Next::new(next);
            let wrapped: Continuation =
                Arc::new(move |message: Message| middleware.handle(message, next.clone()));
            wrapped
        });
        chain(message)
    }
}

impl FromIterator<Arc<dyn Middleware>> for MiddlewareStack {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Middleware>>>(iter: I) -> Self {
        let mut stack = Self::default();
        for middleware in iter {
            stack.add_shared(middleware);
        }
        stack
    }
}

fn identity(message: Message) -> Result<Message, BusError> {
    Ok(message)
}
