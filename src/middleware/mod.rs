//! Middleware - composable interceptors around a bus dispatch.
//!
//! ## Architecture
//!
//! ```text
//!  handle(msg)
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │ m1  (first added, outermost)             │
//! │  ┌────────────────────────────────────┐  │
//! │  │ m2                                 │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │ mN  (last added)             │  │  │
//! │  │  │   next = identity terminal   │  │  │
//! │  │  └──────────────────────────────┘  │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Going in, middleware run in the order they were added. Work done after
//! `next.run(..)` returns happens in reverse order. Any middleware may stop
//! the chain by returning without calling `next`.

#[cfg(feature = "emitter")]
mod emitter;
mod logging;
mod middleware;
mod stack;

#[cfg(feature = "emitter")]
pub use emitter::EmitterMiddleware;
pub use logging::LoggingMiddleware;
pub use middleware::{middleware_fn, FnMiddleware, Middleware, Next};
pub use stack::MiddlewareStack;
