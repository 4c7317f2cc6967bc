//! Middleware errors reach the caller and stop the chain.

use std::fmt;

use relay_bus::{middleware_fn, BusError, MiddlewareStack};

use crate::support::{command, entries, new_log, recording};

#[derive(Debug)]
struct Unauthorized;

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unauthorized")
    }
}

impl std::error::Error for Unauthorized {}

#[test]
fn error_aborts_rest_of_chain() {
    let log = new_log();
    let mut stack = MiddlewareStack::default();
    stack.add(recording(&log, "outer".into()));
    stack.add(middleware_fn("auth", |_, _| Err(BusError::middleware(Unauthorized))));
    stack.add(recording(&log, "inner".into()));

    let err = stack.handle(command("c")).unwrap_err();

    assert_eq!(err.to_string(), "middleware error: unauthorized");
    assert!(std::error::Error::source(&err).is_some());
    // outer never reaches its post-processing because `?` propagates
    assert_eq!(entries(&log), vec!["outer:in"]);
}

#[test]
fn outer_middleware_can_recover() {
    let mut stack = MiddlewareStack::default();
    stack.add(middleware_fn("recover", |message, next| {
        let fallback = message.clone();
        match next.run(message) {
            Ok(result) => Ok(result),
            Err(BusError::Rejected(_)) => Ok(fallback),
            Err(other) => Err(other),
        }
    }));
    stack.add(middleware_fn("reject", |_, _| Err(BusError::Rejected("no".into()))));

    let message = command("c");
    assert_eq!(stack.handle(message.clone()).unwrap(), message);
}
