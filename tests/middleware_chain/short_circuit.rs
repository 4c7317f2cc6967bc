//! A middleware that skips `next` ends the chain.

use relay_bus::{middleware_fn, MiddlewareStack};
use serde_json::json;

use crate::support::{command, entries, new_log, recording, stopping};

#[test]
fn later_middleware_never_run() {
    let log = new_log();
    let mut stack = MiddlewareStack::default();
    stack.add(recording(&log, "m1".into()));
    stack.add(stopping(&log, "m2".into()));
    stack.add(recording(&log, "m3".into()));
    stack.add(recording(&log, "m4".into()));

    stack.handle(command("c")).unwrap();

    assert_eq!(entries(&log), vec!["m1:in", "m2", "m1:out"]);
}

#[test]
fn short_circuit_can_answer() {
    let mut stack = MiddlewareStack::default();
    stack.add(middleware_fn("cache", |mut message, next| {
        if message["id"] == json!(1) {
            message.set_result(json!("cached"));
            return Ok(message);
        }
        next.run(message)
    }));
    stack.add(middleware_fn("backend", |mut message, _| {
        message.set_result(json!("fresh"));
        Ok(message)
    }));

    let mut hit = command("q");
    hit.set("id", 1);
    let mut miss = command("q");
    miss.set("id", 2);

    assert_eq!(stack.handle(hit).unwrap().result(), Some(&json!("cached")));
    assert_eq!(stack.handle(miss).unwrap().result(), Some(&json!("fresh")));
}

#[test]
fn next_may_run_more_than_once() {
    let mut stack = MiddlewareStack::default();
    stack.add(middleware_fn("twice", |message, next| {
        let once = next.run(message)?;
        next.run(once)
    }));
    stack.add(middleware_fn("count", |mut message, next| {
        let n = message["n"].as_i64().unwrap_or(0);
        message.set("n", n + 1);
        next.run(message)
    }));

    assert_eq!(stack.handle(command("c")).unwrap()["n"], json!(2));
}
