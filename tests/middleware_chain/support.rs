//! Shared helpers: middleware that record when they run.

use std::sync::{Arc, Mutex};

use relay_bus::{middleware_fn, Message, Middleware, Payload, MESSAGE_FACTORY};

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn command(name: &str) -> Message {
    MESSAGE_FACTORY.command(name, Payload::new()).unwrap()
}

/// Records `label:in` before calling next and `label:out` after.
pub fn recording(log: &Log, label: String) -> impl Middleware {
    let log = Arc::clone(log);
    middleware_fn(label.clone(), move |message, next| {
        log.lock().unwrap().push(format!("{}:in", label));
        let result = next.run(message)?;
        log.lock().unwrap().push(format!("{}:out", label));
        Ok(result)
    })
}

/// Records `label` and returns without calling next.
pub fn stopping(log: &Log, label: String) -> impl Middleware {
    let log = Arc::clone(log);
    middleware_fn(label.clone(), move |message, _next| {
        log.lock().unwrap().push(label.clone());
        Ok(message)
    })
}
