//! System bus integration tests - delegation to the per-kind buses.

use std::sync::Arc;

use relay_bus::{
    middleware_fn, CommandBus, EventBus, Message, Middleware, QueryBus, SystemBus,
};
use serde_json::json;

fn answering() -> Arc<dyn Middleware> {
    Arc::new(middleware_fn("answer", |mut message: Message, _| {
        let name = message.name().to_string();
        message.set_result(json!({ "answered": name }));
        Ok(message)
    }))
}

#[test]
fn query_matches_an_equivalent_query_bus() {
    let system = SystemBus::from_buses(
        EventBus::default(),
        CommandBus::default(),
        QueryBus::new(vec![answering()]),
    );
    let direct = QueryBus::new(vec![answering()]);

    let via_system = system.query(("q", json!({}))).unwrap();
    let via_bus = direct.query(("q", json!({}))).unwrap();

    assert_eq!(via_system.result(), via_bus.result());
    assert_eq!(via_system.fields(), via_bus.fields());
    assert_eq!(via_system.kind(), via_bus.kind());
}

#[test]
fn each_entry_point_reaches_its_own_bus() {
    let mut system = SystemBus::new();
    system.add_event_listener(middleware_fn("event", |mut m, next| {
        m.set("bus", "event");
        next.run(m)
    }));
    system.add_command_handler(middleware_fn("command", |mut m, next| {
        m.set("bus", "command");
        next.run(m)
    }));
    system.add_query_handler(middleware_fn("query", |mut m, next| {
        m.set("bus", "query");
        next.run(m)
    }));

    assert_eq!(system.dispatch(("e", json!({}))).unwrap()["bus"], json!("event"));
    assert_eq!(system.invoke(("c", json!({}))).unwrap()["bus"], json!("command"));
    assert_eq!(system.query(("q", json!({}))).unwrap()["bus"], json!("query"));
}

#[test]
fn kind_checks_still_apply() {
    let system = SystemBus::new();
    let event = system.dispatch(("e", json!({}))).unwrap();

    assert!(system.invoke(event.clone()).unwrap_err().is_invalid_argument());
    assert!(system.query(event.clone()).unwrap_err().is_invalid_argument());
    assert!(system.dispatch(event).is_ok());
}

#[test]
fn inner_buses_can_be_reconfigured() {
    let mut system = SystemBus::new();
    system
        .command_bus_mut()
        .add(middleware_fn("tag", |mut m, next| {
            m.set_header("seen", true);
            next.run(m)
        }));
    assert!(system.command_bus_mut().replace(
        "tag",
        middleware_fn("tag", |mut m, next| {
            m.set_header("seen", "replaced");
            next.run(m)
        })
    ));

    let out = system.invoke(("c", json!({}))).unwrap();
    assert_eq!(out.header("seen"), Some(&json!("replaced")));
    assert_eq!(system.command_bus().stack().len(), 1);
    assert!(system.event_bus().stack().is_empty());
    assert!(!system.query_bus_mut().remove("missing"));
}

#[test]
fn system_bus_is_shareable_across_threads() {
    let mut system = SystemBus::new();
    system.add_event_listener(middleware_fn("noop", |m, next| next.run(m)));
    let system = Arc::new(system);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let system = Arc::clone(&system);
            std::thread::spawn(move || system.dispatch(("e", json!({ "i": i }))).unwrap()["i"].clone())
        })
        .collect();

    let mut seen: Vec<i64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().as_i64().unwrap())
        .collect();
    seen.sort();
    assert_eq!(seen, vec![0, 1, 2, 3]);
}
