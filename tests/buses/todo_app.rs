//! A todo list driven entirely through the system bus. The store stands in
//! for the application's state container that middleware mutate.

use std::sync::{Arc, Mutex};

use relay_bus::{
    middleware_fn, BusError, CommandHandlers, EventListeners, LoggingMiddleware, QueryHandlers,
    SystemBus,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct CreateTodo {
    title: String,
}

#[derive(Default)]
struct Store {
    todos: Vec<String>,
    notifications: Vec<String>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn app(store: Arc<Mutex<Store>>) -> SystemBus {
    init_tracing();
    let mut bus = SystemBus::new();
    bus.add_to_all(Arc::new(LoggingMiddleware::new("todo-app")));

    let commands_store = Arc::clone(&store);
    bus.add_command_handler(middleware_fn("validate", |message, next| {
        if message["title"].as_str().is_some_and(str::is_empty) {
            return Err(BusError::Rejected("title must not be empty".into()));
        }
        next.run(message)
    }));
    bus.add_command_handler(CommandHandlers::new().command_guarded(
        "todo.create",
        |ctx| ctx.has_field("title"),
        move |ctx| {
            let input = ctx.input::<CreateTodo>()?;
            let mut store = commands_store.lock().map_err(|_| BusError::middleware("store poisoned"))?;
            store.todos.push(input.title);
            Ok(json!({ "count": store.todos.len() }))
        },
    ));

    let query_store = Arc::clone(&store);
    bus.add_query_handler(QueryHandlers::new().query("todo.list", move |_| {
        let store = query_store.lock().map_err(|_| BusError::middleware("store poisoned"))?;
        Ok(json!(store.todos))
    }));

    let events_store = Arc::clone(&store);
    bus.add_event_listener(EventListeners::new().on("todo.created", move |ctx| {
        let title = ctx.field("title").and_then(Value::as_str).unwrap_or_default();
        events_store
            .lock()
            .map_err(|_| BusError::middleware("store poisoned"))?
            .notifications
            .push(format!("created {}", title));
        Ok(())
    }));

    bus
}

#[test]
fn commands_queries_and_events_flow_through_their_buses() {
    let store = Arc::new(Mutex::new(Store::default()));
    let bus = app(Arc::clone(&store));

    let reply = bus.invoke(("todo.create", json!({ "title": "milk" }))).unwrap();
    assert_eq!(reply.result(), Some(&json!({ "count": 1 })));
    bus.dispatch(("todo.created", json!({ "title": "milk" }))).unwrap();

    let list = bus.query(("todo.list", json!({}))).unwrap();
    assert_eq!(list.result(), Some(&json!(["milk"])));
    assert_eq!(store.lock().unwrap().notifications, vec!["created milk"]);
}

#[test]
fn validation_and_guards_reject_bad_commands() {
    let store = Arc::new(Mutex::new(Store::default()));
    let bus = app(Arc::clone(&store));

    let err = bus.invoke(("todo.create", json!({ "title": "" }))).unwrap_err();
    assert!(matches!(err, BusError::Rejected(_)));

    let err = bus.invoke(("todo.create", json!({}))).unwrap_err();
    assert!(matches!(err, BusError::GuardRejected(_)));

    let err = bus.invoke(("todo.delete", json!({}))).unwrap_err();
    assert_eq!(err.to_string(), "no command handler registered for todo.delete");

    assert!(store.lock().unwrap().todos.is_empty());
}

#[test]
fn unknown_query_fails_but_unknown_event_does_not() {
    let bus = app(Arc::new(Mutex::new(Store::default())));

    assert!(matches!(
        bus.query(("todo.count", json!({}))),
        Err(BusError::NoHandler { .. })
    ));
    assert!(bus.dispatch(("todo.archived", json!({}))).is_ok());
}
