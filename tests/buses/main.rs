//! Bus integration tests - kind checks, construction from name and payload,
//! and a small todo application wired through terminal handlers.

mod todo_app;
