//! # kairo-agenda
//!
//! In-memory agenda store: titled tasks with absolute due instants, plus a
//! text-only todo backlog. State lives for the process lifetime only.

mod store;

pub use store::{AgendaItem, Scope, Store, TodoItem};
