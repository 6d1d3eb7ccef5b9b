//! The agenda store — the only component with real state.
//!
//! One `Store` handle is built at process start and passed into the
//! gateway and command handlers; cloning shares the same state. Each
//! insert and list takes the lock once, so items are only ever observed
//! whole.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use kairo_core::error::KairoError;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A titled task with an absolute due instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Unique for the process lifetime; assigned at creation, never reused.
    pub id: u64,
    pub title: String,
    /// Host-local wall-clock time, no offset stored.
    pub due: NaiveDateTime,
    /// Channel the item was created from. Display context only.
    pub channel: String,
    /// Originating user for command-path items; `None` for AI suggestions.
    pub created_by: Option<String>,
}

/// A text-only backlog entry, no time semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
}

/// A named time window for agenda listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Today,
    Week,
    All,
}

impl Scope {
    /// Parse a scope name, case-insensitive. Unknown names are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Display name (e.g. in listing placeholders).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::All => "all",
        }
    }
}

#[derive(Default)]
struct Inner {
    items: Mutex<Vec<AgendaItem>>,
    todos: Mutex<Vec<TodoItem>>,
    next_id: AtomicU64,
}

/// In-memory agenda store. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter-based id, decoupled from clock resolution.
    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Insert an agenda item.
    ///
    /// The title is trimmed and must be non-empty; `due` validity is the
    /// caller's responsibility (enforced upstream by the time codec).
    pub fn insert(
        &self,
        title: &str,
        due: NaiveDateTime,
        channel: &str,
        created_by: Option<&str>,
    ) -> Result<AgendaItem, KairoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KairoError::Agenda("title must not be empty".into()));
        }

        let item = AgendaItem {
            id: self.next_id(),
            title: title.to_string(),
            due,
            channel: channel.to_string(),
            created_by: created_by.map(str::to_string),
        };

        let mut items = self.inner.items.lock().unwrap_or_else(|e| e.into_inner());
        items.push(item.clone());
        debug!("agenda: stored item #{} '{}'", item.id, item.title);
        Ok(item)
    }

    /// List items in the given scope as of `as_of`, ascending by due
    /// instant; ties keep insertion order. An empty result is a normal
    /// outcome, not an error.
    pub fn list(&self, scope: Scope, as_of: NaiveDateTime) -> Vec<AgendaItem> {
        let midnight = as_of.date().and_time(NaiveTime::MIN);
        let window = match scope {
            Scope::Today => Some((midnight, midnight + Duration::hours(24))),
            Scope::Week => Some((midnight, midnight + Duration::days(7))),
            Scope::All => None,
        };

        let items = self.inner.items.lock().unwrap_or_else(|e| e.into_inner());
        let mut selected: Vec<AgendaItem> = items
            .iter()
            .filter(|it| match window {
                Some((start, end)) => it.due >= start && it.due < end,
                None => true,
            })
            .cloned()
            .collect();
        // Vec::sort_by_key is stable, which is what keeps ties in
        // insertion order.
        selected.sort_by_key(|it| it.due);
        selected
    }

    /// Number of stored agenda items.
    pub fn len(&self) -> usize {
        self.inner.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the agenda is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a todo backlog entry. Text is trimmed and must be non-empty.
    pub fn add_todo(&self, text: &str) -> Result<TodoItem, KairoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(KairoError::Agenda("todo text must not be empty".into()));
        }

        let todo = TodoItem {
            id: self.next_id(),
            text: text.to_string(),
        };

        let mut todos = self.inner.todos.lock().unwrap_or_else(|e| e.into_inner());
        todos.push(todo.clone());
        Ok(todo)
    }

    /// All todo entries in insertion order.
    pub fn todos(&self) -> Vec<TodoItem> {
        self.inner.todos.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests;
