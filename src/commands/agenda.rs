//! Agenda and todo command handlers: /agenda add, /agenda list, /todo.

use super::{parse_kv_args, CommandContext};
use kairo_agenda::{AgendaItem, Scope};
use kairo_core::timefmt::{format_due, parse_due};

const AGENDA_USAGE: &str = "Usage:\n\
     /agenda add title:\"...\" due:\"YYYY-MM-DD HH:mm\"\n\
     /agenda list scope:today|week|all";

pub(crate) const DATE_FORMAT_HINT: &str =
    "Couldn't parse the date. Use `YYYY-MM-DD HH:mm` (24h).";

/// Confirmation line for a stored item, shared with the capture path.
pub(crate) fn confirm_added(item: &AgendaItem) -> String {
    format!("✅ Added *{}* — due *{}*", item.title, format_due(item.due))
}

pub(super) fn handle_agenda(ctx: &CommandContext<'_>) -> String {
    match ctx.text.split_whitespace().nth(1) {
        Some("add") => handle_agenda_add(ctx),
        Some("list") => handle_agenda_list(ctx),
        _ => AGENDA_USAGE.to_string(),
    }
}

fn handle_agenda_add(ctx: &CommandContext<'_>) -> String {
    let args = parse_kv_args(ctx.text);
    let (title, due_raw) = match (args.get("title"), args.get("due")) {
        (Some(t), Some(d)) => (t, d),
        _ => return AGENDA_USAGE.to_string(),
    };

    let due = match parse_due(due_raw) {
        Ok(due) => due,
        Err(_) => return DATE_FORMAT_HINT.to_string(),
    };

    match ctx.agenda.insert(title, due, ctx.channel, Some(ctx.sender_id)) {
        Ok(item) => confirm_added(&item),
        Err(e) => format!("Error: {e}"),
    }
}

fn handle_agenda_list(ctx: &CommandContext<'_>) -> String {
    let args = parse_kv_args(ctx.text);
    let scope = args
        .get("scope")
        .and_then(|s| Scope::parse(s))
        .unwrap_or(Scope::Today);

    render_items(&ctx.agenda.list(scope, ctx.now), scope)
}

/// One bulleted line per item, or the scope placeholder.
pub(super) fn render_items(items: &[AgendaItem], scope: Scope) -> String {
    if items.is_empty() {
        return format!("No items for *{}*.", scope.label());
    }
    items
        .iter()
        .map(|it| format!("• *{}* — {}", it.title, format_due(it.due)))
        .collect::<Vec<_>>()
        .join("\n")
}

const TODO_USAGE: &str = "Usage:\n\
     /todo add text:\"...\"\n\
     /todo list";

pub(super) fn handle_todo(ctx: &CommandContext<'_>) -> String {
    match ctx.text.split_whitespace().nth(1) {
        Some("add") => {
            let args = parse_kv_args(ctx.text);
            let text = match args.get("text") {
                Some(t) => t,
                None => return TODO_USAGE.to_string(),
            };
            match ctx.agenda.add_todo(text) {
                Ok(todo) => format!("✅ Noted: *{}*", todo.text),
                Err(e) => format!("Error: {e}"),
            }
        }
        Some("list") => {
            let todos = ctx.agenda.todos();
            if todos.is_empty() {
                "Backlog is empty.".to_string()
            } else {
                todos
                    .iter()
                    .map(|t| format!("• {}", t.text))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        _ => TODO_USAGE.to_string(),
    }
}
