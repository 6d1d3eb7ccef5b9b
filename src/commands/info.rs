//! Health and information command handlers: /ping, /hello, /status, /help.

use super::agenda::render_items;
use super::CommandContext;
use kairo_agenda::Scope;

pub(super) fn handle_ping() -> String {
    "Pong! 🧠".to_string()
}

pub(super) fn handle_hello(ctx: &CommandContext<'_>) -> String {
    let who = ctx.sender_name.unwrap_or("there");
    format!("Hello, {who}. Ready to coordinate.")
}

pub(super) fn handle_status(ctx: &CommandContext<'_>) -> String {
    let elapsed = ctx.uptime.elapsed();
    let hours = elapsed.as_secs() / 3600;
    let minutes = (elapsed.as_secs() % 3600) / 60;
    let secs = elapsed.as_secs() % 60;

    let today = ctx.agenda.list(Scope::Today, ctx.now);
    let today_block = if today.is_empty() {
        "No items today.".to_string()
    } else {
        render_items(&today, Scope::Today)
    };

    format!(
        "*{} status*\n\
         Uptime: {hours}h {minutes}m {secs}s\n\
         Provider: {}\n\
         Agenda items: {}\n\n\
         *Today*\n{today_block}",
        ctx.bot_name,
        ctx.provider_name,
        ctx.agenda.len(),
    )
}

pub(super) fn handle_help() -> String {
    "*Commands*\n\n\
     /ping — health check\n\
     /hello — say hello\n\
     /status — uptime, provider, today's agenda\n\
     /agenda add title:\"...\" due:\"YYYY-MM-DD HH:mm\" — add an agenda item\n\
     /agenda list scope:today|week|all — list agenda items\n\
     /todo add text:\"...\" — note a backlog entry\n\
     /todo list — show the backlog\n\
     /help — this message\n\n\
     Mention me to chat; say `add agenda: <title> due: <YYYY-MM-DD HH:mm>` \
     to capture an item without the slash command."
        .to_string()
}
