//! Built-in bot commands — instant responses, no provider call.

mod agenda;
mod info;


pub(crate) use agenda::{confirm_added, DATE_FORMAT_HINT};

use chrono::NaiveDateTime;
use kairo_agenda::Store;
use std::collections::HashMap;
use std::time::Instant;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub agenda: &'a Store,
    pub channel: &'a str,
    pub sender_id: &'a str,
    pub sender_name: Option<&'a str>,
    pub text: &'a str,
    /// Host-local "now", injected so listings are testable on fixed dates.
    pub now: NaiveDateTime,
    pub uptime: &'a Instant,
    pub provider_name: &'a str,
    pub bot_name: &'a str,
}

/// Known bot commands.
pub enum Command {
    Ping,
    Hello,
    Status,
    Agenda,
    Todo,
    Help,
}

impl Command {
    /// Parse a command from message text. Returns `None` for unknown `/`
    /// prefixes (which should pass through to the chat path).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/status@kairo_bot" → "/status").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/ping" => Some(Self::Ping),
            "/hello" => Some(Self::Hello),
            "/status" => Some(Self::Status),
            "/agenda" => Some(Self::Agenda),
            "/todo" => Some(Self::Todo),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Handle a command and return the response text.
pub fn handle(cmd: Command, ctx: &CommandContext<'_>) -> String {
    match cmd {
        Command::Ping => info::handle_ping(),
        Command::Hello => info::handle_hello(ctx),
        Command::Status => info::handle_status(ctx),
        Command::Agenda => agenda::handle_agenda(ctx),
        Command::Todo => agenda::handle_todo(ctx),
        Command::Help => info::handle_help(),
    }
}

/// Parse `key:value` arguments from command text.
///
/// Values containing spaces are double-quoted (`title:"Deliver cut"`);
/// bare values run to the next whitespace. Keys are lowercased. Tokens
/// without a colon are skipped.
pub(crate) fn parse_kv_args(text: &str) -> HashMap<String, String> {
    let mut args = HashMap::new();
    let mut s = text;

    loop {
        s = s.trim_start();
        if s.is_empty() {
            break;
        }

        let token_end = s.find(char::is_whitespace).unwrap_or(s.len());
        let colon = match s[..token_end].find(':') {
            Some(c) => c,
            None => {
                s = &s[token_end..];
                continue;
            }
        };

        let key = s[..colon].to_ascii_lowercase();
        let after = &s[colon + 1..];

        if let Some(quoted) = after.strip_prefix('"') {
            let (value, rest) = match quoted.find('"') {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                // Unterminated quote: take the rest of the text.
                None => (quoted, ""),
            };
            if !key.is_empty() {
                args.insert(key, value.to_string());
            }
            s = rest;
        } else {
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            if !key.is_empty() {
                args.insert(key, after[..end].to_string());
            }
            s = &after[end..];
        }
    }

    args
}
