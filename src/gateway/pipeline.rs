//! Message processing pipeline — the main handle_message flow.

use super::mention::strip_mention;
use super::Gateway;
use crate::capture;
use crate::commands;
use kairo_agenda::AgendaItem;
use kairo_core::{
    completion::{fallback_text, CompletionOutcome},
    context::Context,
    message::IncomingMessage,
    timefmt,
};
use tracing::{debug, info, warn};

impl Gateway {
    /// Process a single incoming message through the full pipeline.
    ///
    /// Every failure on this path ends as a chat reply; nothing here may
    /// take down the process or leave a half-written agenda item behind.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let preview = if incoming.text.chars().count() > 60 {
            let truncated: String = incoming.text.chars().take(60).collect();
            format!("{truncated}...")
        } else {
            incoming.text.clone()
        };
        info!(
            "[{}] {} says: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            preview
        );

        // --- 1. COMMAND DISPATCH ---
        if let Some(cmd) = commands::Command::parse(&incoming.text) {
            let ctx = commands::CommandContext {
                agenda: &self.agenda,
                channel: &incoming.channel,
                sender_id: &incoming.sender_id,
                sender_name: incoming.sender_name.as_deref(),
                text: &incoming.text,
                now: chrono::Local::now().naive_local(),
                uptime: &self.uptime,
                provider_name: self.provider.name(),
                bot_name: &self.bot_name,
            };
            let response = commands::handle(cmd, &ctx);
            self.send_text(&incoming, &response).await;
            return;
        }

        // --- 2. MENTION GATE ---
        let payload = match strip_mention(&incoming.text, &self.mention_forms) {
            Some(p) => p,
            None => {
                debug!("[{}] not addressed to us, ignoring", incoming.channel);
                return;
            }
        };

        if payload.is_empty() {
            self.send_text(
                &incoming,
                "I'm listening. Share your goals or agenda and I'll draft a plan.",
            )
            .await;
            return;
        }

        // --- 3. SHORTHAND CAPTURE (deterministic, no provider call) ---
        if let Some((title, due_raw)) = capture::match_shorthand(&payload) {
            let reply = match timefmt::parse_due(&due_raw) {
                Ok(due) => {
                    match self
                        .agenda
                        .insert(&title, due, &incoming.channel, Some(&incoming.sender_id))
                    {
                        Ok(item) => commands::confirm_added(&item),
                        Err(e) => format!("Error: {e}"),
                    }
                }
                Err(_) => commands::DATE_FORMAT_HINT.to_string(),
            };
            self.send_text(&incoming, &reply).await;
            return;
        }

        // --- 4. COMPLETION PATH ---
        let typing_handle = match (
            self.channels.get(&incoming.channel).cloned(),
            incoming.reply_target.clone(),
        ) {
            (Some(ch), Some(target)) => {
                let _ = ch.send_typing(&target).await;
                Some(tokio::spawn(async move {
                    loop {
                        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                        if ch.send_typing(&target).await.is_err() {
                            break;
                        }
                    }
                }))
            }
            _ => None,
        };

        let sender = incoming.sender_name.as_deref().unwrap_or("unknown");
        let prompt = format!(
            "Channel: {} ({})\n\
             User: {sender}\n\
             Message:\n{payload}\n\n\
             Respond with a short plan. If you propose agenda items, also \
             include lines like:\n[agenda] Task title | YYYY-MM-DD HH:mm",
            incoming.channel,
            if incoming.is_group { "group" } else { "direct" },
        );
        let context = Context::new(&prompt);

        let outcome = self.provider.complete(&context).await;

        if let Some(h) = typing_handle {
            h.abort();
        }

        match outcome {
            CompletionOutcome::Text(body) => {
                let added = self.capture_suggestions(&body, &incoming);
                let reply = if added.is_empty() {
                    body
                } else {
                    format!("{body}\n\n{}", capture::added_summary(&added))
                };
                self.send_text(&incoming, &reply).await;
            }
            degraded => {
                if let Some(text) = fallback_text(&degraded) {
                    self.send_text(&incoming, text).await;
                }
            }
        }
    }

    /// Insert every valid suggestion line from a model reply, in line
    /// order. Candidates with unparseable dates are dropped without
    /// comment — the raw line is still visible in the reply itself.
    fn capture_suggestions(&self, body: &str, incoming: &IncomingMessage) -> Vec<AgendaItem> {
        let mut added = Vec::new();
        for (title, due_raw) in capture::extract_suggestions(body) {
            match timefmt::parse_due(&due_raw) {
                Ok(due) => match self.agenda.insert(&title, due, &incoming.channel, None) {
                    Ok(item) => added.push(item),
                    Err(e) => warn!("suggested agenda item rejected: {e}"),
                },
                Err(_) => {
                    info!("dropping suggestion with unparseable due '{due_raw}'");
                }
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairo_agenda::{Scope, Store};
    use kairo_core::timefmt::parse_due;
    use kairo_core::traits::Provider;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct StubProvider;

    #[async_trait::async_trait]
    impl Provider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn is_configured(&self) -> bool {
            false
        }

        async fn complete(&self, _context: &Context) -> CompletionOutcome {
            CompletionOutcome::Unavailable
        }
    }

    fn test_gateway() -> Gateway {
        Gateway::new(
            Arc::new(StubProvider),
            HashMap::new(),
            Store::new(),
            "Kairo".to_string(),
            vec!["@kairo_bot".to_string(), "Kairo".to_string()],
        )
    }

    fn incoming(text: &str) -> IncomingMessage {
        IncomingMessage {
            id: uuid::Uuid::new_v4(),
            channel: "telegram".to_string(),
            sender_id: "1001".to_string(),
            sender_name: Some("@ana".to_string()),
            text: text.to_string(),
            timestamp: chrono::Utc::now(),
            reply_target: Some("1001".to_string()),
            is_group: false,
        }
    }

    #[test]
    fn test_capture_suggestions_inserts_only_wellformed() {
        let gw = test_gateway();
        let body = "Here's the plan.\n\
                    [agenda] Lock edit | 2025-10-12 14:00\n\
                    [agenda] Foo | not-a-date\n\
                    [agenda] Client review | 2025-10-15 11:00";
        let added = gw.capture_suggestions(body, &incoming("x"));

        assert_eq!(added.len(), 2, "malformed line is silently skipped");
        assert_eq!(added[0].title, "Lock edit");
        assert_eq!(added[1].title, "Client review");
        assert!(added.iter().all(|it| it.created_by.is_none()));
        assert_eq!(gw.agenda.len(), 2);
    }

    #[test]
    fn test_capture_suggestions_none_on_plain_reply() {
        let gw = test_gateway();
        let added = gw.capture_suggestions("Nothing to schedule here.", &incoming("x"));
        assert!(added.is_empty());
        assert!(gw.agenda.is_empty());
    }

    #[test]
    fn test_capture_suggestions_inserted_in_line_order() {
        let gw = test_gateway();
        let body = "[agenda] Later due | 2025-10-20 10:00\n\
                    [agenda] Earlier due | 2025-10-12 10:00";
        let added = gw.capture_suggestions(body, &incoming("x"));

        // Inserted top-to-bottom…
        assert_eq!(added[0].title, "Later due");
        assert!(added[0].id < added[1].id);

        // …while listings stay in due order.
        let listed = gw
            .agenda
            .list(Scope::All, parse_due("2025-10-01 00:00").unwrap());
        assert_eq!(listed[0].title, "Earlier due");
    }
}
