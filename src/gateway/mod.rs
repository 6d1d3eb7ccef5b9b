//! Gateway — the main event loop connecting channels, the agenda store,
//! and the completion provider.

mod mention;
mod pipeline;

use kairo_agenda::Store;
use kairo_core::{
    message::{IncomingMessage, OutgoingMessage},
    traits::{Channel, Provider},
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info};

/// The central gateway that routes messages between channels, the agenda
/// store, and the provider.
pub struct Gateway {
    pub(super) provider: Arc<dyn Provider>,
    pub(super) channels: HashMap<String, Arc<dyn Channel>>,
    pub(super) agenda: Store,
    pub(super) bot_name: String,
    /// Mention forms the free-text trigger answers to, canonical first.
    pub(super) mention_forms: Vec<String>,
    pub(super) uptime: Instant,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        provider: Arc<dyn Provider>,
        channels: HashMap<String, Arc<dyn Channel>>,
        agenda: Store,
        bot_name: String,
        mention_forms: Vec<String>,
    ) -> Self {
        Self {
            provider,
            channels,
            agenda,
            bot_name,
            mention_forms,
            uptime: Instant::now(),
        }
    }

    /// Run the main event loop.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Kairo gateway running | provider: {} | channels: {}",
            self.provider.name(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        // Main event loop with graceful shutdown. Each event runs to
        // completion on its own task; the agenda store serializes its own
        // mutations, so interleaving across the completion await is safe.
        loop {
            tokio::select! {
                Some(incoming) = rx.recv() => {
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.handle_message(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    /// Graceful shutdown: stop channels.
    async fn shutdown(&self) {
        info!("Shutting down...");
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                error!("failed to stop channel {name}: {e}");
            }
        }
        info!("Shutdown complete.");
    }

    /// Send a plain text message back to the sender.
    pub(super) async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        let msg = OutgoingMessage::reply_to(incoming, text);

        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        } else {
            error!("no channel found for '{}'", incoming.channel);
        }
    }
}
