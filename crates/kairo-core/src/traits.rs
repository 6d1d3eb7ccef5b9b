use crate::{
    completion::CompletionOutcome,
    context::Context,
    error::KairoError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Completion provider trait — the brain.
///
/// A single request/response exchange with the external language service.
/// Failures come back as [`CompletionOutcome`] variants, never as errors:
/// the caller always gets something it can turn into a reply.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether a credential is configured. When false, `complete` returns
    /// `Unavailable` without attempting a request.
    fn is_configured(&self) -> bool;

    /// Send a conversation context to the service and get the outcome.
    async fn complete(&self, context: &Context) -> CompletionOutcome;
}

/// Messaging Channel trait — the nervous system.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, KairoError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), KairoError>;

    /// Send a typing indicator to show the assistant is processing.
    async fn send_typing(&self, _target: &str) -> Result<(), KairoError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), KairoError>;
}
