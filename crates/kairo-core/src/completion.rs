//! Completion-call outcomes and degraded-reply wording.

/// Result of a single completion exchange.
///
/// All four outcomes are ordinary values the caller branches on — a failed
/// call never propagates as an error, is never retried, and is never
/// queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The service replied with text.
    Text(String),
    /// No API key configured; no request was attempted.
    Unavailable,
    /// The request failed in transit, returned a non-success status, or
    /// could not be decoded.
    NetworkFailure,
    /// The response decoded but carried no reply text.
    EmptyResponse,
}

/// The fixed degraded-service wording, in one place.
///
/// Returns `None` for [`CompletionOutcome::Text`] — the reply body speaks
/// for itself.
pub fn fallback_text(outcome: &CompletionOutcome) -> Option<&'static str> {
    match outcome {
        CompletionOutcome::Text(_) => None,
        CompletionOutcome::Unavailable => Some(
            "I don't have a completion API key yet. Add one to config.toml \
             (or set OPENAI_API_KEY) to unlock planning.",
        ),
        CompletionOutcome::NetworkFailure => Some("Network error reaching my planning service."),
        CompletionOutcome::EmptyResponse => Some("I'm ready, but I didn't get a response."),
    }
}
