use thiserror::Error;

/// Top-level error type for Kairo.
#[derive(Debug, Error)]
pub enum KairoError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Error from the completion provider.
    #[error("provider error: {0}")]
    Provider(String),

    /// Agenda validation error (e.g. empty title).
    #[error("agenda error: {0}")]
    Agenda(String),

    /// Malformed date-time string.
    #[error("invalid date-time '{0}': expected YYYY-MM-DD HH:mm (24h)")]
    Parse(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
