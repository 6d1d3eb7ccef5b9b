mod channels;
mod defaults;
mod providers;

#[cfg(test)]
mod tests;

pub use channels::*;
pub use providers::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::KairoError;
use defaults::*;

/// Top-level Kairo configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub kairo: KairoConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KairoConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for KairoConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist, then applies env-var
/// fallbacks for credentials left empty in the file (`TELEGRAM_BOT_TOKEN`,
/// `OPENAI_API_KEY`). Whether a missing credential is fatal is the
/// caller's decision: the platform token is, the completion key is not.
pub fn load(path: &str) -> Result<Config, KairoError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KairoError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| KairoError::Config(format!("failed to parse config: {e}")))?
    } else {
        tracing::info!("Config file not found at {}, using defaults", path.display());
        Config::default()
    };

    apply_env_fallbacks(&mut config);
    Ok(config)
}

/// Fill empty credentials from the environment.
fn apply_env_fallbacks(config: &mut Config) {
    let tg = config
        .channel
        .telegram
        .get_or_insert_with(TelegramConfig::default);
    if tg.bot_token.is_empty() {
        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            tg.bot_token = token;
        }
    }

    let oa = config
        .provider
        .openai
        .get_or_insert_with(OpenAiConfig::default);
    if oa.api_key.is_empty() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            oa.api_key = key;
        }
    }
}
