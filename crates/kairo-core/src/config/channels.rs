use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub telegram: Option<TelegramConfig>,
}

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    /// Bot username without the `@` (e.g. "kairo_bot") — the canonical
    /// mention form for the free-text trigger.
    #[serde(default)]
    pub username: String,
    /// Friendly name the assistant also answers to at the start of a
    /// message (e.g. "Kairo").
    #[serde(default = "default_nickname")]
    pub nickname: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bot_token: String::new(),
            username: String::new(),
            nickname: default_nickname(),
        }
    }
}

impl TelegramConfig {
    /// The mention forms the gateway strips, canonical first.
    pub fn mention_forms(&self) -> Vec<String> {
        let mut forms = Vec::new();
        if !self.username.is_empty() {
            forms.push(format!("@{}", self.username));
        }
        if !self.nickname.is_empty() {
            forms.push(self.nickname.clone());
        }
        forms
    }
}
