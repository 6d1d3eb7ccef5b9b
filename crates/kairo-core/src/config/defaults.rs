//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Kairo".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_nickname() -> String {
    "Kairo".to_string()
}
