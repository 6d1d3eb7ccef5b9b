use super::*;

#[test]
fn test_full_config_parses() {
    let toml = r#"
        [kairo]
        name = "Kairo"
        log_level = "debug"

        [channel.telegram]
        enabled = true
        bot_token = "123:abc"
        username = "kairo_bot"
        nickname = "Kairo"

        [provider.openai]
        api_key = "sk-test"
        model = "gpt-4o-mini"
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.kairo.log_level, "debug");

    let tg = config.channel.telegram.unwrap();
    assert!(tg.enabled);
    assert_eq!(tg.bot_token, "123:abc");
    assert_eq!(tg.username, "kairo_bot");

    let oa = config.provider.openai.unwrap();
    assert_eq!(oa.api_key, "sk-test");
    assert_eq!(oa.base_url, "https://api.openai.com/v1");
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.kairo.name, "Kairo");
    assert_eq!(config.kairo.log_level, "info");
    assert!(config.channel.telegram.is_none());
    assert!(config.provider.openai.is_none());
}

#[test]
fn test_partial_telegram_section_defaults() {
    let toml = r#"
        [channel.telegram]
        bot_token = "123:abc"
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    let tg = config.channel.telegram.unwrap();
    assert!(tg.enabled, "enabled should default to true");
    assert!(tg.username.is_empty());
    assert_eq!(tg.nickname, "Kairo");
}

#[test]
fn test_mention_forms_canonical_first() {
    let tg = TelegramConfig {
        enabled: true,
        bot_token: String::new(),
        username: "kairo_bot".into(),
        nickname: "Kairo".into(),
    };
    assert_eq!(tg.mention_forms(), vec!["@kairo_bot", "Kairo"]);
}

#[test]
fn test_mention_forms_skip_empty() {
    let tg = TelegramConfig {
        enabled: true,
        bot_token: String::new(),
        username: String::new(),
        nickname: "Kairo".into(),
    };
    assert_eq!(tg.mention_forms(), vec!["Kairo"]);
}

#[test]
fn test_openai_defaults() {
    let oa = OpenAiConfig::default();
    assert!(oa.enabled);
    assert!(oa.api_key.is_empty());
    assert_eq!(oa.model, "gpt-4o-mini");
}
