mod capture;
mod commands;
mod gateway;

use clap::{Parser, Subcommand};
use kairo_agenda::Store;
use kairo_channels::TelegramChannel;
use kairo_core::{
    completion::{fallback_text, CompletionOutcome},
    config,
    context::Context,
    traits::{Channel, Provider},
};
use kairo_providers::OpenAiProvider;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "kairo",
    version,
    about = "Kairo — AI producer & scheduling assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the assistant.
    Start,
    /// Check configuration and provider readiness.
    Status,
    /// Send a one-shot message to the completion service.
    Ask {
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;
            init_tracing(&cfg.kairo.log_level);

            let tg = cfg.channel.telegram.clone().unwrap_or_default();
            // The platform credential is the one thing we refuse to run
            // without; everything else degrades.
            if tg.bot_token.is_empty() {
                anyhow::bail!(
                    "Telegram bot_token is missing. Set it in config.toml \
                     or the TELEGRAM_BOT_TOKEN env var."
                );
            }
            if !tg.enabled {
                anyhow::bail!("Telegram channel is disabled in config.toml.");
            }

            let provider = build_provider(&cfg);
            if !provider.is_configured() {
                tracing::warn!(
                    "no completion API key configured — chat replies will be degraded"
                );
            }

            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            channels.insert(
                "telegram".to_string(),
                Arc::new(TelegramChannel::new(tg.clone())),
            );

            // The one store handle for the whole process.
            let agenda = Store::new();

            println!("Kairo — starting assistant...");
            let gw = Arc::new(gateway::Gateway::new(
                provider,
                channels,
                agenda,
                cfg.kairo.name.clone(),
                tg.mention_forms(),
            ));
            gw.run().await?;
        }
        Commands::Status => {
            init_tracing("info");
            let cfg = config::load(&cli.config)?;
            println!("Kairo — Status Check\n");
            println!("Config: {}", cli.config);

            match cfg.channel.telegram {
                Some(ref tg) if tg.enabled && !tg.bot_token.is_empty() => {
                    println!("  telegram: configured");
                    if tg.username.is_empty() {
                        println!("  mention: nickname '{}' only (set username)", tg.nickname);
                    } else {
                        println!("  mention: @{} / {}", tg.username, tg.nickname);
                    }
                }
                Some(ref tg) if tg.enabled => println!("  telegram: enabled but missing bot_token"),
                _ => println!("  telegram: disabled"),
            }

            let provider = build_provider(&cfg);
            println!(
                "  {}: {}",
                provider.name(),
                if provider.is_configured() {
                    "configured"
                } else {
                    "no API key (degraded)"
                }
            );
        }
        Commands::Ask { message } => {
            init_tracing("info");
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: kairo ask <message>");
            }

            let prompt = message.join(" ");
            let cfg = config::load(&cli.config)?;
            let provider = build_provider(&cfg);

            let context = Context::new(&prompt);
            match provider.complete(&context).await {
                CompletionOutcome::Text(text) => println!("{text}"),
                degraded => {
                    if let Some(text) = fallback_text(&degraded) {
                        println!("{text}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Build the configured completion provider.
fn build_provider(cfg: &config::Config) -> Arc<dyn Provider> {
    let oa = cfg.provider.openai.clone().unwrap_or_default();
    Arc::new(OpenAiProvider::from_config(&oa))
}
