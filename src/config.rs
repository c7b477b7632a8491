use clap::Parser;
use std::env;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "location-relay")]
#[command(about = "Relays location submissions to a Telegram chat")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 5)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Timeout for each Telegram call in seconds
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,

    // Max delivery attempts against Telegram
    #[arg(long, default_value_t = 3)]
    pub retry_attempts: u32,
}

// Telegram credentials come from the environment, not the CLI
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    // Absence is not validated; an empty token just fails the downstream call
    pub fn from_env() -> Self {
        Self {
            bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
        }
    }
}
