//! Telegram chat delivery over the Bot API.

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Credentials for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: String,
}

impl TelegramConfig {
    /// Read credentials from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
    ///
    /// Returns `None` if either variable is missing. Credentials never
    /// come from the config file.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;

        Some(Self { bot_token, chat_id })
    }
}

/// Sends plain-text messages to a Telegram chat.
pub struct TelegramNotifier {
    http: HttpClient,
    config: TelegramConfig,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            http: HttpClient::new(),
            config,
        }
    }

    fn send_url(&self) -> String {
        format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(self.send_url())
            .json(&serde_json::json!({
                "chat_id": self.config.chat_id,
                "text": message,
            }))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(NotifyError::Rejected { status, body })
    }
}
