//! Telegram notification adapter.
//!
//! Delivers the captured report image with a digest caption, and carries the
//! terminal error-alert path. Caption assembly (escaping, budget math,
//! truncation) lives in [`caption`].

pub mod caption;

use async_trait::async_trait;
use chrono::Local;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, ParseMode};
use tracing::info;

use crate::error::Result;
use crate::port::outbound::notifier::Notifier;

/// Telegram notifier bound to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(bot_token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_report(&self, image: &[u8], digest: &str, page_url: &str) -> Result<()> {
        let date_line = Local::now().format("%A, %B %-d, %Y").to_string();
        let caption = caption::build_caption(&date_line, digest, page_url);

        self.bot
            .send_photo(
                self.chat_id,
                InputFile::memory(image.to_vec()).file_name("report.png"),
            )
            .caption(caption)
            .parse_mode(ParseMode::Markdown)
            .await?;

        info!(chat_id = self.chat_id.0, "report delivered");
        Ok(())
    }

    async fn send_error(&self, message: &str) -> Result<()> {
        let text = format!(
            "*Report pipeline error*\n\nThe daily brief run failed:\n`{message}`\n\nCheck the logs for details."
        );

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Markdown)
            .await?;

        info!(chat_id = self.chat_id.0, "error alert delivered");
        Ok(())
    }
}
