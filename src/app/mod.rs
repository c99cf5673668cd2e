//! App orchestration module.
//!
//! Builds the real adapters from configuration and runs one pipeline pass.
//! All external clients are constructed here, once, and passed in as
//! explicit dependencies.

pub mod composer;
pub mod pipeline;
pub mod prompt;

pub use composer::{fallback_report, ComposerConfig, ReportComposer};
pub use pipeline::Pipeline;

use std::sync::Arc;

use crate::adapter::outbound::{
    ChatCompletions, ChromiumCapture, CoinGecko, NotionPublisher, TelegramNotifier,
};
use crate::config::Config;
use crate::error::Result;

/// Main application struct.
pub struct App;

impl App {
    /// Run one report pass with adapters built from `config`.
    pub async fn run(config: Config) -> Result<()> {
        let llm = Arc::new(ChatCompletions::new(
            config.llm.api_url.clone(),
            config.llm.api_key.clone(),
            config.llm.max_tokens,
            config.llm.temperature,
        ));
        let composer = ReportComposer::new(
            llm,
            ComposerConfig {
                models: config.llm.models.clone(),
                request_timeout: config.llm.request_timeout,
                retry_delay: config.llm.retry_delay,
                ..ComposerConfig::default()
            },
        );

        let pipeline = Pipeline::new(
            Arc::new(CoinGecko::new(config.quotes.api_url)),
            composer,
            Arc::new(NotionPublisher::new(
                config.notion.api_url,
                config.notion.token,
                config.notion.database_id,
            )),
            Arc::new(ChromiumCapture::default()),
            Arc::new(TelegramNotifier::new(
                &config.telegram.bot_token,
                config.telegram.chat_id,
            )),
        );

        pipeline.run().await
    }
}
