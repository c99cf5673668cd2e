//! Outbound adapters, one per external provider.

pub mod browser;
pub mod coingecko;
pub mod llm;
pub mod notion;
pub mod telegram;

pub use browser::ChromiumCapture;
pub use coingecko::CoinGecko;
pub use llm::ChatCompletions;
pub use notion::NotionPublisher;
pub use telegram::TelegramNotifier;
