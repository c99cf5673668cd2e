//! CoinGecko quote source.
//!
//! One `simple/price` GET covers the whole tracked coin list. There is no
//! retry: a failed fetch is a total failure and the composer degrades to the
//! fallback report.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{CoinQuote, QuoteBoard, TRACKED_COINS};
use crate::error::{Error, Result};
use crate::port::outbound::quotes::QuoteSource;

/// Per-request timeout for the quote fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// CoinGecko `simple/price` client.
#[derive(Debug)]
pub struct CoinGecko {
    client: Client,
    base_url: String,
}

impl CoinGecko {
    /// Create a client against `base_url` (e.g. `https://api.coingecko.com/api/v3`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// Per-coin currency mapping in the `simple/price` response.
#[derive(Debug, Deserialize)]
struct CurrencyQuote {
    usd: Option<Decimal>,
}

#[async_trait]
impl QuoteSource for CoinGecko {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch(&self) -> Result<QuoteBoard> {
        let ids = TRACKED_COINS
            .iter()
            .map(|(id, _)| *id)
            .collect::<Vec<_>>()
            .join(",");

        let url = format!("{}/simple/price", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", "usd")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<HashMap<String, CurrencyQuote>>()
            .await?;

        let quotes = TRACKED_COINS
            .iter()
            .map(|(id, symbol)| CoinQuote {
                id: (*id).to_string(),
                symbol: (*symbol).to_string(),
                usd: response.get(*id).and_then(|q| q.usd),
            })
            .collect();

        let board = QuoteBoard::new(quotes);
        debug!(coins = board.len(), "fetched live quotes");
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn response_deserialization() {
        let json = r#"{
            "bitcoin": {"usd": 65432.1},
            "floki": {"usd": 0.00012345}
        }"#;

        let parsed: HashMap<String, CurrencyQuote> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed["bitcoin"].usd, Some(dec!(65432.1)));
        assert_eq!(parsed["floki"].usd, Some(dec!(0.00012345)));
    }

    #[test]
    fn missing_currency_is_representable() {
        let json = r#"{"bitcoin": {}}"#;
        let parsed: HashMap<String, CurrencyQuote> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed["bitcoin"].usd, None);
    }

    #[test]
    fn board_preserves_tracked_order_and_fills_gaps() {
        // Simulate the mapping step on a partial response.
        let mut response = HashMap::new();
        response.insert(
            "ethereum".to_string(),
            CurrencyQuote {
                usd: Some(dec!(3200)),
            },
        );

        let quotes: Vec<CoinQuote> = TRACKED_COINS
            .iter()
            .map(|(id, symbol)| CoinQuote {
                id: (*id).to_string(),
                symbol: (*symbol).to_string(),
                usd: response.get(*id).and_then(|q| q.usd),
            })
            .collect();

        assert_eq!(quotes.len(), TRACKED_COINS.len());
        assert_eq!(quotes[0].symbol, "BTC");
        assert_eq!(quotes[0].usd, None);
        assert_eq!(quotes[1].symbol, "ETH");
        assert_eq!(quotes[1].usd, Some(dec!(3200)));
    }
}
