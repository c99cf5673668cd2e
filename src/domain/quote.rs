//! Coin quotes and price formatting.

use rust_decimal::Decimal;

/// Coins the report covers: (quote-source id, display ticker), in report order.
pub const TRACKED_COINS: &[(&str, &str)] = &[
    ("bitcoin", "BTC"),
    ("ethereum", "ETH"),
    ("solana", "SOL"),
    ("near", "NEAR"),
    ("internet-computer", "ICP"),
    ("curve-dao-token", "CRV"),
    ("hive", "HIVE"),
    ("avalanche-2", "AVAX"),
    ("chainlink", "LINK"),
    ("dogecoin", "DOGE"),
    ("floki", "FLOKI"),
    ("cardano", "ADA"),
    ("binancecoin", "BNB"),
    ("xrp", "XRP"),
    ("the-open-network", "TON"),
    ("polkadot", "DOT"),
    ("uniswap", "UNI"),
];

/// A single coin's spot quote. A missing price is a representable state
/// (rendered as "N/A"), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinQuote {
    pub id: String,
    pub symbol: String,
    pub usd: Option<Decimal>,
}

/// Ordered set of quotes for the tracked coin list.
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    quotes: Vec<CoinQuote>,
}

impl QuoteBoard {
    #[must_use]
    pub fn new(quotes: Vec<CoinQuote>) -> Self {
        Self { quotes }
    }

    #[must_use]
    pub fn quotes(&self) -> &[CoinQuote] {
        &self.quotes
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CoinQuote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Format a USD amount for the report table: two fraction digits with
/// thousands grouping, widened to eight fraction digits below one cent so
/// micro-priced coins don't render as $0.00.
#[must_use]
pub fn format_usd(value: Decimal) -> String {
    let digits = if value.abs() < Decimal::new(1, 2) {
        8
    } else {
        2
    };
    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}
