//! Report instruction payload.
//!
//! The prompt embeds the live price table and pins down the structure the
//! quality gate later checks for. Wording here is data: the gate markers the
//! composer validates against come from [`ComposerConfig`](super::composer::ComposerConfig),
//! defaulting to the markers this template emits.

use crate::domain::{format_usd, QuoteBoard};

/// Structural header the finished report must start with.
pub const REPORT_HEADER: &str = "# Daily Crypto Brief";

/// Table-header fragment used as the default quality gate.
pub const TABLE_GATE_MARKER: &str = "| Current Price |";

/// Header of the degraded fallback report.
pub const FALLBACK_HEADER: &str = "# Daily Crypto Brief - Service Alert";

/// Render the partially-filled analysis table from live quotes. The model
/// fills the prediction columns; prices are ours and non-negotiable.
#[must_use]
pub fn render_price_table(board: &QuoteBoard) -> String {
    let mut rows = String::new();
    for quote in board.quotes() {
        let price = quote
            .usd
            .map(format_usd)
            .unwrap_or_else(|| "N/A".to_string());
        rows.push_str(&format!(
            "| {} | {} | [to predict] | [to recommend] | [to justify] | [to predict] | [to recommend] | [to justify] |\n",
            quote.symbol, price
        ));
    }
    rows
}

/// Build the full instruction payload for one generation attempt.
#[must_use]
pub fn build_prompt(date_line: &str, board: &QuoteBoard) -> String {
    let price_table = render_price_table(board);

    format!(
        "You are a crypto market analyst. The table below already contains \
         REAL-TIME spot prices. Complete it.\n\
         \n\
         Requirements:\n\
         1. Keep the provided \"Current Price\" values exactly as given.\n\
         2. Fill in the remaining columns: 30D Predicted, ST Action, \
         ST Justification, 6M Predicted, LT Action, LT Justification.\n\
         3. Respond with ONLY the completed report in the structure below, \
         no extra conversation.\n\
         \n\
         {REPORT_HEADER}\n\
         **Date:** {date_line}\n\
         **Data Source:** Live spot prices from CoinGecko.\n\
         \n\
         ## Market Analysis\n\
         \n\
         | Coin | Current Price | 30D Predicted | ST Action | ST Justification | 6M Predicted | LT Action | LT Justification |\n\
         |---|---|---|---|---|---|---|---|\n\
         {price_table}\
         \n\
         ## High-Potential Tokens (Top 5)\n\
         Select the five strongest setups from the table and summarize why.\n\
         \n\
         ## Related Insights\n\
         - **BTC**: one-line summary of notable flows or positioning.\n\
         - **ETH**: one-line summary of staking or ecosystem data.\n\
         - **SOL**: one-line summary of ecosystem news.\n\
         \n\
         ## Disclaimer\n\
         This report is for educational purposes only. Crypto markets are \
         volatile; do your own research.\n"
    )
}
