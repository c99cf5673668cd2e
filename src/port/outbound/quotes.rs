//! Quote source port.

use async_trait::async_trait;

use crate::domain::QuoteBoard;
use crate::error::Result;

/// Client for a spot-price quote source.
///
/// One call fetches the whole tracked coin list. Failure is total: the
/// caller does not retry, it degrades to the fallback report instead.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch current quotes for every tracked coin.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure or non-success status.
    async fn fetch(&self) -> Result<QuoteBoard>;
}
