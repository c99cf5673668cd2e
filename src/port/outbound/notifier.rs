//! Chat notification port.

use async_trait::async_trait;

use crate::error::Result;

/// Sends run results (and failures) to a chat channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the captured page image with a digest caption linking to
    /// `page_url`.
    ///
    /// # Errors
    ///
    /// Delivery failure is fatal to the run.
    async fn send_report(&self, image: &[u8], digest: &str, page_url: &str) -> Result<()>;

    /// Post a plain error alert. Used on the terminal failure path; callers
    /// only log a failure here, never escalate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert cannot be delivered.
    async fn send_error(&self, message: &str) -> Result<()>;
}
