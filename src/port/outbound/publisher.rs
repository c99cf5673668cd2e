//! Document workspace publishing port.

use async_trait::async_trait;

use crate::error::Result;

/// A page created by the publisher. Created once per run, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPage {
    pub id: String,
    pub url: String,
}

/// Client for the document workspace.
///
/// Publishing is best-effort beyond the initial page create: a failed
/// follow-up content batch is logged and skipped rather than failing the
/// run, so a mostly-complete page still ships.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Create a page titled `title` holding the rendered `body`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page itself cannot be created.
    async fn publish(&self, title: &str, body: &str) -> Result<PublishedPage>;
}
