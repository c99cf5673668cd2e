//! Page capture port.

use async_trait::async_trait;

use crate::error::Result;

/// Renders a published page and captures it as an image.
#[async_trait]
pub trait PageCapture: Send + Sync {
    /// Capture a full-page raster image of `url`, returning the raw bytes.
    ///
    /// # Errors
    ///
    /// Capture failure is fatal to the run and propagates to the
    /// orchestrator.
    async fn capture(&self, url: &str) -> Result<Vec<u8>>;
}
