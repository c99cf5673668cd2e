//! Headless Chromium page capture.
//!
//! Drives a throwaway browser over CDP: navigate, give the page time to
//! settle, strip overlay chrome that would sit on top of the content, and
//! grab a full-page PNG. The browser process is torn down on success and
//! failure alike; a leaked Chromium outlives the run otherwise.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use futures_util::StreamExt;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::port::outbound::capture::PageCapture;

/// Viewport used for consistent captures.
const VIEWPORT: (u32, u32) = (1200, 800);

/// Overlay elements removed before the capture. Best-effort: a failure here
/// only costs cosmetics, never the screenshot.
const OVERLAY_CLEANUP_JS: &str = r#"(() => {
    const selectors = [
        '[data-testid="cookie-banner"]',
        '.notion-overlay-container',
        '.notion-popup',
        '[role="dialog"]'
    ];
    for (const selector of selectors) {
        document.querySelectorAll(selector).forEach((el) => el.remove());
    }
    return true;
})()"#;

/// Full-page capture via headless Chromium.
#[derive(Debug)]
pub struct ChromiumCapture {
    nav_timeout: Duration,
    settle_delay: Duration,
}

impl ChromiumCapture {
    #[must_use]
    pub fn new(nav_timeout: Duration, settle_delay: Duration) -> Self {
        Self {
            nav_timeout,
            settle_delay,
        }
    }
}

impl Default for ChromiumCapture {
    fn default() -> Self {
        Self::new(Duration::from_secs(30), Duration::from_secs(5))
    }
}

fn cdp_err(err: impl std::fmt::Display) -> Error {
    Error::Capture(err.to_string())
}

#[async_trait]
impl PageCapture for ChromiumCapture {
    async fn capture(&self, url: &str) -> Result<Vec<u8>> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .args(vec!["--disable-dev-shm-usage", "--disable-gpu"])
            .window_size(VIEWPORT.0, VIEWPORT.1)
            .build()
            .map_err(Error::Capture)?;

        let (mut browser, mut handler) = Browser::launch(config).await.map_err(cdp_err)?;
        let events = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let result = capture_page(&browser, url, self.nav_timeout, self.settle_delay).await;

        // Teardown runs on every exit path so no Chromium process leaks.
        if let Err(e) = browser.close().await {
            warn!(error = %e, "failed to close browser cleanly");
        }
        let _ = browser.wait().await;
        events.abort();

        result
    }
}

async fn capture_page(
    browser: &Browser,
    url: &str,
    nav_timeout: Duration,
    settle_delay: Duration,
) -> Result<Vec<u8>> {
    let page = timeout(nav_timeout, browser.new_page(url))
        .await
        .map_err(|_| Error::Capture(format!("navigation timed out after {nav_timeout:?}")))?
        .map_err(cdp_err)?;

    // Prefer the load signal, fall back to the fixed settle delay.
    match timeout(nav_timeout, page.wait_for_navigation()).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => debug!(error = %e, "no content-ready signal; relying on settle delay"),
        Err(_) => debug!("content-ready wait timed out; relying on settle delay"),
    }
    tokio::time::sleep(settle_delay).await;

    if let Err(e) = page.evaluate(OVERLAY_CLEANUP_JS).await {
        debug!(error = %e, "overlay cleanup failed");
    }

    let image = page
        .screenshot(
            ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .full_page(true)
                .build(),
        )
        .await
        .map_err(cdp_err)?;

    debug!(bytes = image.len(), "captured page snapshot");
    Ok(image)
}
