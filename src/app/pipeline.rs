//! The run-once report pipeline.
//!
//! Stages run in a fixed sequence with no internal concurrency. Stages with
//! a defined degraded output (quote fetch, generation) absorb their own
//! failures; publish, capture, and notify failures are fatal and surface
//! through a single catch that fires the best-effort error alert.

use std::sync::Arc;

use chrono::Local;
use tracing::{error, info, warn};

use crate::app::composer::ReportComposer;
use crate::app::prompt::FALLBACK_HEADER;
use crate::domain::extract_highlights;
use crate::error::Result;
use crate::port::outbound::{Notifier, PageCapture, Publisher, QuoteSource};

/// One pipeline pass over explicit port handles.
pub struct Pipeline {
    quotes: Arc<dyn QuoteSource>,
    composer: ReportComposer,
    publisher: Arc<dyn Publisher>,
    capture: Arc<dyn PageCapture>,
    notifier: Arc<dyn Notifier>,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        composer: ReportComposer,
        publisher: Arc<dyn Publisher>,
        capture: Arc<dyn PageCapture>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            quotes,
            composer,
            publisher,
            capture,
            notifier,
        }
    }

    /// Run the pipeline once. On any fatal stage failure an error alert is
    /// attempted before the error is returned; alert failures are only
    /// logged so the failure path cannot loop.
    pub async fn run(&self) -> Result<()> {
        match self.run_stages().await {
            Ok(()) => {
                info!("report pipeline completed");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "report pipeline failed");
                if let Err(alert_err) = self.notifier.send_error(&e.to_string()).await {
                    warn!(error = %alert_err, "failed to deliver error alert");
                }
                Err(e)
            }
        }
    }

    async fn run_stages(&self) -> Result<()> {
        let date_line = Local::now().format("%A, %B %-d, %Y").to_string();

        info!(source = self.quotes.name(), "fetching live quotes");
        let report = match self.quotes.fetch().await {
            Ok(board) => self.composer.compose(&date_line, &board).await,
            Err(e) => {
                warn!(error = %e, "quote fetch failed; degrading to fallback report");
                self.composer.fallback(
                    &date_line,
                    Some(&format!("failed to fetch live price data: {e}")),
                )
            }
        };

        let title = format!("Daily Crypto Brief - {date_line}");
        let page = self.publisher.publish(&title, report.as_str()).await?;
        info!(page_id = %page.id, url = %page.url, "report published");

        let image = self.capture.capture(&page.url).await?;

        let digest = extract_highlights(report.as_str(), FALLBACK_HEADER);
        self.notifier.send_report(&image, &digest, &page.url).await?;

        Ok(())
    }
}
