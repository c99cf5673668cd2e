//! Report composition: candidate-model loop, quality gate, fallback.
//!
//! Every failure mode of an attempt (transport error, timeout, gate
//! rejection) folds into the same "record and try the next candidate" path.
//! The composer never errors outward: if every candidate fails, the static
//! fallback report stands in, carrying the last recorded error.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::time::{sleep, timeout};
use tracing::{info, warn};

use crate::domain::{strip_preamble, AttemptOutcome, QuoteBoard, Report, ReportAttempt};
use crate::port::outbound::llm::Llm;

use super::prompt::{build_prompt, FALLBACK_HEADER, REPORT_HEADER, TABLE_GATE_MARKER};

/// Composer tuning. Candidate models and gate markers are data, injected by
/// the caller rather than baked into the loop.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Candidate model identifiers, priority order.
    pub models: Vec<String>,
    /// Per-attempt timeout.
    pub request_timeout: Duration,
    /// Pause after a failed attempt.
    pub retry_delay: Duration,
    /// Substring a response must contain to pass the quality gate.
    pub gate_marker: String,
    /// Header the finished report starts with; leading chatter before it is
    /// stripped.
    pub report_header: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            models: vec!["grok-3-mini".into(), "grok-4-0709".into()],
            request_timeout: Duration::from_secs(120),
            retry_delay: Duration::from_secs(1),
            gate_marker: TABLE_GATE_MARKER.into(),
            report_header: REPORT_HEADER.into(),
        }
    }
}

/// Walks the candidate list until one response passes the quality gate.
pub struct ReportComposer {
    llm: Arc<dyn Llm>,
    config: ComposerConfig,
}

impl ReportComposer {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, config: ComposerConfig) -> Self {
        Self { llm, config }
    }

    /// Generate the report for `board`. Always returns a non-empty report:
    /// candidate exhaustion degrades to the fallback text.
    pub async fn compose(&self, date_line: &str, board: &QuoteBoard) -> Report {
        let prompt = build_prompt(date_line, board);
        let mut last_failure: Option<String> = None;

        for model in &self.config.models {
            let attempt = self.attempt(model, &prompt).await;
            match attempt.outcome {
                AttemptOutcome::Success(text) => {
                    info!(%model, provider = self.llm.name(), "report generated");
                    return Report::new(strip_preamble(&text, &self.config.report_header));
                }
                AttemptOutcome::Failure(reason) => {
                    warn!(%model, %reason, "generation attempt failed");
                    last_failure = Some(reason);
                    sleep(self.config.retry_delay).await;
                }
            }
        }

        let reason =
            last_failure.unwrap_or_else(|| "no candidate models configured".to_string());
        warn!(%reason, "all candidate models failed; using fallback report");
        self.fallback(date_line, Some(&reason))
    }

    /// Produce the degraded fallback report for this run.
    #[must_use]
    pub fn fallback(&self, date_line: &str, error: Option<&str>) -> Report {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        fallback_report(date_line, &timestamp, error)
    }

    async fn attempt(&self, model: &str, prompt: &str) -> ReportAttempt {
        match timeout(self.config.request_timeout, self.llm.complete(model, prompt)).await {
            Err(_) => ReportAttempt::failure(
                model,
                format!("timed out after {:?}", self.config.request_timeout),
            ),
            Ok(Err(e)) => ReportAttempt::failure(model, e.to_string()),
            Ok(Ok(text)) if text.contains(&self.config.gate_marker) => ReportAttempt {
                model: model.to_string(),
                outcome: AttemptOutcome::Success(text),
            },
            Ok(Ok(_)) => ReportAttempt::failure(
                model,
                format!(
                    "quality gate rejected response: missing {:?}",
                    self.config.gate_marker
                ),
            ),
        }
    }
}

/// Static "system offline" report. Pure: callers supply the clock.
#[must_use]
pub fn fallback_report(date_line: &str, timestamp: &str, error: Option<&str>) -> Report {
    let error_section = match error {
        Some(message) => format!("\n**Error Message:** {message}"),
        None => String::new(),
    };

    Report::new(format!(
        "{FALLBACK_HEADER}\n\
         **Date:** {date_line}\n\
         **Time:** {timestamp}\n\
         \n\
         ## System Status: OFFLINE\n\
         The daily crypto report could not be generated.\n\
         **Action Required:** A developer needs to investigate the issue.\
         {error_section}\n\
         \n\
         ---\n\
         Automated alert from the report backup path.\n"
    ))
}
