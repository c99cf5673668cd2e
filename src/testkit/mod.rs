//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests). Each fake implements one outbound port with
//! scriptable behavior and call recording.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::QuoteBoard;
use crate::error::{Error, Result};
use crate::port::outbound::{Llm, Notifier, PageCapture, PublishedPage, Publisher, QuoteSource};

/// Scripted LLM: replays a fixed sequence of outcomes and records the model
/// asked for on each call.
#[derive(Default)]
pub struct ScriptedLlm {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    calls: Mutex<Vec<String>>,
}

enum ScriptedOutcome {
    Text(String),
    Error(String),
}

impl ScriptedLlm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.script
            .lock()
            .expect("lock script")
            .push_back(ScriptedOutcome::Text(text.into()));
        self
    }

    #[must_use]
    pub fn then_error(self, reason: impl Into<String>) -> Self {
        self.script
            .lock()
            .expect("lock script")
            .push_back(ScriptedOutcome::Error(reason.into()));
        self
    }

    /// Models requested so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock calls").clone()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, model: &str, _prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .expect("lock calls")
            .push(model.to_string());
        match self.script.lock().expect("lock script").pop_front() {
            Some(ScriptedOutcome::Text(text)) => Ok(text),
            Some(ScriptedOutcome::Error(reason)) => Err(Error::Connection(reason)),
            None => Err(Error::Connection("script exhausted".into())),
        }
    }
}

/// Quote source returning a fixed board or a fixed error.
pub struct StaticQuotes {
    outcome: Mutex<Option<std::result::Result<QuoteBoard, String>>>,
}

impl StaticQuotes {
    #[must_use]
    pub fn board(board: QuoteBoard) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(board))),
        }
    }

    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(reason.into()))),
        }
    }
}

#[async_trait]
impl QuoteSource for StaticQuotes {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<QuoteBoard> {
        match self.outcome.lock().expect("lock outcome").take() {
            Some(Ok(board)) => Ok(board),
            Some(Err(reason)) => Err(Error::Connection(reason)),
            None => Ok(QuoteBoard::default()),
        }
    }
}

/// Publisher that records what it was asked to publish.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (title, body) pairs published so far.
    #[must_use]
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().expect("lock published").clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, title: &str, body: &str) -> Result<PublishedPage> {
        self.published
            .lock()
            .expect("lock published")
            .push((title.to_string(), body.to_string()));
        Ok(PublishedPage {
            id: "page-1".into(),
            url: "https://workspace.test/page-1".into(),
        })
    }
}

/// Capture fake returning fixed bytes, or failing when scripted to.
pub struct StaticCapture {
    image: Option<Vec<u8>>,
}

impl StaticCapture {
    #[must_use]
    pub fn image(bytes: Vec<u8>) -> Self {
        Self { image: Some(bytes) }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self { image: None }
    }
}

#[async_trait]
impl PageCapture for StaticCapture {
    async fn capture(&self, _url: &str) -> Result<Vec<u8>> {
        match &self.image {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(Error::Capture("browser crashed".into())),
        }
    }
}

/// Notifier that records every delivery for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    reports: Arc<Mutex<Vec<(Vec<u8>, String, String)>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (image, digest, page_url) triples delivered so far.
    #[must_use]
    pub fn reports(&self) -> Vec<(Vec<u8>, String, String)> {
        self.reports.lock().expect("lock reports").clone()
    }

    /// Error alerts delivered so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("lock errors").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_report(&self, image: &[u8], digest: &str, page_url: &str) -> Result<()> {
        self.reports.lock().expect("lock reports").push((
            image.to_vec(),
            digest.to_string(),
            page_url.to_string(),
        ));
        Ok(())
    }

    async fn send_error(&self, message: &str) -> Result<()> {
        self.errors
            .lock()
            .expect("lock errors")
            .push(message.to_string());
        Ok(())
    }
}
