//! coinbrief - scheduled crypto market brief pipeline.
//!
//! One run fetches live spot prices, has an LLM complete a report template,
//! publishes the report as a workspace page, captures a full-page screenshot
//! of it, and posts a digest plus the screenshot to a chat channel. The run
//! is expected to be scheduled externally (cron or similar); each invocation
//! is independent.
//!
//! # Architecture
//!
//! The crate is laid out hexagonally:
//!
//! - [`domain`] - pure types and logic: quotes, chunking, highlights
//! - [`port`] - traits for every external collaborator
//! - [`adapter`] - provider implementations: CoinGecko, chat completions,
//!   Notion, headless Chromium, Telegram
//! - [`app`] - the composer and the run-once pipeline orchestrator
//! - [`config`] - environment-backed configuration
//! - [`error`] - error types for the crate
//!
//! Failure policy: stages with a defined degraded output (price fetch,
//! generation) absorb their own failures and continue with lower-quality
//! results; publish is best-effort past the initial page create; capture and
//! notify failures end the run after a single best-effort error alert.

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
