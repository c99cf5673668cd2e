//! Pure domain types and logic: quotes, report text handling, chunking,
//! highlight extraction. Nothing in this module performs I/O.

pub mod chunk;
pub mod highlight;
pub mod quote;
pub mod report;

pub use chunk::chunk_lines;
pub use highlight::extract_highlights;
pub use quote::{format_usd, CoinQuote, QuoteBoard, TRACKED_COINS};
pub use report::{strip_preamble, AttemptOutcome, Report, ReportAttempt};
