//! Outbound ports for external collaborators.
//!
//! Each trait covers one provider the pipeline talks to. Adapters live in
//! `crate::adapter::outbound`; tests substitute the fakes in
//! `crate::testkit`.

pub mod capture;
pub mod llm;
pub mod notifier;
pub mod publisher;
pub mod quotes;

pub use capture::PageCapture;
pub use llm::Llm;
pub use notifier::Notifier;
pub use publisher::{PublishedPage, Publisher};
pub use quotes::QuoteSource;
