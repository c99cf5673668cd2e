//! LLM adapters.

pub mod chat;

pub use chat::ChatCompletions;
