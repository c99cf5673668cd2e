//! Adapters implementing the outbound ports against real providers.

pub mod outbound;
