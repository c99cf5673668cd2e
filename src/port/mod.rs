//! Port definitions: the traits the pipeline depends on.

pub mod outbound;
