//! Core types - pure abstractions shared across the codebase.

mod link;

pub use link::{LinkKind, strip_query_fragment};
