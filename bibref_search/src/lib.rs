//! Simple multi-word search over bibliography entries.
//!
//! A query is split into words and quoted phrases by [`parse_query`]. An
//! entry matches when every word occurs in at least one of its fields,
//! either as a plain substring or, in regex mode, as a pattern match.

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod matcher;
pub mod rule;
pub mod tokenizer;

pub use matcher::{CompiledQuery, SearchConfig, SearchError};
pub use rule::{BasicSearch, SearchRule};
pub use tokenizer::parse_query;
