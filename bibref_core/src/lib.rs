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

pub mod database;
pub mod entry;
pub mod entry_type;
pub mod latex;
pub mod registry;

pub use database::BibDatabase;
pub use entry::{BibEntry, Fields, KEY_FIELD};
pub use entry_type::{
    Completeness, CustomEntryType, EntryType, Requirement, TypeOrigin, UTILITY_FIELDS,
};
pub use latex::strip_latex_commands;
pub use registry::{EntryTypeRegistry, RegistryError, TypeMode};
