//! Search rules: the entry point callers use to test a record.

use bibref_core::Fields;
use std::collections::BTreeMap;
use tracing::warn;

use crate::matcher::{CompiledQuery, SearchConfig, SearchError};

/// A predicate over records driven by user-supplied query strings.
pub trait SearchRule: Send + Sync {
    /// Whether `record` satisfies `query`. Never fails: a query that
    /// cannot be evaluated matches nothing.
    fn apply_rule(&self, query: &str, record: &dyn Fields) -> bool;

    /// Whether `query` can be evaluated at all, so a caller can warn the
    /// user before running a search.
    fn validate(&self, query: &str) -> bool;

    /// Multi-field form. Only the first query value is used; an empty map
    /// matches nothing.
    fn apply_rule_to_map(&self, queries: &BTreeMap<String, String>, record: &dyn Fields) -> bool {
        queries
            .values()
            .next()
            .is_some_and(|query| self.apply_rule(query, record))
    }

    fn validate_map(&self, queries: &BTreeMap<String, String>) -> bool {
        queries.values().next().is_some_and(|query| self.validate(query))
    }

    /// `1` for a match, `0` otherwise.
    fn score(&self, query: &str, record: &dyn Fields) -> i32 {
        i32::from(self.apply_rule(query, record))
    }
}

/// Every word of the query must appear in some field.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSearch {
    config: SearchConfig,
}

impl BasicSearch {
    #[must_use]
    pub const fn new(case_sensitive: bool, regex: bool) -> Self {
        Self {
            config: SearchConfig::new(case_sensitive, regex),
        }
    }

    #[must_use]
    pub const fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Compile once for evaluation over many records.
    pub fn compile(&self, query: &str) -> Result<CompiledQuery, SearchError> {
        CompiledQuery::compile(query, self.config)
    }
}

impl SearchRule for BasicSearch {
    fn apply_rule(&self, query: &str, record: &dyn Fields) -> bool {
        match self.compile(query) {
            Ok(compiled) => compiled.matches(record),
            Err(e) => {
                warn!("Search query rejected: {e}");
                false
            }
        }
    }

    fn validate(&self, query: &str) -> bool {
        self.compile(query).is_ok()
    }
}
