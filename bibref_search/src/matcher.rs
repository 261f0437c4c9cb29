//! Compiled queries and field matching.

use bibref_core::{BibDatabase, BibEntry, Fields, strip_latex_commands};
use rayon::prelude::*;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::tokenizer::parse_query;

/// How query words are compared with field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    /// Treat each word as a regular expression.
    #[serde(default)]
    pub regex: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(case_sensitive: bool, regex: bool) -> Self {
        Self {
            case_sensitive,
            regex,
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid pattern '{token}': {source}")]
    InvalidPattern {
        token: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
enum Terms {
    Literal(Vec<String>),
    Patterns(Vec<Regex>),
}

/// A tokenized query, ready to be evaluated against many records.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    config: SearchConfig,
    terms: Terms,
}

impl CompiledQuery {
    /// Tokenize `query` and, in regex mode, compile every word.
    pub fn compile(query: &str, config: SearchConfig) -> Result<Self, SearchError> {
        let words = parse_query(query);
        debug!(
            "Compiling query with {} words (case_sensitive={}, regex={})",
            words.len(),
            config.case_sensitive,
            config.regex
        );

        let terms = if config.regex {
            let patterns = words
                .into_iter()
                .map(|token| {
                    RegexBuilder::new(&token)
                        .case_insensitive(!config.case_sensitive)
                        .build()
                        .map_err(|source| SearchError::InvalidPattern { token, source })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Terms::Patterns(patterns)
        } else if config.case_sensitive {
            Terms::Literal(words)
        } else {
            Terms::Literal(words.iter().map(|w| w.to_lowercase()).collect())
        };

        Ok(Self { config, terms })
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Number of words every matching record has to contain.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.terms {
            Terms::Literal(words) => words.len(),
            Terms::Patterns(patterns) => patterns.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every word is found in at least one field of `record`.
    ///
    /// Field content is stripped of LaTeX markup first. Fields without
    /// content are skipped. A query without words matches everything.
    #[must_use]
    pub fn matches<R: Fields + ?Sized>(&self, record: &R) -> bool {
        let mut satisfied = vec![false; self.len()];
        let mut remaining = satisfied.len();
        if remaining == 0 {
            return true;
        }

        for name in record.field_names() {
            let Some(raw) = record.field(name) else {
                continue;
            };
            let mut content = strip_latex_commands(raw);
            if !self.config.case_sensitive {
                content = content.to_lowercase();
            }

            for (idx, done) in satisfied.iter_mut().enumerate() {
                if !*done && self.term_matches(idx, &content) {
                    *done = true;
                    remaining -= 1;
                }
            }
            if remaining == 0 {
                return true;
            }
        }

        false
    }

    fn term_matches(&self, idx: usize, content: &str) -> bool {
        match &self.terms {
            Terms::Literal(words) => content.contains(words[idx].as_str()),
            Terms::Patterns(patterns) => patterns[idx].is_match(content),
        }
    }

    /// Matching entries of `database`, in database order.
    #[must_use]
    pub fn filter<'a>(&self, database: &'a BibDatabase) -> Vec<&'a BibEntry> {
        database
            .entries()
            .par_iter()
            .filter(|entry| self.matches(*entry))
            .collect()
    }
}
