use bibref_config::Preferences;
use bibref_core::Fields;
use bibref_search::{BasicSearch, SearchConfig, SearchRule};
use std::path::PathBuf;
use tracing::{info, warn};

use super::{display_key, load_database};

/// Input parameters for the Search command strategy.
#[derive(Debug, Clone)]
pub struct SearchInput {
    /// JSON file with the entries to search
    pub file: PathBuf,
    /// Raw query text
    pub query: String,
    /// Force case-sensitive matching
    pub case_sensitive: bool,
    /// Force regex mode
    pub regex: bool,
}

/// Strategy for running a simple search over an entry file.
///
/// Command-line flags can only switch modes on; preferences supply the
/// defaults.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let prefs = Preferences::load_or_default()?;
        let config = SearchConfig::new(
            input.case_sensitive || prefs.search.case_sensitive,
            input.regex || prefs.search.regex,
        );
        let rule = BasicSearch::with_config(config);

        if !rule.validate(&input.query) {
            warn!("Invalid regular expression in query: {}", input.query);
            println!("Invalid regular expression: {}", input.query);
            return Ok(());
        }

        let db = load_database(&input.file).await?;
        let compiled = rule.compile(&input.query)?;
        let hits = compiled.filter(&db);
        info!("Query matched {} of {} entries", hits.len(), db.len());

        for entry in &hits {
            let title = entry.field("title").unwrap_or("");
            println!("{:<24} {title}", display_key(entry));
        }
        println!("{} match(es)", hits.len());

        Ok(())
    }
}
