//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, so
//! dispatch is resolved at compile time.

use bibref_core::{BibDatabase, BibEntry};
use std::path::Path;
use tracing::info;

mod check;
mod info;
mod init;
mod search;
mod types;
mod version;

pub use check::CheckStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use search::{SearchInput, SearchStrategy};
pub use types::{TypesInput, TypesStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Read a JSON array of entries into a database.
async fn load_database(path: &Path) -> anyhow::Result<BibDatabase> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
    let entries: Vec<BibEntry> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;

    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(BibDatabase::from_entries(entries))
}

/// Citation key for display, or a placeholder.
fn display_key(entry: &BibEntry) -> &str {
    entry.key.as_deref().unwrap_or("<no key>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_database_reads_json_array() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("library.json");
        std::fs::write(
            &path,
            r#"[{"key":"a","type":"article","fields":{"title":"Deep"}},{"type":"misc"}]"#,
        )
        .unwrap_or_else(|e| panic!("write: {e}"));

        let db = load_database(&path)
            .await
            .unwrap_or_else(|e| panic!("load: {e}"));
        assert_eq!(db.len(), 2);
        assert!(db.get("a").is_some());
        assert_eq!(display_key(&db.entries()[1]), "<no key>");
    }

    #[tokio::test]
    async fn load_database_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{}").unwrap_or_else(|e| panic!("write: {e}"));

        let err = load_database(&path).await.err().unwrap_or_else(|| panic!("should fail"));
        assert!(err.to_string().starts_with("Cannot parse"));
    }
}
