use bibref_config::Preferences;
use bibref_core::{BibDatabase, BibEntry, EntryTypeRegistry, KEY_FIELD};
use std::path::PathBuf;
use tracing::info;

use super::{display_key, load_database};

/// Strategy for reporting entries that lack required fields.
#[derive(Debug, Clone, Copy)]
pub struct CheckStrategy;

impl super::CommandStrategy for CheckStrategy {
    type Input = PathBuf;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let prefs = Preferences::load_or_default()?;
        let registry = prefs.build_registry();
        let db = load_database(&input).await?;

        let problems: Vec<String> = db
            .entries()
            .iter()
            .filter_map(|entry| describe_problem(&registry, &db, entry))
            .collect();
        info!("{} of {} entries incomplete", problems.len(), db.len());

        for line in &problems {
            println!("{line}");
        }
        println!(
            "{} of {} entries are missing required fields",
            problems.len(),
            db.len()
        );

        Ok(())
    }
}

fn describe_problem(
    registry: &EntryTypeRegistry,
    db: &BibDatabase,
    entry: &BibEntry,
) -> Option<String> {
    let entry_type = registry.resolve(&entry.entry_type);
    if entry_type.has_all_required_fields(entry, db) {
        return None;
    }

    let mut missing: Vec<String> = entry_type
        .missing_requirements(entry, db)
        .iter()
        .map(ToString::to_string)
        .collect();
    if db.resolved_field(entry, KEY_FIELD).is_none() {
        missing.insert(0, KEY_FIELD.to_string());
    }
    if missing.is_empty() {
        missing.push(format!("unknown type '{}'", entry.entry_type));
    }

    Some(format!(
        "{} [{}]: missing {}",
        display_key(entry),
        entry_type.name(),
        missing.join(", ")
    ))
}
