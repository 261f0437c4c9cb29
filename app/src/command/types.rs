use bibref_config::Preferences;

/// Input parameters for the Types command strategy.
#[derive(Debug, Clone, Copy)]
pub struct TypesInput {
    /// List BibLaTeX types regardless of preferences
    pub biblatex: bool,
    /// Include types hidden from the new entry dialog
    pub all: bool,
}

/// Strategy for listing the registered entry types.
#[derive(Debug, Clone, Copy)]
pub struct TypesStrategy;

impl super::CommandStrategy for TypesStrategy {
    type Input = TypesInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut prefs = Preferences::load_or_default()?;
        prefs.biblatex_mode |= input.biblatex;
        let registry = prefs.build_registry();

        println!("=== {} entry types ===\n", registry.mode().as_str());
        for (key, entry_type) in registry.iter() {
            if !input.all && !entry_type.is_visible_in_new_entry_dialog() {
                continue;
            }
            let marker = if entry_type.is_custom() { " (custom)" } else { "" };
            println!("{key}{marker}");
            println!("  Required: {}", entry_type.describe_required_fields());
            if !entry_type.optional_fields().is_empty() {
                println!("  Optional: {}", entry_type.optional_fields().join(", "));
            }
        }

        Ok(())
    }
}
