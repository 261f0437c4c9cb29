use bibref_config::Preferences;

/// Strategy for initializing the preferences file.
///
/// This strategy creates the default preferences at `~/bibref/preferences.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Preferences::create_default()?;

        println!("Created preferences file at: {}", path.display());
        println!();
        println!("Configuration options:");
        println!("   - biblatex_mode: use BibLaTeX entry types instead of BibTeX");
        println!("   - search.case_sensitive: default for 'bibref search'");
        println!("   - search.regex: treat query words as regular expressions");
        println!("   - custom_entry_types: your own types, e.g.");
        println!(r#"       {{ "name": "Dataset", "required": ["author/editor", "title", "url"] }}"#);
        println!();
        Ok(())
    }
}
