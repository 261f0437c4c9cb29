use bibref_config::Preferences;
use tracing::info;

/// Strategy for displaying the active preferences.
///
/// Outputs:
/// - Preferences file location and whether it exists
/// - Entry type mode
/// - Default search settings
/// - Custom entry types
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Preferences::default_path()?;
        let prefs = Preferences::load_or_default()?;
        info!("Showing preferences from {}", path.display());

        println!("=== bibref Preferences ===\n");

        println!("File:");
        println!("  Path: {}", path.display());
        println!(
            "  Status: {}",
            if path.exists() { "present" } else { "not created (defaults in use)" }
        );
        println!();

        println!("Entry Types:");
        println!("  Mode: {}", prefs.type_mode().as_str());
        println!();

        println!("Search:");
        println!("  Case Sensitive: {}", prefs.search.case_sensitive);
        println!("  Regular Expressions: {}", prefs.search.regex);
        println!();

        println!("Custom Entry Types:");
        if prefs.custom_entry_types.is_empty() {
            println!("  (none)");
        }
        for custom in &prefs.custom_entry_types {
            println!("  {}: required {}", custom.name, format_fields(&custom.required));
        }

        Ok(())
    }
}

fn format_fields(fields: &[String]) -> String {
    if fields.is_empty() {
        "(none)".to_string()
    } else {
        fields.join(", ")
    }
}
