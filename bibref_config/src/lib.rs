//! User preferences stored as JSON under `~/bibref/preferences.json`.
//!
//! Preferences pick the entry type mode, the default search options and
//! any custom entry types. The registry is built from them on startup
//! and custom types are written back with [`Preferences::store_custom_types`].

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

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use bibref_core::{CustomEntryType, EntryTypeRegistry, TypeMode};
use bibref_search::SearchConfig;

const CONFIG_DIR: &str = "bibref";
const CONFIG_FILE: &str = "preferences.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub biblatex_mode: bool,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub custom_entry_types: Vec<CustomEntryType>,
}

impl Preferences {
    /// Default preferences file, `~/bibref/preferences.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Preferences file not found at: {}. Please run 'bibref init' to create it.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Like [`Self::load`], but a missing file yields the defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
        let prefs: Self = serde_json::from_str(&content)
            .with_context(|| format!("Malformed preferences in {}", path.display()))?;
        Ok(prefs)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))?;
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR);

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write default preferences to `path`, refusing to overwrite.
    pub fn create_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Preferences file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        Self::default().save_to(path)
    }

    pub fn create_default() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::create_at(&config_path)?;
        info!("Created preferences at {}", config_path.display());
        Ok(config_path)
    }

    #[must_use]
    pub const fn type_mode(&self) -> TypeMode {
        if self.biblatex_mode {
            TypeMode::Biblatex
        } else {
            TypeMode::Bibtex
        }
    }

    /// Standard types for the configured mode plus the stored custom types.
    #[must_use]
    pub fn build_registry(&self) -> EntryTypeRegistry {
        let mut registry = EntryTypeRegistry::new(self.type_mode());
        for err in registry.load_custom_types(self.custom_entry_types.iter().cloned()) {
            warn!("Skipping custom entry type: {err}");
        }
        registry
    }

    /// Replace the stored custom types with the registry's current ones.
    pub fn store_custom_types(&mut self, registry: &EntryTypeRegistry) {
        self.custom_entry_types = registry.save_custom_types();
    }
}
