//! Registry of known entry types.
//!
//! The registry starts from the standard set for the chosen mode and is
//! then customized through explicit operations. A copy of the standard
//! set is kept so removing a custom override restores the original.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::entry_type::{CustomEntryType, EntryType, biblatex, bibtex};

/// Which standard type set the registry is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeMode {
    #[default]
    Bibtex,
    Biblatex,
}

impl TypeMode {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Bibtex => "bibtex",
            Self::Biblatex => "biblatex",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid entry type name: '{0}'")]
    InvalidTypeName(String),
}

/// Owned, ordered map from lowercased type name to definition.
#[derive(Debug, Clone)]
pub struct EntryTypeRegistry {
    mode: TypeMode,
    types: BTreeMap<String, EntryType>,
    standard: BTreeMap<String, EntryType>,
    typeless: EntryType,
}

impl EntryTypeRegistry {
    #[must_use]
    pub fn new(mode: TypeMode) -> Self {
        let source = match mode {
            TypeMode::Bibtex => &*bibtex::TYPES,
            TypeMode::Biblatex => &*biblatex::TYPES,
        };
        let standard: BTreeMap<String, EntryType> = source
            .iter()
            .map(|(key, t)| ((*key).to_string(), t.clone()))
            .collect();
        debug!(
            "Built {} entry type registry with {} types",
            mode.as_str(),
            standard.len()
        );

        Self {
            mode,
            types: standard.clone(),
            standard,
            typeless: EntryType::typeless(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> TypeMode {
        self.mode
    }

    /// Look up a type by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntryType> {
        self.types.get(&name.to_lowercase())
    }

    /// Look up the standard definition, ignoring any customization.
    #[must_use]
    pub fn get_standard(&self, name: &str) -> Option<&EntryType> {
        self.standard.get(&name.to_lowercase())
    }

    /// Like [`Self::get`], falling back to the typeless type.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &EntryType {
        self.get(name).unwrap_or(&self.typeless)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(&name.to_lowercase())
    }

    /// Add a custom type, replacing any type with the same name.
    ///
    /// Returns the definition that was replaced.
    pub fn insert_custom(
        &mut self,
        custom: &CustomEntryType,
    ) -> Result<Option<EntryType>, RegistryError> {
        let entry_type = custom.to_entry_type()?;
        info!("Registering custom entry type: {}", entry_type.name());
        Ok(self.types.insert(custom.key(), entry_type))
    }

    /// Remove a type. If it overrode a standard type, the standard one is
    /// reinstated.
    pub fn remove(&mut self, name: &str) -> Option<EntryType> {
        let key = name.to_lowercase();
        let removed = self.types.remove(&key)?;
        if let Some(standard) = self.standard.get(&key) {
            info!("Reinstating standard entry type: {}", standard.name());
            self.types.insert(key, standard.clone());
        } else {
            info!("Removed entry type: {}", removed.name());
        }
        Some(removed)
    }

    /// Drop every customization.
    pub fn restore_defaults(&mut self) {
        self.types.clone_from(&self.standard);
    }

    /// Install custom types read from preferences. Invalid definitions are
    /// skipped and returned so the caller can report them.
    pub fn load_custom_types<I>(&mut self, customs: I) -> Vec<RegistryError>
    where
        I: IntoIterator<Item = CustomEntryType>,
    {
        customs
            .into_iter()
            .filter_map(|custom| self.insert_custom(&custom).err())
            .collect()
    }

    /// Custom types in name order, ready to be written to preferences.
    #[must_use]
    pub fn save_custom_types(&self) -> Vec<CustomEntryType> {
        self.custom_types()
            .map(CustomEntryType::from_entry_type)
            .collect()
    }

    pub fn custom_types(&self) -> impl Iterator<Item = &EntryType> {
        self.types.values().filter(|t| t.is_custom())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryType)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for EntryTypeRegistry {
    fn default() -> Self {
        Self::new(TypeMode::default())
    }
}
