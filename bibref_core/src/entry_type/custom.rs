use serde::{Deserialize, Serialize};

use super::{EntryType, Requirement, TypeOrigin};
use crate::registry::RegistryError;

/// User-defined entry type as stored in preferences.
///
/// Required fields use the customization notation, so `author/editor`
/// means either field satisfies the requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntryType {
    pub name: String,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
    #[serde(default)]
    pub primary_optional: Vec<String>,
}

impl CustomEntryType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: Vec::new(),
            optional: Vec::new(),
            primary_optional: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_required(mut self, fields: &[&str]) -> Self {
        self.required = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_optional(mut self, fields: &[&str]) -> Self {
        self.optional = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_primary_optional(mut self, fields: &[&str]) -> Self {
        self.primary_optional = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Registry key for this type.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Check the name and build the registry definition.
    pub fn to_entry_type(&self) -> Result<EntryType, RegistryError> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidTypeName(self.name.clone()));
        }

        let required = self
            .required
            .iter()
            .filter_map(|s| Requirement::parse(s))
            .collect();
        let normalize = |fields: &[String]| -> Vec<String> {
            fields
                .iter()
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect()
        };

        Ok(EntryType::new(self.name.clone())
            .with_requirements(required)
            .with_optional_fields(
                normalize(&self.optional),
                normalize(&self.primary_optional),
            )
            .with_origin(TypeOrigin::Custom))
    }

    /// Inverse of [`Self::to_entry_type`], used when saving.
    #[must_use]
    pub fn from_entry_type(entry_type: &EntryType) -> Self {
        Self {
            name: entry_type.name().to_string(),
            required: entry_type.required_fields_for_customization(),
            optional: entry_type.optional_fields().to_vec(),
            primary_optional: entry_type.primary_optional_fields().to_vec(),
        }
    }
}
