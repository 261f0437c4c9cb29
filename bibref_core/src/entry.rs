//! Bibliographic entries and the read-only field view used by search.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Pseudo-field name under which the citation key is exposed.
pub const KEY_FIELD: &str = "bibtexkey";

/// Read-only access to the named text fields of a record.
///
/// Implementors may return `None` for a listed name; callers skip such
/// fields instead of treating them as errors.
pub trait Fields {
    /// Names of all fields carried by the record.
    fn field_names(&self) -> Vec<&str>;

    /// Content of a single field.
    fn field(&self, name: &str) -> Option<&str>;
}

/// A single bibliography entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Citation key, e.g. `knuth1984`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Entry type name as written in the source (`article`, `Book`, ...).
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl BibEntry {
    #[must_use]
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            key: None,
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set the citation key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set a field, builder style. Field names are stored lowercased.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&name.to_lowercase())
    }

    /// Key of the entry this one inherits fields from, if any.
    #[must_use]
    pub fn crossref(&self) -> Option<&str> {
        self.fields.get("crossref").map(String::as_str)
    }
}

impl Fields for BibEntry {
    /// Regular fields, plus [`KEY_FIELD`] when the entry has a key.
    fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        if self.key.is_some() {
            names.push(KEY_FIELD);
        }
        names
    }

    fn field(&self, name: &str) -> Option<&str> {
        if name == KEY_FIELD {
            return self.key.as_deref();
        }
        self.fields.get(name).map(String::as_str)
    }
}

impl Fields for BTreeMap<String, String> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Fields for HashMap<String, String> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_is_exposed_as_pseudo_field() {
        let entry = BibEntry::new("article").with_key("knuth1984");
        assert_eq!(entry.field(KEY_FIELD), Some("knuth1984"));
        assert_eq!(entry.field_names(), vec![KEY_FIELD]);
        assert!(BibEntry::new("article").field_names().is_empty());
    }

    #[test]
    fn field_names_are_lowercased() {
        let entry = BibEntry::new("book").with_field("Title", "TAOCP");
        assert_eq!(entry.field("title"), Some("TAOCP"));
        assert_eq!(entry.field("Title"), None);
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"key":"a1","type":"article","fields":{"title":"Deep Learning"}}"#;
        let entry: BibEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.key.as_deref(), Some("a1"));
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.field("title"), Some("Deep Learning"));
    }

    #[test]
    fn map_records_implement_fields() {
        let mut map = HashMap::new();
        map.insert("title".to_string(), "Systems".to_string());
        assert_eq!(map.field("title"), Some("Systems"));
        assert_eq!(map.field_names(), vec!["title"]);
    }
}
