//! An in-memory collection of entries with `crossref` resolution.

use std::collections::HashMap;

use crate::entry::{BibEntry, Fields};

/// Ordered set of entries, addressable by citation key.
#[derive(Debug, Clone, Default)]
pub struct BibDatabase {
    entries: Vec<BibEntry>,
    by_key: HashMap<String, usize>,
}

impl BibDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database keeping the given order. On duplicate keys the
    /// first entry wins for key lookup.
    #[must_use]
    pub fn from_entries(entries: Vec<BibEntry>) -> Self {
        let mut db = Self::new();
        for entry in entries {
            db.insert(entry);
        }
        db
    }

    pub fn insert(&mut self, entry: BibEntry) {
        if let Some(key) = &entry.key {
            self.by_key
                .entry(key.clone())
                .or_insert(self.entries.len());
        }
        self.entries.push(entry);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BibEntry> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    #[must_use]
    pub fn entries(&self) -> &[BibEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field content of `entry`, falling back to its `crossref` parent.
    ///
    /// Only one level of inheritance is followed, and the parent's key is
    /// never inherited.
    #[must_use]
    pub fn resolved_field<'a>(&'a self, entry: &'a BibEntry, name: &str) -> Option<&'a str> {
        if let Some(value) = entry.field(name) {
            return Some(value);
        }
        if name == crate::KEY_FIELD {
            return None;
        }
        entry
            .crossref()
            .and_then(|parent| self.get(parent))
            .and_then(|parent| parent.field(name))
    }

    #[must_use]
    pub fn all_fields_present<S: AsRef<str>>(&self, entry: &BibEntry, names: &[S]) -> bool {
        names
            .iter()
            .all(|name| self.resolved_field(entry, name.as_ref()).is_some())
    }

    #[must_use]
    pub fn at_least_one_present<S: AsRef<str>>(&self, entry: &BibEntry, names: &[S]) -> bool {
        names
            .iter()
            .any(|name| self.resolved_field(entry, name.as_ref()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BibDatabase {
        BibDatabase::from_entries(vec![
            BibEntry::new("proceedings")
                .with_key("conf2020")
                .with_field("booktitle", "Proc. of Systems")
                .with_field("year", "2020"),
            BibEntry::new("inproceedings")
                .with_key("paper1")
                .with_field("title", "Fast Search")
                .with_field("crossref", "conf2020"),
        ])
    }

    #[test]
    fn resolves_field_through_crossref() {
        let db = sample();
        let paper = db.get("paper1").unwrap_or_else(|| panic!("paper1 missing"));
        assert_eq!(db.resolved_field(paper, "year"), Some("2020"));
        assert_eq!(db.resolved_field(paper, "title"), Some("Fast Search"));
        assert_eq!(db.resolved_field(paper, "publisher"), None);
    }

    #[test]
    fn key_is_not_inherited() {
        let db = sample();
        let orphan = BibEntry::new("inproceedings").with_field("crossref", "conf2020");
        assert_eq!(db.resolved_field(&orphan, crate::KEY_FIELD), None);
    }

    #[test]
    fn presence_checks() {
        let db = sample();
        let paper = &db.entries()[1];
        assert!(db.all_fields_present(paper, &["title", "booktitle", "year"]));
        assert!(!db.all_fields_present(paper, &["title", "author"]));
        assert!(db.at_least_one_present(paper, &["author", "title"]));
        assert!(!db.at_least_one_present(paper, &["author", "editor"]));
    }

    #[test]
    fn first_duplicate_key_wins() {
        let db = BibDatabase::from_entries(vec![
            BibEntry::new("misc").with_key("k").with_field("note", "first"),
            BibEntry::new("misc").with_key("k").with_field("note", "second"),
        ]);
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("k").and_then(|e| e.field("note")), Some("first"));
    }
}
