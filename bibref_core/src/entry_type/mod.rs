//! Entry type definitions: which fields each kind of reference needs.
//!
//! A type's required fields are a list of [`Requirement`]s. Most are a
//! single field; some accept any one of several fields (`author/editor`).
//! The same list drives the customization view, the human-readable
//! description and, unless a type sets its own checked list, the
//! completeness check.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::database::BibDatabase;
use crate::entry::{BibEntry, KEY_FIELD};

pub(crate) mod biblatex;
pub(crate) mod bibtex;
mod custom;

pub use custom::CustomEntryType;

/// Fields every type carries for internal bookkeeping.
pub const UTILITY_FIELDS: &[&str] = &["search"];

/// One required slot of an entry type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Field(String),
    /// Satisfied when at least one of the alternatives is present.
    AnyOf(Vec<String>),
}

impl Requirement {
    /// Parse the customization notation: `title` or `author/editor`.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        let alternatives: Vec<String> = spec
            .split('/')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        match alternatives.len() {
            0 => None,
            1 => alternatives.into_iter().next().map(Self::Field),
            _ => Some(Self::AnyOf(alternatives)),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        match self {
            Self::Field(f) => std::slice::from_ref(f),
            Self::AnyOf(fs) => fs,
        }
    }

    #[must_use]
    pub fn is_satisfied_by(&self, entry: &BibEntry, database: &BibDatabase) -> bool {
        database.at_least_one_present(entry, self.fields())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields().join("/"))
    }
}

/// How an entry of this type is judged complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// Every checked requirement and the citation key must resolve.
    #[default]
    Requirements,
    /// Control types that carry no bibliographic data.
    Always,
    /// Fallback type; entries of it always need attention.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOrigin {
    Standard,
    Custom,
}

/// An immutable entry type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryType {
    name: String,
    required: Vec<Requirement>,
    /// Overrides `required` for the completeness check.
    checked: Option<Vec<Requirement>>,
    optional: Vec<String>,
    primary_optional: Vec<String>,
    completeness: Completeness,
    visible_in_new_entry_dialog: bool,
    origin: TypeOrigin,
}

impl EntryType {
    /// Create a standard type with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: Vec::new(),
            checked: None,
            optional: Vec::new(),
            primary_optional: Vec::new(),
            completeness: Completeness::Requirements,
            visible_in_new_entry_dialog: true,
            origin: TypeOrigin::Standard,
        }
    }

    /// Required fields in customization notation (`author/editor`).
    #[must_use]
    pub fn required(mut self, specs: &[&str]) -> Self {
        self.required = specs.iter().filter_map(|s| Requirement::parse(s)).collect();
        self
    }

    /// Requirements the completeness check uses instead of the required
    /// list, in the same notation.
    #[must_use]
    pub fn checks(mut self, specs: &[&str]) -> Self {
        self.checked = Some(specs.iter().filter_map(|s| Requirement::parse(s)).collect());
        self
    }

    #[must_use]
    pub fn optional(mut self, fields: &[&str]) -> Self {
        self.optional = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn primary_optional(mut self, fields: &[&str]) -> Self {
        self.primary_optional = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub const fn completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = completeness;
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible_in_new_entry_dialog = false;
        self
    }

    #[must_use]
    pub(crate) const fn with_origin(mut self, origin: TypeOrigin) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub(crate) fn with_requirements(mut self, required: Vec<Requirement>) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub(crate) fn with_optional_fields(
        mut self,
        optional: Vec<String>,
        primary_optional: Vec<String>,
    ) -> Self {
        self.optional = optional;
        self.primary_optional = primary_optional;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.required
    }

    /// Requirements judged by [`Self::has_all_required_fields`].
    #[must_use]
    pub fn checked_requirements(&self) -> &[Requirement] {
        self.checked.as_deref().unwrap_or(&self.required)
    }

    /// All required fields, alternatives flattened, in definition order.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.required
            .iter()
            .flat_map(Requirement::fields)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn optional_fields(&self) -> &[String] {
        &self.optional
    }

    #[must_use]
    pub fn primary_optional_fields(&self) -> &[String] {
        &self.primary_optional
    }

    #[must_use]
    pub fn utility_fields(&self) -> &'static [&'static str] {
        UTILITY_FIELDS
    }

    /// Required fields with alternatives joined by slashes.
    #[must_use]
    pub fn required_fields_for_customization(&self) -> Vec<String> {
        self.required.iter().map(ToString::to_string).collect()
    }

    /// `AUTHOR, TITLE, JOURNAL and YEAR`, or `None` without requirements.
    #[must_use]
    pub fn describe_required_fields(&self) -> String {
        let parts: Vec<String> = self
            .required
            .iter()
            .map(|req| {
                req.fields()
                    .iter()
                    .map(|f| f.to_uppercase())
                    .collect::<Vec<_>>()
                    .join(" and/or ")
            })
            .collect();

        match parts.as_slice() {
            [] => "None".to_string(),
            [only] => only.clone(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        }
    }

    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required_fields().contains(&field)
    }

    #[must_use]
    pub fn is_optional(&self, field: &str) -> bool {
        self.optional.iter().any(|f| f == field)
    }

    #[must_use]
    pub const fn is_visible_in_new_entry_dialog(&self) -> bool {
        self.visible_in_new_entry_dialog
    }

    #[must_use]
    pub const fn origin(&self) -> TypeOrigin {
        self.origin
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.origin == TypeOrigin::Custom
    }

    /// Whether `entry` carries everything this type demands, following
    /// `crossref` inheritance through `database`.
    #[must_use]
    pub fn has_all_required_fields(&self, entry: &BibEntry, database: &BibDatabase) -> bool {
        match self.completeness {
            Completeness::Always => true,
            Completeness::Never => false,
            Completeness::Requirements => {
                database.all_fields_present(entry, &[KEY_FIELD])
                    && self
                        .checked_requirements()
                        .iter()
                        .all(|req| req.is_satisfied_by(entry, database))
            }
        }
    }

    /// Requirements `entry` does not satisfy, in definition order.
    #[must_use]
    pub fn missing_requirements<'a>(
        &'a self,
        entry: &BibEntry,
        database: &BibDatabase,
    ) -> Vec<&'a Requirement> {
        if self.completeness != Completeness::Requirements {
            return Vec::new();
        }
        self.checked_requirements()
            .iter()
            .filter(|req| !req.is_satisfied_by(entry, database))
            .collect()
    }

    /// Emergency type for entries whose type was removed.
    #[must_use]
    pub fn typeless() -> Self {
        Self::new("Typeless")
            .completeness(Completeness::Never)
            .hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> EntryType {
        EntryType::new("Article")
            .required(&["author", "title", "journal", "year"])
            .optional(&["volume", "number", "pages", "month", "note"])
    }

    #[test]
    fn parse_requirement() {
        assert_eq!(
            Requirement::parse("title"),
            Some(Requirement::Field("title".into()))
        );
        assert_eq!(
            Requirement::parse("Author/Editor"),
            Some(Requirement::AnyOf(vec!["author".into(), "editor".into()]))
        );
        assert_eq!(Requirement::parse(" / "), None);
    }

    #[test]
    fn describe_lists_fields() {
        assert_eq!(
            article().describe_required_fields(),
            "AUTHOR, TITLE, JOURNAL and YEAR"
        );
        let book = EntryType::new("Book").required(&["title", "author/editor"]);
        assert_eq!(
            book.describe_required_fields(),
            "TITLE and AUTHOR and/or EDITOR"
        );
        assert_eq!(EntryType::new("Misc").describe_required_fields(), "None");
    }

    #[test]
    fn required_and_optional_lookup() {
        let t = article();
        assert!(t.is_required("journal"));
        assert!(!t.is_required("volume"));
        assert!(t.is_optional("volume"));
        assert!(!t.is_optional("title"));
        assert_eq!(t.utility_fields(), &["search"]);
    }

    #[test]
    fn completeness_needs_key_and_fields() {
        let db = BibDatabase::new();
        let t = article();
        let mut entry = BibEntry::new("article")
            .with_field("author", "A")
            .with_field("title", "T")
            .with_field("journal", "J")
            .with_field("year", "2020");
        assert!(!t.has_all_required_fields(&entry, &db));
        entry.key = Some("a2020".into());
        assert!(t.has_all_required_fields(&entry, &db));
        entry.clear_field("journal");
        assert!(!t.has_all_required_fields(&entry, &db));
        assert_eq!(
            t.missing_requirements(&entry, &db),
            vec![&Requirement::Field("journal".into())]
        );
    }

    #[test]
    fn checked_list_overrides_requirements() {
        let db = BibDatabase::new();
        let t = article().checks(&["author", "title", "journal", "year", "volume", "pages"]);
        assert_eq!(t.required_fields(), vec!["author", "title", "journal", "year"]);

        let mut entry = BibEntry::new("article")
            .with_key("a2020")
            .with_field("author", "A")
            .with_field("title", "T")
            .with_field("journal", "J")
            .with_field("year", "2020");
        assert!(!t.has_all_required_fields(&entry, &db));
        assert_eq!(
            t.missing_requirements(&entry, &db),
            vec![
                &Requirement::Field("volume".into()),
                &Requirement::Field("pages".into())
            ]
        );
        entry.set_field("volume", "3");
        entry.set_field("pages", "1--10");
        assert!(t.has_all_required_fields(&entry, &db));
    }

    #[test]
    fn typeless_is_never_complete() {
        let db = BibDatabase::new();
        let entry = BibEntry::new("typeless").with_key("k");
        assert!(!EntryType::typeless().has_all_required_fields(&entry, &db));
    }
}
