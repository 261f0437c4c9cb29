//! Standard BibTeX entry types.
//!
//! Field lists follow the classic BibTeX styles; `author/editor` style
//! requirements are satisfied by either field.

use once_cell::sync::Lazy;

use super::{Completeness, EntryType};

const PROCEEDINGS_PAPER_OPTIONAL: &[&str] = &[
    "editor",
    "volume",
    "number",
    "series",
    "pages",
    "address",
    "month",
    "organization",
    "publisher",
    "note",
];

const THESIS_OPTIONAL: &[&str] = &["type", "address", "month", "note"];

pub(crate) static TYPES: Lazy<Vec<(&'static str, EntryType)>> = Lazy::new(|| {
    vec![
        (
            "article",
            EntryType::new("Article")
                .required(&["author", "title", "journal", "year"])
                .checks(&["author", "title", "journal", "year", "volume", "pages"])
                .optional(&["volume", "number", "pages", "month", "note"]),
        ),
        (
            "inbook",
            EntryType::new("InBook")
                .required(&["author/editor", "title", "chapter/pages", "year", "publisher"])
                .optional(&[
                    "volume", "number", "series", "type", "address", "edition", "month", "note",
                ]),
        ),
        (
            "book",
            EntryType::new("Book")
                .required(&["title", "publisher", "year", "author/editor"])
                .optional(&[
                    "volume", "number", "series", "address", "edition", "month", "note",
                ]),
        ),
        (
            "booklet",
            EntryType::new("Booklet")
                .required(&["title"])
                .optional(&["author", "howpublished", "address", "month", "year", "note"]),
        ),
        (
            "incollection",
            EntryType::new("InCollection")
                .required(&["author", "title", "booktitle", "publisher", "year"])
                .optional(&[
                    "editor", "volume", "number", "series", "type", "chapter", "pages",
                    "address", "edition", "month", "note",
                ]),
        ),
        (
            "conference",
            EntryType::new("Conference")
                .required(&["author", "title", "booktitle", "year"])
                .optional(PROCEEDINGS_PAPER_OPTIONAL),
        ),
        (
            "inproceedings",
            EntryType::new("InProceedings")
                .required(&["author", "title", "booktitle", "year"])
                .optional(PROCEEDINGS_PAPER_OPTIONAL),
        ),
        (
            "proceedings",
            EntryType::new("Proceedings")
                .required(&["title", "year"])
                .optional(&[
                    "editor", "volume", "number", "series", "address", "publisher", "note",
                    "month", "organization",
                ]),
        ),
        (
            "manual",
            EntryType::new("Manual").required(&["title"]).optional(&[
                "author", "organization", "address", "edition", "month", "year", "note",
            ]),
        ),
        (
            "mastersthesis",
            EntryType::new("MastersThesis")
                .required(&["author", "title", "school", "year"])
                .optional(THESIS_OPTIONAL),
        ),
        (
            "phdthesis",
            EntryType::new("PhdThesis")
                .required(&["author", "title", "school", "year"])
                .optional(THESIS_OPTIONAL),
        ),
        (
            "techreport",
            EntryType::new("TechReport")
                .required(&["author", "title", "institution", "year"])
                .optional(&["type", "number", "address", "month", "note"]),
        ),
        (
            "unpublished",
            EntryType::new("Unpublished")
                .required(&["author", "title", "note"])
                .optional(&["month", "year"]),
        ),
        (
            "patent",
            EntryType::new("Patent")
                .required(&["nationality", "number", "year/yearfiled"])
                .checks(&["number", "year/yearfiled"])
                .optional(&[
                    "author", "title", "language", "assignee", "address", "type", "day",
                    "dayfiled", "month", "monthfiled", "note", "url",
                ]),
        ),
        (
            "standard",
            EntryType::new("Standard")
                .required(&["title", "organization/institution"])
                .optional(&[
                    "author", "language", "howpublished", "type", "number", "revision",
                    "address", "month", "year", "note", "url",
                ]),
        ),
        (
            "electronic",
            EntryType::new("Electronic").optional(&[
                "author", "month", "year", "title", "language", "howpublished",
                "organization", "address", "note", "url",
            ]),
        ),
        (
            "periodical",
            EntryType::new("Periodical")
                .required(&["title", "year"])
                .optional(&[
                    "editor", "language", "series", "volume", "number", "organization",
                    "month", "note", "url",
                ]),
        ),
        (
            "misc",
            EntryType::new("Misc")
                .optional(&["author", "title", "howpublished", "month", "year", "note"]),
        ),
        (
            "other",
            EntryType::new("Other").completeness(Completeness::Always),
        ),
        (
            "ieeetranbstctl",
            EntryType::new("IEEEtranBSTCTL")
                .optional(&[
                    "ctluse_article_number",
                    "ctluse_paper",
                    "ctluse_forced_etal",
                    "ctlmax_names_forced_etal",
                    "ctlnames_show_etal",
                    "ctluse_alt_spacing",
                    "ctlalt_stretch_factor",
                    "ctldash_repeated_names",
                    "ctlname_format_string",
                    "ctlname_latex_cmd",
                    "ctlname_url_prefix",
                ])
                .completeness(Completeness::Always)
                .hidden(),
        ),
    ]
});
