//! BibLaTeX entry types, including the legacy BibTeX aliases.
//!
//! BibLaTeX accepts `date` in place of `year`, so date requirements are
//! written as `year/date`.

use once_cell::sync::Lazy;

use super::{Completeness, EntryType};

const COMMON_OPTIONAL: &[&str] = &[
    "subtitle", "titleaddon", "language", "note", "addendum", "pubstate", "doi", "eprint",
    "eprintclass", "eprinttype", "url", "urldate",
];

fn with_common(extra: &[&'static str]) -> Vec<&'static str> {
    extra.iter().chain(COMMON_OPTIONAL).copied().collect()
}

fn article(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "journaltitle", "year/date"])
        .optional(&with_common(&[
            "translator", "annotator", "commentator", "journalsubtitle", "issuetitle",
            "issuesubtitle", "origlanguage", "series", "volume", "number", "eid", "issue",
            "month", "pages", "version", "issn",
        ]))
        .primary_optional(&["volume", "number", "pages", "doi"])
}

fn book(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "year/date"])
        .optional(&with_common(&[
            "editor", "translator", "annotator", "commentator", "introduction", "foreword",
            "afterword", "maintitle", "mainsubtitle", "origlanguage", "volume", "part",
            "edition", "volumes", "series", "number", "publisher", "location", "isbn",
            "chapter", "pages", "pagetotal",
        ]))
        .primary_optional(&["publisher", "location", "isbn"])
}

fn part_of_book(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "booktitle", "year/date"])
        .optional(&with_common(&[
            "bookauthor", "editor", "translator", "annotator", "commentator", "introduction",
            "foreword", "afterword", "booksubtitle", "booktitleaddon", "maintitle",
            "origlanguage", "volume", "part", "edition", "volumes", "series", "number",
            "publisher", "location", "isbn", "chapter", "pages",
        ]))
        .primary_optional(&["publisher", "location", "pages"])
}

fn collection(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["editor", "title", "year/date"])
        .optional(&with_common(&[
            "translator", "annotator", "commentator", "introduction", "foreword",
            "afterword", "maintitle", "origlanguage", "volume", "part", "edition", "volumes",
            "series", "number", "publisher", "location", "isbn", "chapter", "pages",
            "pagetotal",
        ]))
        .primary_optional(&["publisher", "location"])
}

fn in_collection(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "booktitle", "year/date"])
        .optional(&with_common(&[
            "editor", "translator", "annotator", "commentator", "introduction", "foreword",
            "afterword", "booksubtitle", "booktitleaddon", "maintitle", "origlanguage",
            "volume", "part", "edition", "volumes", "series", "number", "publisher",
            "location", "isbn", "chapter", "pages",
        ]))
        .primary_optional(&["editor", "publisher", "pages"])
}

fn in_proceedings(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "booktitle", "year/date"])
        .optional(&with_common(&[
            "editor", "booksubtitle", "booktitleaddon", "maintitle", "eventtitle",
            "eventdate", "venue", "volume", "part", "volumes", "series", "number",
            "organization", "publisher", "location", "isbn", "chapter", "pages",
        ]))
        .primary_optional(&["editor", "publisher", "pages"])
}

fn online(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author/editor", "title", "year/date", "url"])
        .optional(&with_common(&["version", "organization", "month"]))
        .primary_optional(&["urldate"])
}

fn report(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "institution", "year/date"])
        .optional(&with_common(&[
            "type", "number", "version", "location", "month", "isrn", "chapter", "pages",
            "pagetotal",
        ]))
        .primary_optional(&["number", "type"])
}

fn thesis(name: &str) -> EntryType {
    EntryType::new(name)
        .required(&["author", "title", "institution", "year/date"])
        .optional(&with_common(&[
            "type", "location", "month", "isbn", "chapter", "pages", "pagetotal",
        ]))
        .primary_optional(&["type"])
}

pub(crate) static TYPES: Lazy<Vec<(&'static str, EntryType)>> = Lazy::new(|| {
    vec![
        ("article", article("Article")),
        ("book", book("Book")),
        ("inbook", part_of_book("InBook")),
        ("bookinbook", part_of_book("BookInBook")),
        ("suppbook", part_of_book("SuppBook")),
        (
            "booklet",
            EntryType::new("Booklet")
                .required(&["author/editor", "title", "year/date"])
                .optional(&with_common(&[
                    "howpublished", "type", "location", "chapter", "pages", "pagetotal",
                    "month",
                ])),
        ),
        ("collection", collection("Collection")),
        ("incollection", in_collection("InCollection")),
        ("suppcollection", in_collection("SuppCollection")),
        (
            "manual",
            EntryType::new("Manual")
                .required(&["author/editor", "title", "year/date"])
                .optional(&with_common(&[
                    "edition", "type", "series", "number", "version", "organization",
                    "publisher", "location", "isbn", "chapter", "pages", "pagetotal",
                ])),
        ),
        (
            "misc",
            EntryType::new("Misc")
                .required(&["author/editor", "title", "year/date"])
                .optional(&with_common(&[
                    "howpublished", "type", "version", "organization", "location", "month",
                ])),
        ),
        ("online", online("Online")),
        (
            "patent",
            EntryType::new("Patent")
                .required(&["author", "title", "number", "year/date"])
                .optional(&with_common(&[
                    "holder", "type", "version", "location", "month",
                ])),
        ),
        (
            "periodical",
            EntryType::new("Periodical")
                .required(&["editor", "title", "year/date"])
                .optional(&with_common(&[
                    "editora", "editorb", "editorc", "issuetitle", "issuesubtitle", "series",
                    "volume", "number", "issue", "month", "issn",
                ])),
        ),
        ("suppperiodical", article("SuppPeriodical")),
        (
            "proceedings",
            EntryType::new("Proceedings")
                .required(&["title", "year/date"])
                .optional(&with_common(&[
                    "editor", "maintitle", "eventtitle", "eventdate", "venue", "volume",
                    "part", "volumes", "series", "number", "organization", "publisher",
                    "location", "isbn", "chapter", "pages", "pagetotal",
                ])),
        ),
        ("inproceedings", in_proceedings("InProceedings")),
        ("reference", collection("Reference")),
        ("inreference", in_collection("InReference")),
        ("report", report("Report")),
        (
            "set",
            EntryType::new("Set")
                .required(&["entryset", "crossref"])
                .hidden(),
        ),
        ("thesis", thesis("Thesis")),
        (
            "unpublished",
            EntryType::new("Unpublished")
                .required(&["author", "title", "year/date"])
                .optional(&with_common(&["howpublished", "location", "month"])),
        ),
        ("conference", in_proceedings("Conference")),
        ("electronic", online("Electronic")),
        ("mastersthesis", thesis("MastersThesis")),
        ("phdthesis", thesis("PhdThesis")),
        ("techreport", report("TechReport")),
        ("www", online("WWW")),
        (
            "ieeetranbstctl",
            EntryType::new("IEEEtranBSTCTL")
                .completeness(Completeness::Always)
                .hidden(),
        ),
    ]
});
