//! Integration tests for simple search over a small library.
//!
//! Covers the documented query behaviours end to end: tokenizing,
//! literal and regex matching, case handling and invalid patterns.

use bibref_core::{BibDatabase, BibEntry};
use bibref_search::{BasicSearch, CompiledQuery, SearchConfig, SearchRule, parse_query};

fn library() -> BibDatabase {
    BibDatabase::from_entries(vec![
        BibEntry::new("article")
            .with_key("dls")
            .with_field("title", "Deep Learning Systems")
            .with_field("journal", "Commun. ACM")
            .with_field("year", "2021"),
        BibEntry::new("book")
            .with_key("taocp")
            .with_field("title", r"The Art of Computer Programming")
            .with_field("author", r"Knuth, Donald E.")
            .with_field("year", "1968"),
        BibEntry::new("inproceedings")
            .with_key("goedel")
            .with_field("title", r"On formally undecidable propositions")
            .with_field("author", r#"G\"{o}del, Kurt"#)
            .with_field("year", "1931"),
    ])
}

fn keys(query: &str, config: SearchConfig) -> Vec<String> {
    let compiled = CompiledQuery::compile(query, config)
        .unwrap_or_else(|e| panic!("query should compile: {e}"));
    compiled
        .filter(&library())
        .into_iter()
        .filter_map(|e| e.key.clone())
        .collect()
}

#[test]
fn test_tokenizer_examples() {
    assert!(parse_query("").is_empty());
    assert_eq!(parse_query("foo bar"), vec!["foo", "bar"]);
    assert_eq!(parse_query("\"foo bar\""), vec!["foo bar"]);
    assert_eq!(parse_query(r"foo\ bar"), vec!["foo bar"]);
}

#[test]
fn test_literal_search_across_library() {
    let config = SearchConfig::default();
    assert_eq!(keys("deep systems", config), vec!["dls"]);
    assert!(keys("deep networks", config).is_empty());
    assert_eq!(keys("knuth 1968", config), vec!["taocp"]);
    assert_eq!(keys("godel", config), vec!["goedel"]);
}

#[test]
fn test_phrase_must_be_contiguous() {
    let config = SearchConfig::default();
    assert_eq!(keys("\"computer programming\"", config), vec!["taocp"]);
    assert!(keys("\"programming computer\"", config).is_empty());
}

#[test]
fn test_regex_search_across_library() {
    let config = SearchConfig::new(false, true);
    assert_eq!(keys(r"^19[0-9]{2}$", config), vec!["taocp", "goedel"]);
    assert_eq!(keys(r"^deep.*systems$", config), vec!["dls"]);
    assert_eq!(keys(r"^god.*kurt$", config), vec!["goedel"]);
    assert!(keys(r"\{o\}", config).is_empty());
}

#[test]
fn test_case_sensitive_mode() {
    let rule = BasicSearch::new(true, false);
    let db = library();
    let dls = &db.entries()[0];
    assert!(!rule.apply_rule("DEEP", dls));
    assert!(rule.apply_rule("Deep", dls));
    assert!(BasicSearch::new(false, false).apply_rule("DEEP", dls));
}

#[test]
fn test_invalid_regex_reports_invalid_and_matches_nothing() {
    let rule = BasicSearch::new(false, true);
    assert!(!rule.validate("(unclosed"));
    for entry in library().entries() {
        assert!(!rule.apply_rule("(unclosed", entry));
    }
}
