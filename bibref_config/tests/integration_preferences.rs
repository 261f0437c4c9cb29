//! Integration tests for the preferences file and custom type lifecycle.

use bibref_config::Preferences;
use bibref_core::{CustomEntryType, TypeMode};
use bibref_search::SearchConfig;

#[test]
fn test_custom_types_survive_save_and_load() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("bibref").join("preferences.json");

    let mut prefs = Preferences::default();
    let mut registry = prefs.build_registry();
    registry
        .insert_custom(&CustomEntryType::new("Dataset").with_required(&["author/editor", "title"]))
        .unwrap_or_else(|e| panic!("insert: {e}"));
    prefs.store_custom_types(&registry);
    prefs.search = SearchConfig::new(true, true);
    prefs
        .save_to(&path)
        .unwrap_or_else(|e| panic!("save: {e}"));

    let loaded = Preferences::load_from(&path).unwrap_or_else(|e| panic!("load: {e}"));
    assert_eq!(loaded, prefs);

    let rebuilt = loaded.build_registry();
    let dataset = rebuilt
        .get("DATASET")
        .unwrap_or_else(|| panic!("dataset missing"));
    assert!(dataset.is_custom());
    assert_eq!(
        dataset.required_fields_for_customization(),
        vec!["author/editor", "title"]
    );
}

#[test]
fn test_removed_custom_type_is_purged_on_save() {
    let mut prefs = Preferences {
        custom_entry_types: vec![
            CustomEntryType::new("Dataset"),
            CustomEntryType::new("Article").with_required(&["title"]),
        ],
        ..Preferences::default()
    };
    let mut registry = prefs.build_registry();
    registry.remove("dataset");
    registry.remove("article");
    prefs.store_custom_types(&registry);

    assert!(prefs.custom_entry_types.is_empty());
    assert!(registry.get("article").is_some_and(|t| t.is_required("journal")));
}

#[test]
fn test_create_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("preferences.json");

    Preferences::create_at(&path).unwrap_or_else(|e| panic!("create: {e}"));
    assert!(Preferences::create_at(&path).is_err());

    let loaded = Preferences::load_from(&path).unwrap_or_else(|e| panic!("load: {e}"));
    assert_eq!(loaded.type_mode(), TypeMode::Bibtex);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap_or_else(|e| panic!("write: {e}"));

    let err = Preferences::load_from(&path).err().unwrap_or_else(|| panic!("should fail"));
    assert!(err.to_string().contains("Malformed preferences"));
}
