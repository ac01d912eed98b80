use std::fs;
use std::path::Path;
use tempfile::TempDir;

use tripsearch_core::config::{expand_path, resolve_with_base, Config, SearchSettings};
use tripsearch_core::traits::Localized;
use tripsearch_core::types::Language;
use tripsearch_core::{Catalog, Error, Lexicon};

#[test]
fn builtin_catalog_has_places_provinces_categories() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    assert_eq!(catalog.places.len(), 4);
    assert_eq!(catalog.provinces.len(), 5);
    assert_eq!(catalog.categories.len(), 5);

    let phi_phi = catalog.place("1").expect("place 1");
    assert_eq!(phi_phi.name_in(Language::Th), "เกาะพีพี");
    assert_eq!(phi_phi.view(Language::En).unwrap().province, "Krabi");
    assert!(phi_phi.location.is_some());
    for p in &catalog.places {
        assert!(p.description.contains_key("th") && p.description.contains_key("en"), "{} lacks a language", p.id);
    }
}

#[test]
fn catalog_from_json_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"places":[{"id":"a","name":"Railay","name_local":"ไร่เลย์","province":"Krabi",
            "province_local":"กระบี่","category":"Beach","tags":[],"tags_local":[],
            "rating":4.2,"review_count":3,"image":"","description":{"en":"Cliffs","th":"หน้าผา"}}]}"#,
    )
    .unwrap();

    let catalog = Catalog::from_json_file(&path).expect("load");
    assert_eq!(catalog.places.len(), 1, "one place");
    assert!(catalog.provinces.is_empty());
    assert!(catalog.places[0].amenities.is_empty());
    assert!(!catalog.is_empty());
}

#[test]
fn catalog_errors_are_typed() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.json");
    assert!(matches!(Catalog::from_json_file(&missing), Err(Error::NotFound(_))));

    let broken = tmp.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Catalog::from_json_file(&broken), Err(Error::Json(_))));
}

#[test]
fn lexicon_from_toml_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lexicon.toml");
    fs::write(
        &path,
        r#"
[en]
category_keywords = ["diving"]
activity_keywords = ["diving"]

[[en.synonyms]]
key = "reef"
related = ["coral"]

[th]
"#,
    )
    .unwrap();

    let lexicon = Lexicon::from_toml_file(&path).expect("lexicon");
    let en = lexicon.tables(Language::En);
    assert_eq!(en.synonyms[0].related, ["coral"]);
    assert!(en.location_words.is_empty());
    assert!(lexicon.tables(Language::Th).synonyms.is_empty());

    assert!(matches!(Lexicon::from_toml_file(Path::new("/definitely/missing.toml")), Err(Error::NotFound(_))));
}

#[test]
fn config_layers_file_and_env() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("RUST_ENV", "test");
        jail.create_file("config.toml", "[search]\nmax_results = 15\ncatalog_path = \"data/catalog.json\"\n")?;
        jail.create_file("config.test.toml", "[search]\nmax_suggestions = 4\n")?;
        jail.set_env("APP_SEARCH__MAX_RESULTS", "7");

        let config = Config::load().expect("config");
        let settings = config.search_settings().expect("settings");
        assert_eq!(settings.max_results, 7);
        assert_eq!(settings.max_suggestions, 4);
        assert_eq!(settings.catalog_path.as_deref(), Some("data/catalog.json"));
        assert_eq!(config.get::<usize>("search.max_suggestions").expect("key"), 4);
        Ok(())
    });
}

#[test]
fn config_defaults_without_files() {
    figment::Jail::expect_with(|_jail| {
        let config = Config::load().expect("config");
        assert_eq!(config.search_settings().expect("settings"), SearchSettings::default());
        Ok(())
    });
}

#[test]
fn config_rejects_zero_result_cap() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[search]\nmax_results = 0\n")?;
        assert!(matches!(Config::load(), Err(Error::InvalidConfig(_))));
        Ok(())
    });
}

#[test]
fn resolve_relative_paths_against_base() {
    let base = Path::new("/srv/tripsearch");
    assert_eq!(resolve_with_base(base, "data/catalog.json"), base.join("data/catalog.json"));
    assert_eq!(resolve_with_base(base, "/etc/catalog.json"), Path::new("/etc/catalog.json"));
    assert_eq!(expand_path("plain/path"), Path::new("plain/path"));
}
