use std::path::PathBuf;
use std::time::Duration;

use searchable::SearchableError;
use searchable::config::Config;
use searchable::search::EngineSettings;
use searchable::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_fixtures_layer_over_defaults() -> Result<(), String> {
    let cases = vec![
        TestCase::new(
            "default",
            "tests/fixtures/configs/default.toml",
            (300u64, 3usize, "Restaurants".to_string()),
        ),
        TestCase::new(
            "fast search, default view",
            "tests/fixtures/configs/fast.toml",
            (20, 4, "Restaurants".to_string()),
        ),
        TestCase::new(
            "view only",
            "tests/fixtures/configs/menu.toml",
            (300, 3, "Menu".to_string()),
        ),
    ];

    run_table_tests(cases, |relative| {
        let config = Config::from_file(&fixture_path(relative)).expect("load fixture");
        (
            config.search.debounce_ms,
            config.search.short_query_threshold,
            config.view.title,
        )
    })
}

#[test]
fn wrongly_typed_value_is_a_config_error() {
    let err = Config::from_file(&fixture_path("tests/fixtures/configs/invalid.toml")).unwrap_err();
    assert!(matches!(err, SearchableError::Config(_)));
    assert_eq!(err.code(), "config_error");
}

#[test]
fn absent_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_file(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_missing_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert_eq!(err.code(), "missing_config");
}

#[test]
fn engine_settings_follow_search_config() {
    let config = Config::from_file(&fixture_path("tests/fixtures/configs/fast.toml")).unwrap();
    let settings = EngineSettings::from(&config.search);
    assert_eq!(settings.quiet_period, Duration::from_millis(20));
    assert_eq!(settings.short_query_threshold, 4);
}

#[test]
fn default_config_serializes_to_toml() {
    let rendered = toml::to_string(&Config::default()).unwrap();
    assert!(rendered.contains("debounce_ms = 300"));
    assert!(rendered.contains("title = \"Restaurants\""));
}
