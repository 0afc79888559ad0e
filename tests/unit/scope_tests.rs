use searchable::catalog::{Category, Item};
use searchable::search::{SearchScope, available_scopes};
use searchable::test_utils::fixtures::{generated_items, sample_items};
use searchable::test_utils::{TestCase, run_table_tests};

#[test]
fn scopes_parse_from_cli_names() -> Result<(), String> {
    let cases = vec![
        TestCase::new("all", "all", Ok(SearchScope::All)),
        TestCase::new("all uppercase", "ALL", Ok(SearchScope::All)),
        TestCase::new(
            "category",
            "georgian",
            Ok(SearchScope::ByCategory(Category::Georgian)),
        ),
        TestCase::new(
            "category mixed case",
            "Japanese",
            Ok(SearchScope::ByCategory(Category::Japanese)),
        ),
        TestCase::new("unknown", "thai", Err(())),
    ];

    run_table_tests(cases, |name| name.parse::<SearchScope>().map_err(|_| ()))
}

#[test]
fn sample_catalog_offers_all_then_each_category_once() {
    let titles: Vec<String> = available_scopes(&sample_items())
        .into_iter()
        .map(SearchScope::title)
        .collect();
    assert_eq!(
        titles,
        vec!["All", "Georgian", "Russian", "Italian", "French", "Japanese"]
    );
}

#[test]
fn repeated_categories_do_not_repeat_scopes() {
    let scopes = available_scopes(&generated_items(4));
    assert_eq!(scopes.len(), 1 + Category::ALL.len());
}

#[test]
fn empty_catalog_offers_only_all() {
    assert_eq!(available_scopes(&[]), vec![SearchScope::All]);
}

#[test]
fn scope_contains_only_its_category() {
    let ramen = Item::new("5", "Ramen", Category::Japanese);
    assert!(SearchScope::All.contains(&ramen));
    assert!(SearchScope::ByCategory(Category::Japanese).contains(&ramen));
    assert!(!SearchScope::ByCategory(Category::French).contains(&ramen));
}

#[test]
fn scope_serializes_with_kind_tag() {
    insta::assert_snapshot!(
        serde_json::to_string(&SearchScope::ByCategory(Category::French)).unwrap(),
        @r#"{"kind":"by_category","category":"french"}"#
    );
    insta::assert_snapshot!(
        serde_json::to_string(&SearchScope::All).unwrap(),
        @r#"{"kind":"all"}"#
    );
}
