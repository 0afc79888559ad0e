use proptest::prelude::*;

use searchable::catalog::{Category, Item};
use searchable::search::{SearchScope, available_scopes, filter_items};
use searchable::suggestions::Suggester;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn scope() -> impl Strategy<Value = SearchScope> {
    prop_oneof![
        Just(SearchScope::All),
        category().prop_map(SearchScope::ByCategory),
    ]
}

fn catalog() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(("[A-Za-z ]{1,12}", category()), 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (title, category))| Item::new(index.to_string(), title, category))
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_matches_the_substring_law(
        items in catalog(),
        query in "[A-Za-z]{0,4}",
        scope in scope(),
    ) {
        let filtered = filter_items(&items, &query, scope);
        let needle = query.to_lowercase();
        let expected: Vec<Item> = if query.is_empty() {
            Vec::new()
        } else {
            items
                .iter()
                .filter(|item| scope.contains(item))
                .filter(|item| {
                    item.title.to_lowercase().contains(&needle)
                        || item.category.as_str().contains(&needle)
                })
                .cloned()
                .collect()
        };
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_is_case_insensitive(items in catalog(), query in "[a-z]{1,4}") {
        let lower = filter_items(&items, &query, SearchScope::All);
        let upper = filter_items(&items, &query.to_uppercase(), SearchScope::All);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn scopes_start_with_all_and_never_repeat(items in catalog()) {
        let scopes = available_scopes(&items);
        prop_assert_eq!(scopes[0], SearchScope::All);
        for (index, scope) in scopes.iter().enumerate() {
            prop_assert!(!scopes[index + 1..].contains(scope));
        }
        for item in &items {
            prop_assert!(scopes.contains(&SearchScope::ByCategory(item.category)));
        }
    }

    #[test]
    fn suggestions_only_for_short_queries(query in "\\PC{0,8}", threshold in 0usize..6) {
        let suggester = Suggester::new(threshold);
        let text = suggester.text_suggestions(&query);
        if query.chars().count() >= threshold {
            prop_assert!(text.is_empty());
        } else {
            prop_assert!(text.len() >= 7);
        }
    }
}
