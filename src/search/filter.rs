//! Scope narrowing followed by case-insensitive substring matching.

use crate::catalog::Item;

use super::scope::SearchScope;

/// Items in `scope` whose title or category tag contains `query`,
/// ignoring case. An empty query matches nothing.
#[must_use]
pub fn filter_items(items: &[Item], query: &str, scope: SearchScope) -> Vec<Item> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| scope.contains(item))
        .filter(|item| item.matches_lowercase(&needle))
        .cloned()
        .collect()
}
