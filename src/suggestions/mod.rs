//! Short-query suggestions.
//!
//! While the query is shorter than the threshold, the engine offers canned
//! completions and whole-category item hints driven by fixed trigger tables.

pub mod tables;

use crate::catalog::{Category, Item};

pub use tables::{CONSTANT_SUGGESTIONS, ITEM_TRIGGERS, ItemTrigger, TEXT_TRIGGERS, TextTrigger};

/// Default "short query" threshold, in characters.
pub const DEFAULT_SHORT_QUERY_THRESHOLD: usize = 3;

/// Builds suggestions for queries shorter than `threshold` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    threshold: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_QUERY_THRESHOLD)
    }
}

impl Suggester {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn is_short(&self, query: &str) -> bool {
        query.chars().count() < self.threshold
    }

    /// Keyword hits in table order, then the constants, then every category
    /// title in enumeration order.
    #[must_use]
    pub fn text_suggestions(&self, query: &str) -> Vec<String> {
        if !self.is_short(query) {
            return Vec::new();
        }
        let search = query.to_lowercase();
        let mut suggestions: Vec<String> = TEXT_TRIGGERS
            .iter()
            .filter(|trigger| search.contains(trigger.keyword))
            .map(|trigger| trigger.suggestion.to_string())
            .collect();
        suggestions.extend(CONSTANT_SUGGESTIONS.iter().map(ToString::to_string));
        suggestions.extend(Category::ALL.iter().map(|category| category.title()));
        suggestions
    }

    /// Every item of each triggered category, concatenated in table order.
    ///
    /// An item matched by several triggers appears once per trigger.
    #[must_use]
    pub fn item_suggestions(&self, query: &str, items: &[Item]) -> Vec<Item> {
        if !self.is_short(query) {
            return Vec::new();
        }
        let search = query.to_lowercase();
        ITEM_TRIGGERS
            .iter()
            .filter(|trigger| search.contains(trigger.keyword))
            .flat_map(|trigger| {
                items
                    .iter()
                    .filter(move |item| item.category == trigger.category)
                    .cloned()
            })
            .collect()
    }
}
