//! Fixed trigger tables for short-query suggestions.

use crate::catalog::Category;

/// Maps a query substring to a canned completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTrigger {
    pub keyword: &'static str,
    pub suggestion: &'static str,
}

/// Maps a query substring to every item of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTrigger {
    pub keyword: &'static str,
    pub category: Category,
}

pub const TEXT_TRIGGERS: &[TextTrigger] = &[
    TextTrigger {
        keyword: "ra",
        suggestion: "Ramen",
    },
    TextTrigger {
        keyword: "sy",
        suggestion: "Syrniki",
    },
    TextTrigger {
        keyword: "la",
        suggestion: "Lasania",
    },
    TextTrigger {
        keyword: "kh",
        suggestion: "Khinkali",
    },
];

/// Always offered after the keyword hits.
pub const CONSTANT_SUGGESTIONS: &[&str] = &["Food", "Grocery"];

pub const ITEM_TRIGGERS: &[ItemTrigger] = &[
    ItemTrigger {
        keyword: "fre",
        category: Category::French,
    },
    ItemTrigger {
        keyword: "jap",
        category: Category::Japanese,
    },
    ItemTrigger {
        keyword: "geo",
        category: Category::Georgian,
    },
];
