//! Catalog items and their categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of item categories.
///
/// Declaration order is the enumeration order used wherever categories are
/// listed (suggestions, help text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Russian,
    Georgian,
    Italian,
    French,
    Japanese,
}

impl Category {
    /// Every category, in enumeration order.
    pub const ALL: [Self; 5] = [
        Self::Russian,
        Self::Georgian,
        Self::Italian,
        Self::French,
        Self::Japanese,
    ];

    /// Raw lowercase tag, the value matched against search queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Russian => "russian",
            Self::Georgian => "georgian",
            Self::Italian => "italian",
            Self::French => "french",
            Self::Japanese => "japanese",
        }
    }

    /// Display title ("Japanese").
    #[must_use]
    pub fn title(self) -> String {
        capitalize_words(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| {
                let known = Self::ALL.map(Self::as_str).join("|");
                format!("unknown category {value} (expected {known})")
            })
    }
}

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub category: Category,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
        }
    }

    /// Case-insensitive substring match over title and category tag.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.as_str().contains(needle)
    }
}

/// Uppercase the first letter of every whitespace-separated word and
/// lowercase the rest.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
