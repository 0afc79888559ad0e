//! Search scopes and their derivation from a loaded catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Item};

/// Narrows the set of items eligible for text filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    All,
    ByCategory(Category),
}

impl SearchScope {
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::ByCategory(category) => category.title(),
        }
    }

    #[must_use]
    pub fn contains(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::ByCategory(category) => item.category == category,
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::ByCategory(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse::<Category>().map(Self::ByCategory)
    }
}

/// `All` followed by one scope per distinct category, in first-encounter order.
#[must_use]
pub fn available_scopes(items: &[Item]) -> Vec<SearchScope> {
    let mut scopes = vec![SearchScope::All];
    for item in items {
        let scope = SearchScope::ByCategory(item.category);
        if !scopes.contains(&scope) {
            scopes.push(scope);
        }
    }
    scopes
}
